//! Onboarding service tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use sea_orm::DbErr;
use tokio_test::{assert_err, assert_ok};
use uuid::Uuid;

use account_service_lib::repository::{
    InMemoryStore, MockBusinessRepository, MockRoleRepository, MockUserRepository,
};
use account_service_lib::service::{OnboardingManager, OnboardingService};
use common::AppError;
use domain::{messages, Business, OnboardingRequest, ProfileFields, Role, UserRecord};

const PRINCIPAL: &str = "2b7e1516-28ae-4d2a-a6f7-15889a09cf4f";

fn create_test_user(id: i64, principal_id: &str, fields: &ProfileFields) -> UserRecord {
    UserRecord {
        id,
        principal_id: principal_id.to_string(),
        name: fields.full_name.clone(),
        email: fields.email.clone(),
        phone: fields.phone.clone(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn create_test_business(id: Uuid, owner_id: i64) -> Business {
    Business {
        id,
        owner_id,
        name: "Sonrisas".to_string(),
        description: None,
        logo_url: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn request(role: &str, phone: &str, business_name: Option<&str>) -> OnboardingRequest {
    OnboardingRequest {
        principal_id: PRINCIPAL.to_string(),
        role: role.to_string(),
        profile: ProfileFields::new("Ana", "ana@x.com", phone),
        business_name: business_name.map(str::to_string),
        business_description: None,
    }
}

fn manager(
    users: MockUserRepository,
    roles: MockRoleRepository,
    businesses: MockBusinessRepository,
) -> OnboardingManager {
    OnboardingManager::new(Arc::new(users), Arc::new(roles), Arc::new(businesses))
}

/// Mocks that fail the test if any store call happens.
fn untouched() -> (MockUserRepository, MockRoleRepository, MockBusinessRepository) {
    let mut users = MockUserRepository::new();
    users.expect_upsert_by_principal().never();
    let mut roles = MockRoleRepository::new();
    roles.expect_ensure_owner().never();
    roles.expect_ensure_client().never();
    let mut businesses = MockBusinessRepository::new();
    businesses.expect_find_by_owner().never();
    businesses.expect_insert().never();
    businesses.expect_update().never();
    (users, roles, businesses)
}

#[tokio::test]
async fn test_missing_phone_rejected_before_store() {
    let (users, roles, businesses) = untouched();
    let service = manager(users, roles, businesses);

    let err = assert_err!(service.reconcile(request("client", "", None)).await);
    assert!(matches!(err, AppError::Validation(msg) if msg == messages::CONTACT_FIELDS_REQUIRED));
}

#[tokio::test]
async fn test_missing_principal_rejected_before_store() {
    let (users, roles, businesses) = untouched();
    let service = manager(users, roles, businesses);

    let mut submission = request("client", "555", None);
    submission.principal_id = String::new();

    let err = assert_err!(service.reconcile(submission).await);
    assert!(matches!(err, AppError::Validation(msg) if msg == messages::MISSING_PRINCIPAL));
}

#[tokio::test]
async fn test_unknown_role_rejected_before_store() {
    let (users, roles, businesses) = untouched();
    let service = manager(users, roles, businesses);

    let err = assert_err!(service.reconcile(request("admin", "555", None)).await);
    assert!(matches!(err, AppError::Validation(msg) if msg == messages::ROLE_REQUIRED));
}

#[tokio::test]
async fn test_client_onboarding_creates_client_row() {
    let mut users = MockUserRepository::new();
    users
        .expect_upsert_by_principal()
        .withf(|principal, fields| principal.to_string() == PRINCIPAL && fields.phone == "555")
        .times(1)
        .returning(|principal, fields| Ok(create_test_user(7, principal, fields)));

    let mut roles = MockRoleRepository::new();
    roles
        .expect_ensure_client()
        .with(eq(7))
        .times(1)
        .returning(|_| Ok(true));
    roles.expect_ensure_owner().never();

    let mut businesses = MockBusinessRepository::new();
    businesses.expect_find_by_owner().never();

    let service = manager(users, roles, businesses);
    let outcome = assert_ok!(service.reconcile(request("client", "555", None)).await);

    assert_eq!(outcome.user_id, 7);
    assert_eq!(outcome.role, Role::Client);
}

#[tokio::test]
async fn test_owner_without_business_name_skips_business() {
    let mut users = MockUserRepository::new();
    users
        .expect_upsert_by_principal()
        .returning(|principal, fields| Ok(create_test_user(3, principal, fields)));

    let mut roles = MockRoleRepository::new();
    roles
        .expect_ensure_owner()
        .with(eq(3))
        .times(1)
        .returning(|_| Ok(true));

    let mut businesses = MockBusinessRepository::new();
    businesses.expect_find_by_owner().never();
    businesses.expect_insert().never();
    businesses.expect_update().never();

    let service = manager(users, roles, businesses);
    assert_ok!(service.reconcile(request("owner", "555", None)).await);
}

#[tokio::test]
async fn test_owner_with_existing_business_updates_by_id() {
    let business_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_upsert_by_principal()
        .returning(|principal, fields| Ok(create_test_user(3, principal, fields)));

    let mut roles = MockRoleRepository::new();
    roles.expect_ensure_owner().returning(|_| Ok(false));

    let mut businesses = MockBusinessRepository::new();
    businesses
        .expect_find_by_owner()
        .with(eq(3))
        .returning(move |owner_id| Ok(Some(create_test_business(business_id, owner_id))));
    businesses
        .expect_update()
        .withf(move |id, fields| {
            *id == business_id
                && fields.name == "Sonrisas Norte"
                && fields.logo_url.as_deref() == Some(domain::DEFAULT_BUSINESS_LOGO_URL)
        })
        .times(1)
        .returning(move |id, _| Ok(Some(create_test_business(id, 3))));
    businesses.expect_insert().never();

    let service = manager(users, roles, businesses);
    assert_ok!(
        service
            .reconcile(request("owner", "555", Some("Sonrisas Norte")))
            .await
    );
}

#[tokio::test]
async fn test_owner_without_business_inserts_one() {
    let mut users = MockUserRepository::new();
    users
        .expect_upsert_by_principal()
        .returning(|principal, fields| Ok(create_test_user(3, principal, fields)));

    let mut roles = MockRoleRepository::new();
    roles.expect_ensure_owner().returning(|_| Ok(true));

    let mut businesses = MockBusinessRepository::new();
    businesses.expect_find_by_owner().returning(|_| Ok(None));
    businesses
        .expect_insert()
        .withf(|owner_id, fields| *owner_id == 3 && fields.name == "Sonrisas")
        .times(1)
        .returning(|owner_id, _| Ok(create_test_business(Uuid::new_v4(), owner_id)));
    businesses.expect_update().never();

    let service = manager(users, roles, businesses);
    assert_ok!(service.reconcile(request("owner", "555", Some("Sonrisas"))).await);
}

#[tokio::test]
async fn test_user_save_failure_surfaces_store_message() {
    let mut users = MockUserRepository::new();
    users.expect_upsert_by_principal().returning(|_, _| {
        Err(AppError::from(DbErr::Custom(
            "connection reset by peer".to_string(),
        )))
    });

    let mut roles = MockRoleRepository::new();
    roles.expect_ensure_client().never();

    let service = manager(users, roles, MockBusinessRepository::new());
    let err = assert_err!(service.reconcile(request("client", "555", None)).await);

    assert!(matches!(err, AppError::Store(msg) if msg.contains("connection reset by peer")));
}

#[tokio::test]
async fn test_user_save_failure_without_message_uses_fallback() {
    let mut users = MockUserRepository::new();
    users
        .expect_upsert_by_principal()
        .returning(|_, _| Err(AppError::from(DbErr::RecordNotInserted)));

    let mut roles = MockRoleRepository::new();
    roles.expect_ensure_owner().never();

    let service = manager(users, roles, MockBusinessRepository::new());
    let err = assert_err!(service.reconcile(request("owner", "555", Some("Sonrisas"))).await);

    assert!(matches!(err, AppError::Store(msg) if msg == messages::USER_SAVE_FAILED));
}

#[tokio::test]
async fn test_owner_failure_stops_before_business() {
    let mut users = MockUserRepository::new();
    users
        .expect_upsert_by_principal()
        .returning(|principal, fields| Ok(create_test_user(3, principal, fields)));

    let mut roles = MockRoleRepository::new();
    roles
        .expect_ensure_owner()
        .returning(|_| Err(AppError::from(DbErr::RecordNotInserted)));

    let mut businesses = MockBusinessRepository::new();
    businesses.expect_find_by_owner().never();
    businesses.expect_insert().never();

    let service = manager(users, roles, businesses);
    let err = assert_err!(service.reconcile(request("owner", "555", Some("Sonrisas"))).await);

    assert!(matches!(err, AppError::Store(msg) if msg == messages::OWNER_SAVE_FAILED));
}

// =============================================================================
// Repeated submissions against shared state
// =============================================================================

fn in_memory_manager(store: &InMemoryStore) -> OnboardingManager {
    OnboardingManager::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
    )
}

#[tokio::test]
async fn test_repeated_owner_onboarding_converges() {
    let store = InMemoryStore::new();
    let service = in_memory_manager(&store);

    assert_ok!(service.reconcile(request("owner", "555", Some("Sonrisas"))).await);
    let first_business = store.businesses()[0].id;

    let mut again = request("owner", "556", Some("Sonrisas Centro"));
    again.profile.full_name = "Ana María".to_string();
    assert_ok!(service.reconcile(again).await);

    let users = store.users();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ana María");
    assert_eq!(users[0].phone, "556");

    assert_eq!(store.owners(), vec![users[0].id]);

    let businesses = store.businesses();
    assert_eq!(businesses.len(), 1);
    assert_eq!(businesses[0].id, first_business);
    assert_eq!(businesses[0].name, "Sonrisas Centro");
}

#[tokio::test]
async fn test_reonboarding_without_description_keeps_it() {
    let store = InMemoryStore::new();
    let service = in_memory_manager(&store);

    let mut first = request("owner", "555", Some("Sonrisas"));
    first.business_description = Some("Odontología general".to_string());
    assert_ok!(service.reconcile(first).await);

    assert_ok!(service.reconcile(request("owner", "555", Some("Sonrisas Centro"))).await);

    let businesses = store.businesses();
    assert_eq!(businesses.len(), 1);
    assert_eq!(businesses[0].name, "Sonrisas Centro");
    assert_eq!(businesses[0].description.as_deref(), Some("Odontología general"));

    let mut third = request("owner", "555", Some("Sonrisas Centro"));
    third.business_description = Some("Ortodoncia".to_string());
    assert_ok!(service.reconcile(third).await);
    assert_eq!(store.businesses()[0].description.as_deref(), Some("Ortodoncia"));
}

#[tokio::test]
async fn test_repeated_client_onboarding_creates_one_client() {
    let store = InMemoryStore::new();
    let service = in_memory_manager(&store);

    let first = assert_ok!(service.reconcile(request("client", "555", None)).await);
    let second = assert_ok!(service.reconcile(request("client", "555", None)).await);

    assert_eq!(first.user_id, second.user_id);
    assert_eq!(store.clients(), vec![first.user_id]);
    assert!(store.owners().is_empty());
}
