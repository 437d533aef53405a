//! Clients for external collaborators.

mod identity_client;

pub use identity_client::{sync_metadata, IdentityClient, IdentityMetadata, IdentityProvider};
