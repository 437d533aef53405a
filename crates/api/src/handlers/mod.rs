//! HTTP handlers.

pub mod business_handler;
pub mod health_handler;
pub mod onboarding_handler;
pub mod profile_handler;
pub mod staff_handler;

pub use business_handler::business_routes;
pub use health_handler::health_routes;
pub use onboarding_handler::onboarding_routes;
pub use profile_handler::profile_routes;
pub use staff_handler::staff_routes;
