//! Router middleware.

mod panic;

pub use panic::{handle_onboarding_panic, handle_panic};
