//! Onboarding system — the multi-step profile wizard.
//!
//! The wizard walks a fixed five-step sequence, editing one
//! [`HealthProfile`](crate::profile::HealthProfile) field by field.
//! Nothing is persisted mid-flow; the Complete step triggers the one
//! terminal save through the [`ProfileStore`](crate::store::ProfileStore)
//! boundary.

pub mod controller;
pub mod state;

pub use controller::{OnboardingController, OnboardingStatus};
pub use state::OnboardingStep;
