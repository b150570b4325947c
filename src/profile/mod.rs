//! Health profile — the record the onboarding wizard builds.

pub mod model;
pub mod patch;

pub use model::{BloodGroup, Gender, HealthProfile};
pub use patch::{ProfilePatch, ProfileUpdate};
