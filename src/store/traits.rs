//! `ProfileStore` trait — the async persistence boundary for the
//! health profile.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::profile::HealthProfile;

/// Backend-agnostic profile persistence.
///
/// Exactly two operations cross this boundary. `load_profile` returning
/// `Ok(None)` means "no profile yet" and is not an error; the caller
/// starts from an empty profile. Timeouts and cancellation are the
/// transport's concern, not the trait's.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the stored profile, if any.
    async fn load_profile(&self) -> Result<Option<HealthProfile>, StoreError>;

    /// Persist the given profile, replacing any stored one.
    async fn save_profile(&self, profile: &HealthProfile) -> Result<(), StoreError>;
}
