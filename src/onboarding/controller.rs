//! OnboardingController — drives the profile wizard and coordinates the
//! terminal save / initial load with the profile store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::error::OnboardingError;
use crate::profile::{HealthProfile, ProfilePatch, ProfileUpdate};
use crate::store::ProfileStore;

use super::state::OnboardingStep;

/// Drives the fixed five-step wizard over a single [`HealthProfile`].
///
/// One controller owns one profile for the duration of one onboarding
/// session; the profile is never shared with another mutator. Field
/// updates and step navigation are synchronous and infallible; only
/// [`load`](Self::load) and [`save`](Self::save) cross the store
/// boundary and can fail. A failed store call leaves the controller
/// unchanged, so the caller can retry from the same step with the same
/// edits.
pub struct OnboardingController {
    store: Arc<dyn ProfileStore>,
    step: OnboardingStep,
    profile: HealthProfile,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
}

impl OnboardingController {
    /// Start a fresh wizard at `Welcome` with an empty profile.
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self {
            store,
            step: OnboardingStep::Welcome,
            profile: HealthProfile::default(),
            completed: false,
            completed_at: None,
        }
    }

    /// Start the wizard over an existing profile (edit-profile flow).
    pub fn with_profile(store: Arc<dyn ProfileStore>, profile: HealthProfile) -> Self {
        Self {
            profile,
            ..Self::new(store)
        }
    }

    pub fn current_step(&self) -> OnboardingStep {
        self.step
    }

    /// The profile under construction.
    pub fn profile(&self) -> &HealthProfile {
        &self.profile
    }

    /// Whether a save has succeeded. One-way; consumed by the calling UI
    /// to decide subsequent navigation.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// (current index, total steps) for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.step.index(), OnboardingStep::COUNT)
    }

    /// Snapshot for the calling UI.
    pub fn status(&self) -> OnboardingStatus {
        OnboardingStatus {
            step: self.step,
            completed: self.completed,
            completed_at: self.completed_at,
            profile: self.profile.clone(),
        }
    }

    /// Apply a single typed field update. Never fails.
    ///
    /// Copy-on-write: the previous profile value is replaced wholesale by
    /// the merged one, one field changed.
    pub fn apply(&mut self, update: ProfileUpdate) -> &HealthProfile {
        debug!(step = %self.step, ?update, "Applying field update");
        self.apply_patch(&ProfilePatch::from(update))
    }

    /// Apply a bulk patch (any subset of fields proposed).
    pub fn apply_patch(&mut self, patch: &ProfilePatch) -> &HealthProfile {
        self.profile = patch.apply(&self.profile);
        &self.profile
    }

    /// Advance one step, clamped at `Complete`.
    pub fn next_step(&mut self) -> OnboardingStep {
        self.step = self.step.next();
        debug!(step = %self.step, "Advanced wizard step");
        self.step
    }

    /// Go back one step, floored at `Welcome`.
    pub fn previous_step(&mut self) -> OnboardingStep {
        self.step = self.step.previous();
        debug!(step = %self.step, "Went back a wizard step");
        self.step
    }

    /// Jump to `target` if it is at or before the current step.
    ///
    /// Forward jumps are silently ignored and the current step is
    /// returned unchanged.
    pub fn go_to_step(&mut self, target: OnboardingStep) -> OnboardingStep {
        if target.index() <= self.step.index() {
            self.step = target;
            debug!(step = %self.step, "Jumped to wizard step");
        } else {
            debug!(current = %self.step, requested = %target, "Ignoring forward jump");
        }
        self.step
    }

    /// Replace the editing profile with the stored one.
    ///
    /// A store that has no profile yet is not an error; the wizard
    /// simply starts from an empty profile. On a store failure the
    /// editing profile is left unchanged.
    pub async fn load(&mut self) -> Result<(), OnboardingError> {
        match self.store.load_profile().await {
            Ok(Some(profile)) => {
                info!("Loaded existing profile from store");
                self.profile = profile;
                Ok(())
            }
            Ok(None) => {
                info!("No stored profile, starting from an empty one");
                self.profile = HealthProfile::default();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Profile load failed");
                Err(OnboardingError::LoadFailed(e))
            }
        }
    }

    /// Persist the editing profile.
    ///
    /// On success the completion flag is set and the wizard resets to
    /// `Welcome`; ownership of the data passes to the store. On failure
    /// everything is left unchanged so the same edits can be retried.
    pub async fn save(&mut self) -> Result<(), OnboardingError> {
        match self.store.save_profile(&self.profile).await {
            Ok(()) => {
                info!("Profile saved, onboarding complete");
                self.completed = true;
                self.completed_at = Some(Utc::now());
                self.step = OnboardingStep::Welcome;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Profile save failed");
                Err(OnboardingError::SaveFailed(e))
            }
        }
    }
}

/// Snapshot of the onboarding flow for the calling UI.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OnboardingStatus {
    pub step: OnboardingStep,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub profile: HealthProfile,
}
