//! Onboarding state machine — tracks which wizard step the user is on.

use serde::{Deserialize, Serialize};

/// The steps of the profile wizard.
///
/// Fixed linear sequence: Welcome → PersonalInfo → MedicalDetails →
/// EmergencyContacts → Complete. Forward movement is clamped at
/// `Complete`, backward movement at `Welcome`; neither is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Welcome,
    PersonalInfo,
    MedicalDetails,
    EmergencyContacts,
    Complete,
}

impl OnboardingStep {
    /// Number of steps in the wizard.
    pub const COUNT: usize = 5;

    /// All steps in wizard order.
    pub const ALL: [OnboardingStep; Self::COUNT] = [
        Self::Welcome,
        Self::PersonalInfo,
        Self::MedicalDetails,
        Self::EmergencyContacts,
        Self::Complete,
    ];

    /// Zero-based position in the sequence.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Step at `index`, clamped to the last step for out-of-range values.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::COUNT - 1)]
    }

    /// The following step, clamped at `Complete`.
    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, floored at `Welcome`.
    pub fn previous(&self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }

    /// Whether this is the terminal step of the sequence.
    pub fn is_last(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl Default for OnboardingStep {
    fn default() -> Self {
        Self::Welcome
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Welcome => "welcome",
            Self::PersonalInfo => "personal_info",
            Self::MedicalDetails => "medical_details",
            Self::EmergencyContacts => "emergency_contacts",
            Self::Complete => "complete",
        };
        write!(f, "{s}")
    }
}
