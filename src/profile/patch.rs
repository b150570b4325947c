//! Typed field updates and PATCH-style merging for [`HealthProfile`].
//!
//! A single wizard keystroke becomes a [`ProfileUpdate`]; a bulk update
//! from the store becomes a [`ProfilePatch`]. Both funnel through the
//! same merge: a field proposed in the patch replaces the current value,
//! an absent field keeps it. An explicitly-empty string or list is a
//! proposed value and clears the field; only `None` means "keep".

use serde::{Deserialize, Serialize};

use super::model::{BloodGroup, Gender, HealthProfile};

/// A single, correctly-typed field update.
///
/// The closed variant set makes an unknown field name or a mistyped
/// value unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileUpdate {
    FirstName(String),
    LastName(String),
    DateOfBirth(String),
    Gender(Gender),
    Phone(String),
    Address(String),
    BloodGroup(BloodGroup),
    HeightCm(f32),
    WeightKg(f32),
    Allergies(Vec<String>),
    MedicalConditions(Vec<String>),
    Medications(Vec<String>),
    EmergencyContact(String),
}

/// A partial profile: `None` per field means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_conditions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
}

/// Merge every listed field: proposed value wins, absent keeps current.
macro_rules! merge_fields {
    ($patch:expr, $current:expr, { $($field:ident),+ $(,)? }) => {
        HealthProfile {
            $($field: match &$patch.$field {
                Some(value) => value.clone(),
                None => $current.$field.clone(),
            },)+
        }
    };
}

impl ProfilePatch {
    /// Produce a new profile from `current` plus the proposed fields.
    ///
    /// Copy-on-write: `current` is untouched.
    pub fn apply(&self, current: &HealthProfile) -> HealthProfile {
        merge_fields!(self, current, {
            first_name,
            last_name,
            date_of_birth,
            gender,
            phone,
            address,
            blood_group,
            height_cm,
            weight_kg,
            allergies,
            medical_conditions,
            medications,
            emergency_contact,
        })
    }

    /// Whether the patch proposes no fields at all.
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

impl From<ProfileUpdate> for ProfilePatch {
    fn from(update: ProfileUpdate) -> Self {
        let mut patch = ProfilePatch::default();
        match update {
            ProfileUpdate::FirstName(v) => patch.first_name = Some(v),
            ProfileUpdate::LastName(v) => patch.last_name = Some(v),
            ProfileUpdate::DateOfBirth(v) => patch.date_of_birth = Some(v),
            ProfileUpdate::Gender(v) => patch.gender = Some(v),
            ProfileUpdate::Phone(v) => patch.phone = Some(v),
            ProfileUpdate::Address(v) => patch.address = Some(v),
            ProfileUpdate::BloodGroup(v) => patch.blood_group = Some(v),
            ProfileUpdate::HeightCm(v) => patch.height_cm = Some(v),
            ProfileUpdate::WeightKg(v) => patch.weight_kg = Some(v),
            ProfileUpdate::Allergies(v) => patch.allergies = Some(v),
            ProfileUpdate::MedicalConditions(v) => patch.medical_conditions = Some(v),
            ProfileUpdate::Medications(v) => patch.medications = Some(v),
            ProfileUpdate::EmergencyContact(v) => patch.emergency_contact = Some(v),
        }
        patch
    }
}
