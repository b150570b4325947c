//! Wire format for the profile store boundary.
//!
//! Every store adapter exchanges [`ProfileRecord`], a flat camelCase
//! record in which the three list fields travel as comma-joined strings.
//! Decoding splits on `,` and drops empty segments (trailing or doubled
//! commas). A list entry containing a literal comma therefore does not
//! round-trip; callers are expected not to produce such entries.

use serde::{Deserialize, Serialize};

use crate::profile::{BloodGroup, Gender, HealthProfile};

/// Flat profile record as stored and transmitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub phone: String,
    pub address: String,
    pub blood_group: String,
    pub height: f32,
    pub weight: f32,
    /// Comma-joined.
    pub allergies: String,
    /// Comma-joined.
    pub medical_conditions: String,
    /// Comma-joined.
    pub medications: String,
    pub emergency_contact: String,
}

/// Join list entries with `,` for transmission.
fn join_list(items: &[String]) -> String {
    items.join(",")
}

/// Split a comma-joined string back into an ordered list, dropping
/// empty segments.
fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

/// Encode a profile into its wire record.
pub fn encode(profile: &HealthProfile) -> ProfileRecord {
    ProfileRecord {
        first_name: profile.first_name.clone(),
        last_name: profile.last_name.clone(),
        date_of_birth: profile.date_of_birth.clone(),
        gender: profile.gender.as_str().to_string(),
        phone: profile.phone.clone(),
        address: profile.address.clone(),
        blood_group: profile.blood_group.as_str().to_string(),
        height: profile.height_cm,
        weight: profile.weight_kg,
        allergies: join_list(&profile.allergies),
        medical_conditions: join_list(&profile.medical_conditions),
        medications: join_list(&profile.medications),
        emergency_contact: profile.emergency_contact.clone(),
    }
}

/// Decode a wire record back into a profile.
pub fn decode(record: &ProfileRecord) -> HealthProfile {
    HealthProfile {
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        date_of_birth: record.date_of_birth.clone(),
        gender: Gender::parse(&record.gender),
        phone: record.phone.clone(),
        address: record.address.clone(),
        blood_group: BloodGroup::parse(&record.blood_group),
        height_cm: record.height,
        weight_kg: record.weight,
        allergies: split_list(&record.allergies),
        medical_conditions: split_list(&record.medical_conditions),
        medications: split_list(&record.medications),
        emergency_contact: record.emergency_contact.clone(),
    }
}
