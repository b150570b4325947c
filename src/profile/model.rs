//! Health profile data model.

use serde::{Deserialize, Serialize};

/// Gender as recorded on the profile.
///
/// `Unspecified` is the empty sentinel for a field the user has not
/// entered yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Unspecified,
    Male,
    Female,
    Other,
}

impl Gender {
    /// Wire representation ("" for the unset sentinel).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Parse the wire representation. Unknown strings map to the sentinel.
    pub fn parse(s: &str) -> Self {
        match s {
            "Male" => Self::Male,
            "Female" => Self::Female,
            "Other" => Self::Other,
            _ => Self::Unspecified,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// ABO/Rh blood group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodGroup {
    #[default]
    Unknown,
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

impl BloodGroup {
    /// Wire representation ("" for the unset sentinel).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }

    /// Parse the wire representation. Unknown strings map to the sentinel.
    pub fn parse(s: &str) -> Self {
        match s {
            "A+" => Self::APositive,
            "A-" => Self::ANegative,
            "B+" => Self::BPositive,
            "B-" => Self::BNegative,
            "AB+" => Self::AbPositive,
            "AB-" => Self::AbNegative,
            "O+" => Self::OPositive,
            "O-" => Self::ONegative,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One user's health profile, built incrementally across the onboarding
/// steps.
///
/// Every field defaults to a defined empty sentinel (empty string, 0.0,
/// empty list, `Unspecified`/`Unknown`) until the user provides it.
/// List fields are insertion-ordered and keep duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    // Identity
    pub first_name: String,
    pub last_name: String,
    /// Free-form date string, stored as entered.
    pub date_of_birth: String,
    pub gender: Gender,
    pub phone: String,
    pub address: String,

    // Medical
    pub blood_group: BloodGroup,
    pub height_cm: f32,
    pub weight_kg: f32,
    pub allergies: Vec<String>,
    pub medical_conditions: Vec<String>,
    pub medications: Vec<String>,

    // Emergency
    pub emergency_contact: String,
}

impl HealthProfile {
    /// Whether every field is still at its empty sentinel.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Body mass index, when both height and weight have been entered.
    pub fn bmi(&self) -> Option<f32> {
        if self.height_cm > 0.0 && self.weight_kg > 0.0 {
            let meters = self.height_cm / 100.0;
            Some(self.weight_kg / (meters * meters))
        } else {
            None
        }
    }

    /// Render the filled-in fields as a human-readable summary.
    ///
    /// Shown on the wizard's final step before saving.
    pub fn summary(&self) -> String {
        let mut parts = vec!["# Health Profile".to_string()];

        let full_name = format!("{} {}", self.first_name, self.last_name);
        let full_name = full_name.trim();
        if !full_name.is_empty() {
            parts.push(format!("- **Name:** {}", full_name));
        }
        if !self.date_of_birth.is_empty() {
            parts.push(format!("- **Date of birth:** {}", self.date_of_birth));
        }
        if self.gender != Gender::Unspecified {
            parts.push(format!("- **Gender:** {}", self.gender));
        }
        if !self.phone.is_empty() {
            parts.push(format!("- **Phone:** {}", self.phone));
        }
        if !self.address.is_empty() {
            parts.push(format!("- **Address:** {}", self.address));
        }
        if self.blood_group != BloodGroup::Unknown {
            parts.push(format!("- **Blood group:** {}", self.blood_group));
        }
        if self.height_cm > 0.0 {
            parts.push(format!("- **Height:** {} cm", self.height_cm));
        }
        if self.weight_kg > 0.0 {
            parts.push(format!("- **Weight:** {} kg", self.weight_kg));
        }
        if let Some(bmi) = self.bmi() {
            parts.push(format!("- **BMI:** {:.1}", bmi));
        }
        if !self.allergies.is_empty() {
            parts.push(format!("- **Allergies:** {}", self.allergies.join(", ")));
        }
        if !self.medical_conditions.is_empty() {
            parts.push(format!(
                "- **Medical conditions:** {}",
                self.medical_conditions.join(", ")
            ));
        }
        if !self.medications.is_empty() {
            parts.push(format!("- **Medications:** {}", self.medications.join(", ")));
        }
        if !self.emergency_contact.is_empty() {
            parts.push(format!(
                "- **Emergency contact:** {}",
                self.emergency_contact
            ));
        }

        parts.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_empty() {
        let p = HealthProfile::default();
        assert!(p.is_empty());
        assert!(p.first_name.is_empty());
        assert_eq!(p.gender, Gender::Unspecified);
        assert_eq!(p.blood_group, BloodGroup::Unknown);
        assert_eq!(p.height_cm, 0.0);
        assert!(p.allergies.is_empty());
    }

    #[test]
    fn bmi_requires_both_measurements() {
        let mut p = HealthProfile::default();
        assert!(p.bmi().is_none());

        p.height_cm = 170.0;
        assert!(p.bmi().is_none());

        p.weight_kg = 65.0;
        let bmi = p.bmi().unwrap();
        assert!((bmi - 22.49).abs() < 0.01, "unexpected BMI {bmi}");
    }

    #[test]
    fn blood_group_wire_roundtrip() {
        let groups = [
            BloodGroup::APositive,
            BloodGroup::ANegative,
            BloodGroup::BPositive,
            BloodGroup::BNegative,
            BloodGroup::AbPositive,
            BloodGroup::AbNegative,
            BloodGroup::OPositive,
            BloodGroup::ONegative,
        ];
        for g in groups {
            assert_eq!(BloodGroup::parse(g.as_str()), g);
        }
        assert_eq!(BloodGroup::parse(""), BloodGroup::Unknown);
        assert_eq!(BloodGroup::parse("XYZ"), BloodGroup::Unknown);
    }

    #[test]
    fn gender_wire_roundtrip() {
        for g in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(Gender::parse(g.as_str()), g);
        }
        assert_eq!(Gender::parse(""), Gender::Unspecified);
        assert_eq!(Gender::parse("unknown"), Gender::Unspecified);
    }

    #[test]
    fn summary_includes_only_filled_fields() {
        let p = HealthProfile {
            first_name: "Asha".to_string(),
            last_name: "Verma".to_string(),
            blood_group: BloodGroup::OPositive,
            allergies: vec!["Penicillin".to_string(), "Dust".to_string()],
            ..Default::default()
        };

        let summary = p.summary();
        assert!(summary.contains("Asha Verma"));
        assert!(summary.contains("O+"));
        assert!(summary.contains("Penicillin, Dust"));
        assert!(!summary.contains("Phone"));
        assert!(!summary.contains("BMI"));
    }

    #[test]
    fn duplicates_in_lists_are_preserved() {
        let p = HealthProfile {
            medications: vec!["Aspirin".to_string(), "Aspirin".to_string()],
            ..Default::default()
        };
        assert_eq!(p.medications.len(), 2);
    }

    #[test]
    fn profile_serde_roundtrip() {
        let p = HealthProfile {
            first_name: "Asha".to_string(),
            gender: Gender::Female,
            blood_group: BloodGroup::AbNegative,
            height_cm: 162.5,
            medical_conditions: vec!["Asthma".to_string()],
            ..Default::default()
        };

        let json = serde_json::to_string(&p).unwrap();
        let parsed: HealthProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);
    }
}
