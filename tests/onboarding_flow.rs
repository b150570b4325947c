//! Integration tests for the full onboarding flow — wizard navigation,
//! field editing, and the terminal save through a real store.

use std::sync::Arc;

use jeevan_profile::onboarding::{OnboardingController, OnboardingStep};
use jeevan_profile::profile::{BloodGroup, Gender, HealthProfile, ProfileUpdate};
use jeevan_profile::store::{MemoryProfileStore, ProfileRecord, ProfileStore};

fn wizard() -> (OnboardingController, Arc<MemoryProfileStore>) {
    let store = Arc::new(MemoryProfileStore::new());
    let controller = OnboardingController::new(Arc::clone(&store) as Arc<dyn ProfileStore>);
    (controller, store)
}

#[tokio::test]
async fn first_run_flow_saves_the_entered_fields() {
    let (mut controller, store) = wizard();

    // No stored profile yet, so the wizard starts blank.
    controller.load().await.unwrap();
    assert!(controller.profile().is_empty());

    controller.next_step(); // PersonalInfo
    controller.apply(ProfileUpdate::FirstName("Asha".to_string()));

    controller.next_step(); // MedicalDetails
    controller.apply(ProfileUpdate::Allergies(vec![
        "Penicillin".to_string(),
        "Dust".to_string(),
    ]));

    controller.next_step(); // EmergencyContacts
    controller.next_step(); // Complete
    assert_eq!(controller.current_step(), OnboardingStep::Complete);

    controller.save().await.unwrap();
    assert!(controller.is_completed());

    // The store received exactly the entered fields, everything else at
    // its empty default, lists comma-joined on the wire.
    let record = store.stored_record().unwrap();
    assert_eq!(record.first_name, "Asha");
    assert_eq!(record.allergies, "Penicillin,Dust");
    assert_eq!(
        record,
        ProfileRecord {
            first_name: "Asha".to_string(),
            allergies: "Penicillin,Dust".to_string(),
            ..Default::default()
        }
    );
}

#[tokio::test]
async fn edit_existing_profile_flow() {
    let store = Arc::new(MemoryProfileStore::with_profile(&HealthProfile {
        first_name: "Ravi".to_string(),
        last_name: "Kumar".to_string(),
        gender: Gender::Male,
        blood_group: BloodGroup::APositive,
        medications: vec!["Metformin".to_string()],
        ..Default::default()
    }));
    let mut controller =
        OnboardingController::new(Arc::clone(&store) as Arc<dyn ProfileStore>);

    controller.load().await.unwrap();
    assert_eq!(controller.profile().first_name, "Ravi");

    // Change one field; everything else must survive the round trip.
    controller.apply(ProfileUpdate::BloodGroup(BloodGroup::ANegative));
    for _ in 0..4 {
        controller.next_step();
    }
    controller.save().await.unwrap();

    let stored = store.load_profile().await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Ravi");
    assert_eq!(stored.last_name, "Kumar");
    assert_eq!(stored.gender, Gender::Male);
    assert_eq!(stored.blood_group, BloodGroup::ANegative);
    assert_eq!(stored.medications, vec!["Metformin".to_string()]);
}

#[tokio::test]
async fn revisiting_an_earlier_step_keeps_edits() {
    let (mut controller, _) = wizard();

    controller.next_step(); // PersonalInfo
    controller.apply(ProfileUpdate::FirstName("Asha".to_string()));
    controller.next_step(); // MedicalDetails
    controller.apply(ProfileUpdate::HeightCm(162.0));

    // Jump back to fix the name, then walk forward again.
    controller.go_to_step(OnboardingStep::PersonalInfo);
    controller.apply(ProfileUpdate::FirstName("Aisha".to_string()));
    controller.next_step();

    assert_eq!(controller.profile().first_name, "Aisha");
    assert_eq!(controller.profile().height_cm, 162.0);
    assert_eq!(controller.current_step(), OnboardingStep::MedicalDetails);
}

#[tokio::test]
async fn failed_save_keeps_the_session_usable() {
    let (mut controller, store) = wizard();

    controller.apply(ProfileUpdate::FirstName("Asha".to_string()));
    controller.apply(ProfileUpdate::EmergencyContact("9876543210".to_string()));
    for _ in 0..4 {
        controller.next_step();
    }

    store.fail_next("backend unreachable");
    let err = controller.save().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to save profile: Connection failed: backend unreachable"
    );
    assert!(!controller.is_completed());
    assert_eq!(controller.current_step(), OnboardingStep::Complete);

    // The user can still navigate and retry from the same edits.
    controller.previous_step();
    controller.next_step();
    controller.save().await.unwrap();
    assert!(controller.is_completed());

    let stored = store.load_profile().await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Asha");
    assert_eq!(stored.emergency_contact, "9876543210");
}

#[tokio::test]
async fn completed_flow_resets_to_welcome() {
    let (mut controller, _) = wizard();
    for _ in 0..4 {
        controller.next_step();
    }
    controller.save().await.unwrap();

    assert_eq!(controller.current_step(), OnboardingStep::Welcome);
    assert!(controller.is_completed());
    let status = controller.status();
    assert!(status.completed);
    assert!(status.completed_at.is_some());
    assert_eq!(status.step, OnboardingStep::Welcome);
}
