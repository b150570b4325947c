use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use jeevan_profile::config::{AppConfig, StoreBackend};
use jeevan_profile::onboarding::{OnboardingController, OnboardingStep};
use jeevan_profile::profile::{BloodGroup, Gender, ProfileUpdate};
use jeevan_profile::store::{
    HttpProfileStore, LibSqlProfileStore, MemoryProfileStore, ProfileStore,
};

/// What the user typed at a prompt.
enum Input {
    Value(String),
    Back,
    Eof,
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> std::io::Result<Input> {
    eprint!("{label}: ");
    match lines.next_line().await? {
        Some(line) => {
            let line = line.trim().to_string();
            if line.eq_ignore_ascii_case("back") {
                Ok(Input::Back)
            } else {
                Ok(Input::Value(line))
            }
        }
        None => Ok(Input::Eof),
    }
}

/// Prompt for one field; empty input keeps the current value.
/// Returns `None` when the user wants to leave the step (back/EOF).
async fn field(
    lines: &mut Lines<BufReader<Stdin>>,
    label: &str,
    current: &str,
) -> std::io::Result<Option<Option<String>>> {
    let label = if current.is_empty() {
        label.to_string()
    } else {
        format!("{label} [{current}]")
    };
    match prompt(lines, &label).await? {
        Input::Value(v) if v.is_empty() => Ok(Some(None)),
        Input::Value(v) => Ok(Some(Some(v))),
        Input::Back | Input::Eof => Ok(None),
    }
}

fn parse_gender(v: &str) -> Gender {
    match v.to_ascii_lowercase().as_str() {
        "male" | "m" => Gender::Male,
        "female" | "f" => Gender::Female,
        "other" | "o" => Gender::Other,
        _ => Gender::Unspecified,
    }
}

fn split_entries(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn ProfileStore> = match config.backend {
        StoreBackend::Memory => Arc::new(MemoryProfileStore::new()),
        StoreBackend::Local => Arc::new(
            LibSqlProfileStore::new_local(&config.db_path, &config.user_id).await?,
        ),
        StoreBackend::Remote => {
            let url = config.api_url.clone().expect("checked by AppConfig::from_env");
            Arc::new(HttpProfileStore::new(url, config.api_token.clone())?)
        }
    };

    eprintln!("Jeevan profile wizard v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("  Store: {:?}", config.backend);
    eprintln!("  Empty input keeps the shown value, 'back' returns to the previous step.\n");

    let mut controller = OnboardingController::new(store);
    if let Err(e) = controller.load().await {
        eprintln!("Could not load an existing profile ({e}); starting blank.");
    }

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        let (index, total) = controller.progress();
        eprintln!("\n── Step {}/{}: {}", index + 1, total, controller.current_step());

        match controller.current_step() {
            OnboardingStep::Welcome => {
                eprintln!("Welcome to Jeevan. Let's set up your health profile.");
                match prompt(&mut lines, "Press Enter to begin").await? {
                    Input::Eof => break,
                    Input::Back => {
                        controller.previous_step();
                    }
                    Input::Value(_) => {
                        controller.next_step();
                    }
                }
            }

            OnboardingStep::PersonalInfo => {
                let p = controller.profile().clone();
                let prompts: [(&str, String, fn(String) -> ProfileUpdate); 6] = [
                    ("First name", p.first_name, ProfileUpdate::FirstName),
                    ("Last name", p.last_name, ProfileUpdate::LastName),
                    ("Date of birth", p.date_of_birth, ProfileUpdate::DateOfBirth),
                    ("Gender (Male/Female/Other)", p.gender.to_string(), |v| {
                        ProfileUpdate::Gender(parse_gender(&v))
                    }),
                    ("Phone", p.phone, ProfileUpdate::Phone),
                    ("Address", p.address, ProfileUpdate::Address),
                ];

                let mut went_back = false;
                for (label, current, make_update) in prompts {
                    match field(&mut lines, label, &current).await? {
                        Some(Some(value)) => {
                            controller.apply(make_update(value));
                        }
                        Some(None) => {}
                        None => {
                            went_back = true;
                            break;
                        }
                    }
                }
                if went_back {
                    controller.previous_step();
                } else {
                    controller.next_step();
                }
            }

            OnboardingStep::MedicalDetails => {
                let p = controller.profile().clone();
                let mut went_back = false;

                'step: {
                    match field(&mut lines, "Blood group (A+/A-/B+/B-/AB+/AB-/O+/O-)", p.blood_group.as_str()).await? {
                        Some(Some(v)) => {
                            controller.apply(ProfileUpdate::BloodGroup(BloodGroup::parse(
                                &v.to_uppercase(),
                            )));
                        }
                        Some(None) => {}
                        None => {
                            went_back = true;
                            break 'step;
                        }
                    }

                    let numeric: [(&str, f32, fn(f32) -> ProfileUpdate); 2] = [
                        ("Height in cm", p.height_cm, ProfileUpdate::HeightCm),
                        ("Weight in kg", p.weight_kg, ProfileUpdate::WeightKg),
                    ];
                    for (label, current, make_update) in numeric {
                        let shown = if current > 0.0 {
                            current.to_string()
                        } else {
                            String::new()
                        };
                        match field(&mut lines, label, &shown).await? {
                            Some(Some(v)) => match v.parse::<f32>() {
                                Ok(n) => {
                                    controller.apply(make_update(n));
                                }
                                Err(_) => eprintln!("Not a number, keeping the current value."),
                            },
                            Some(None) => {}
                            None => {
                                went_back = true;
                                break 'step;
                            }
                        }
                    }

                    let listed: [(&str, Vec<String>, fn(Vec<String>) -> ProfileUpdate); 3] = [
                        ("Allergies (comma-separated)", p.allergies, ProfileUpdate::Allergies),
                        (
                            "Medical conditions (comma-separated)",
                            p.medical_conditions,
                            ProfileUpdate::MedicalConditions,
                        ),
                        (
                            "Medications (comma-separated)",
                            p.medications,
                            ProfileUpdate::Medications,
                        ),
                    ];
                    for (label, current, make_update) in listed {
                        match field(&mut lines, label, &current.join(", ")).await? {
                            Some(Some(v)) => {
                                controller.apply(make_update(split_entries(&v)));
                            }
                            Some(None) => {}
                            None => {
                                went_back = true;
                                break 'step;
                            }
                        }
                    }
                }

                if went_back {
                    controller.previous_step();
                } else {
                    controller.next_step();
                }
            }

            OnboardingStep::EmergencyContacts => {
                let current = controller.profile().emergency_contact.clone();
                match field(&mut lines, "Emergency contact number", &current).await? {
                    Some(Some(value)) => {
                        controller.apply(ProfileUpdate::EmergencyContact(value));
                        controller.next_step();
                    }
                    Some(None) => {
                        controller.next_step();
                    }
                    None => {
                        controller.previous_step();
                    }
                }
            }

            OnboardingStep::Complete => {
                eprintln!("\n{}\n", controller.profile().summary());
                match prompt(&mut lines, "Save profile? [y/n/back]").await? {
                    Input::Value(v) if v.eq_ignore_ascii_case("y") => {
                        match controller.save().await {
                            Ok(()) => {
                                eprintln!("Profile saved. You're all set.");
                                break;
                            }
                            Err(e) => {
                                // State is untouched; the next loop pass re-offers the save.
                                eprintln!("{e}. You can try again.");
                            }
                        }
                    }
                    Input::Value(v) if v.eq_ignore_ascii_case("n") => {
                        eprintln!("Not saved.");
                        break;
                    }
                    Input::Back | Input::Value(_) => {
                        controller.previous_step();
                    }
                    Input::Eof => break,
                }
            }
        }
    }

    Ok(())
}
