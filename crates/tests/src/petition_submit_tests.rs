use nyaya_types::{
    submit_petition, InstantDelay, PartyDraft, PetitionDraft, PetitionStep, PetitionWizard,
    StepMarker,
};
use pretty_assertions::assert_eq;

use crate::common::test_config;

fn draft() -> PetitionDraft {
    PetitionDraft {
        complainant: PartyDraft {
            name_en: "  Sita Tamang ".into(),
            name_np: "सीता तामाङ".into(),
            age: "35".into(),
            gender: "female".into(),
            address: "Baneshwor, Kathmandu".into(),
            contact: "+977 9854321098".into(),
        },
        case_type: "theft".into(),
        police_station: "central".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_walk_through_all_steps() {
    let mut wizard = PetitionWizard::default();
    assert!(wizard.is_first());
    assert_eq!(wizard.progress_percent(), 0.0);

    wizard.next();
    wizard.next();
    assert_eq!(wizard.step, PetitionStep::Case);
    assert_eq!(wizard.marker(PetitionStep::Complainant), StepMarker::Done);
    assert_eq!(wizard.marker(PetitionStep::Case), StepMarker::Current);
    assert_eq!(wizard.marker(PetitionStep::Evidence), StepMarker::Upcoming);

    wizard.next();
    assert!(wizard.is_last());
    assert_eq!(wizard.progress_percent(), 100.0);

    wizard.back();
    assert_eq!(wizard.step, PetitionStep::Case);
}

#[tokio::test]
async fn test_submission_returns_receipt_for_complainant() {
    let receipt = submit_petition(&InstantDelay, &test_config(), draft())
        .await
        .unwrap();

    assert_eq!(receipt.complainant, "Sita Tamang");
    let short = receipt.short_reference();
    assert!(short.starts_with("PET-"));
    assert_eq!(short.len(), 12);
}

#[tokio::test]
async fn test_each_submission_gets_fresh_reference() {
    let config = test_config();
    let first = submit_petition(&InstantDelay, &config, draft()).await.unwrap();
    let second = submit_petition(&InstantDelay, &config, draft()).await.unwrap();
    assert_ne!(first.reference, second.reference);
}
