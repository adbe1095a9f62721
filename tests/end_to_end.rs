mod common;

use common::FakeProvider;
use std::sync::Arc;
use veridoc::controller::{AnalysisOutcome, VerificationController};
use veridoc::types::{status_badge, StatusTone, VerificationStatus};
use veridoc::upload::{DocumentFile, UploadPhase};

fn jpeg() -> DocumentFile {
    DocumentFile {
        name: "passport.jpg".into(),
        mime_type: "image/jpeg".into(),
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
    }
}

#[tokio::test]
async fn upload_analyze_render_happy_path() {
    let provider = Arc::new(FakeProvider::replying(common::VERIFIED_JSON));
    let ctl = VerificationController::new(provider);

    ctl.select_file(jpeg());
    let mut rx = ctl.subscribe();
    while ctl.current_upload().phase() != UploadPhase::Ready {
        rx.changed().await.unwrap();
    }
    let preview = ctl.current_upload().preview().unwrap().to_string();
    assert!(preview.starts_with("data:image/jpeg;base64,"));

    assert!(ctl.trigger_analysis());
    assert_eq!(ctl.current_outcome(), AnalysisOutcome::InFlight);
    while ctl.current_outcome() == AnalysisOutcome::InFlight {
        rx.changed().await.unwrap();
    }

    let AnalysisOutcome::Succeeded(result) = ctl.current_outcome() else {
        panic!("expected a verdict");
    };
    assert_eq!(result.status, VerificationStatus::Verified);
    assert_eq!(result.confidence_score, 97.0);
    assert_eq!(result.extracted_data.document_number.as_deref(), Some("X1234567"));

    let badge = status_badge(result.status);
    assert_eq!(badge.tone, StatusTone::Affirmative);
    assert_eq!(badge.icon, "check-circle");

    // a fresh selection discards the verdict
    ctl.select_file(jpeg());
    assert_eq!(ctl.current_outcome(), AnalysisOutcome::Idle);
}

#[tokio::test]
async fn slow_analysis_never_resurrects_after_clear() {
    let provider = Arc::new(FakeProvider {
        handler: Box::new(|_| Ok(Some(common::VERIFIED_JSON.to_string()))),
        delay_ms: 10,
    });
    let ctl = VerificationController::new(provider);

    ctl.select_file(jpeg());
    let mut rx = ctl.subscribe();
    while ctl.current_upload().phase() != UploadPhase::Ready {
        rx.changed().await.unwrap();
    }
    assert!(ctl.trigger_analysis());
    ctl.clear();

    tokio::time::sleep(tokio::time::Duration::from_millis(30)).await;
    assert_eq!(ctl.current_upload().phase(), UploadPhase::Empty);
    assert_eq!(ctl.current_outcome(), AnalysisOutcome::Idle);
}
