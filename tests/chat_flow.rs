mod support;

use std::time::Duration;

use emoquote::bootstrap;
use emoquote::chat::{ChatMessage, Sender};
use emoquote::config::AppSettings;
use emoquote::egui_app::controller::{ChatController, SubmitError};
use emoquote::quotes;
use support::dataset::write_emotion_csv;

fn trained_controller() -> ChatController {
    let dir = tempfile::tempdir().unwrap();
    let startup = bootstrap::prepare_with_settings(AppSettings {
        dataset_path: write_emotion_csv(dir.path()),
        test_fraction: 0.0,
        ..AppSettings::default()
    })
    .unwrap();
    ChatController::new(startup.classifier, Duration::ZERO)
}

#[test]
fn conversation_round_trip() {
    let mut controller = trained_controller();

    controller.ui.entry = "I am so happy today".into();
    controller.submit().unwrap();
    controller.ui.entry = "lonely".into();
    assert_eq!(controller.submit(), Err(SubmitError::NotASentence));
    controller.dismiss_warning();
    controller.ui.entry = "scared and afraid of the dark".into();
    controller.submit().unwrap();

    let log = controller.ui.log.messages();
    assert_eq!(log.len(), 6);
    assert_eq!(log[0], ChatMessage::user("I am so happy today"));
    assert_eq!(log[1], ChatMessage::bot("joy"));
    assert!(quotes::quotes_for("joy").unwrap().contains(&log[2].text.as_str()));
    assert_eq!(log[3].sender, Sender::User);
    assert_eq!(log[4].text, "fear");
    assert!(quotes::quotes_for("fear").unwrap().contains(&log[5].text.as_str()));
    assert!(controller.ui.log.transcript().starts_with("You: I am so happy today\n\nBot: joy"));

    controller.clear_chat();
    assert!(controller.ui.log.is_empty());
}
