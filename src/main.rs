#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the emotion chat window.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use emoquote::bootstrap::{self, StartupError};
use emoquote::egui_app::controller::ChatController;
use emoquote::egui_app::ui::{DEFAULT_VIEWPORT_SIZE, EguiApp, MIN_VIEWPORT_SIZE};
use emoquote::logging;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let startup = match bootstrap::prepare() {
        Ok(startup) => startup,
        Err(err) => exit_with_startup_error(&err),
    };

    let mut controller =
        ChatController::new(startup.classifier, startup.settings.typing_delay());
    controller.announce_model(startup.train_rows);
    if let Some(reason) = &startup.settings_warning {
        controller.report_settings_fallback(reason);
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Emotion Classifier")
        .with_inner_size(DEFAULT_VIEWPORT_SIZE)
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Emotion Classifier",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(controller)))),
    )?;
    Ok(())
}

/// Show a blocking error dialog and terminate before any window opens.
fn exit_with_startup_error(err: &StartupError) -> ! {
    tracing::error!("Startup failed: {err}");
    eprintln!("Error: {err}");
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_description(err.to_string())
        .set_buttons(MessageButtons::Ok)
        .show();
    std::process::exit(1);
}
