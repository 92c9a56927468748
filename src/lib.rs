//! Library exports for the emotion chat application, its tests and benchmarks.
/// Application directory resolution.
pub mod app_dirs;
/// Startup sequence from settings to fitted classifier.
pub mod bootstrap;
/// Conversation log model.
pub mod chat;
/// Persisted settings.
pub mod config;
/// Labeled corpus loading and splitting.
pub mod dataset;
/// egui chat window.
pub mod egui_app;
/// Tracing setup.
pub mod logging;
/// TF-IDF + Naive Bayes classifier.
pub mod ml;
/// Quote lookup by emotion.
pub mod quotes;
