use std::path::PathBuf;

pub(super) const DEFAULT_DATASET_FILE: &str = "emotion_sentimen_dataset.csv";
pub(super) const MAX_TEST_FRACTION: f64 = 0.9;
pub(super) const MAX_TYPING_DELAY_MS: u64 = 5_000;

pub(super) fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_FILE)
}

pub(super) fn default_test_fraction() -> f64 {
    0.2
}

pub(super) fn default_split_seed() -> u64 {
    42
}

pub(super) fn default_smoothing_alpha() -> f64 {
    1.0
}

pub(super) fn default_typing_delay_ms() -> u64 {
    0
}

pub(super) fn clamp_test_fraction(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, MAX_TEST_FRACTION)
    } else {
        default_test_fraction()
    }
}

pub(super) fn sanitize_alpha(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        default_smoothing_alpha()
    }
}

pub(super) fn clamp_typing_delay(value: u64) -> u64 {
    value.min(MAX_TYPING_DELAY_MS)
}
