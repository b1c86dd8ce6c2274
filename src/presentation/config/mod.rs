mod settings;

pub use settings::{DatabaseSettings, InferenceSettings, MediaSettings, ServerSettings, Settings};
