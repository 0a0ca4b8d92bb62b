use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

use crate::persistence::load_json_or_default;

pub const SETTINGS_FILE: &str = "settings.json";
pub const API_URL_ENV: &str = "VERBDECK_API_URL";
pub const DEFAULT_API_URL: &str =
    "https://functions.poehali.dev/60a20dd2-4c23-43be-9fb6-da7acde267cb";

/// When flipping a card to its back counts as a study event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyCountPolicy {
    /// Only the first reveal after the card appears in the grid counts.
    #[default]
    OncePerMount,
    /// Every reveal counts.
    EveryReveal,
}

impl StudyCountPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            StudyCountPolicy::OncePerMount => "First reveal only",
            StudyCountPolicy::EveryReveal => "Every reveal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub study_count_policy: StudyCountPolicy,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: 30,
            study_count_policy: StudyCountPolicy::default(),
            dark_mode: true,
        }
    }
}

impl SettingsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings from disk with the environment override applied.
    pub fn load() -> Self {
        load_json_or_default::<SettingsData>(SETTINGS_FILE)
            .with_api_url_override(std::env::var(API_URL_ENV).ok())
    }

    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.api_url = url;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Whether a change to `other` requires a new HTTP client.
    pub fn endpoint_changed(&self, other: &SettingsData) -> bool {
        self.api_url != other.api_url || self.request_timeout_secs != other.request_timeout_secs
    }
}
