//! Player configuration and where it is stored

use crate::core::Language;
use crate::game::WordVerdict;
use crate::services::ServiceError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "https://api.wordle.click/api/v1";

/// What to do with a submission when the word validator fails
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "camelCase")]
pub enum ValidationPolicy {
    /// Treat any five-letter word of the alphabet as valid
    #[default]
    AcceptAnyFiveLetterWord,
    /// Refuse the submission; the row stays editable
    RejectSubmission,
}

impl ValidationPolicy {
    /// Turn a validator answer into a verdict for the session
    #[must_use]
    pub fn resolve(self, answer: Result<bool, ServiceError>) -> WordVerdict {
        match answer {
            Ok(true) => WordVerdict::Accepted,
            Ok(false) => WordVerdict::Rejected,
            Err(err) => {
                warn!(error = %err, policy = ?self, "word validation unavailable");
                match self {
                    Self::AcceptAnyFiveLetterWord => WordVerdict::Accepted,
                    Self::RejectSubmission => WordVerdict::Unavailable,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub language: Language,
    pub api_base_url: String,
    pub offline: bool,
    pub on_validation_error: ValidationPolicy,
    pub request_timeout_secs: u64,
    /// Replaces the embedded dictionary of the configured language in offline mode
    pub word_list: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            api_base_url: DEFAULT_API_URL.to_string(),
            offline: false,
            on_validation_error: ValidationPolicy::default(),
            request_timeout_secs: 5,
            word_list: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub trait ConfigStore {
    fn load(&self) -> GameConfig;
    fn save(&self, cfg: &GameConfig) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("click", "wordle", "wordle_click") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("wordle_click_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> GameConfig {
        let Ok(bytes) = fs::read(&self.path) else {
            return GameConfig::default();
        };
        match serde_json::from_slice::<GameConfig>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring malformed config");
                GameConfig::default()
            }
        }
    }

    fn save(&self, cfg: &GameConfig) -> std::io::Result<()> {
        let data = serde_json::to_vec_pretty(cfg).map_err(std::io::Error::from)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, data)
    }
}
