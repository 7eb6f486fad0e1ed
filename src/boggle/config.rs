use std::path::Path;

use serde::{Deserialize, Serialize};

use super::dictionary::WordPolicy;
use super::error::Result;
use super::scoring::{classic_scorer, unit_scorer, Scorer};
use super::{DEFAULT_BOARD_SIZE, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use crate::utils::serialization;

/// Settings read from a JSON file. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoggleConfig {
    /// Shortest accepted word, counted after the "qu" fold
    pub min_length: usize,
    pub max_length: usize,
    /// Store "qu" as a single "q" cell
    pub fold_qu: bool,
    /// Side of generated boards
    pub board_size: usize,
    /// Roll the classic dice instead of drawing letters uniformly
    pub use_dice: bool,
    pub classic_scoring: bool,
}

impl Default for BoggleConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            fold_qu: true,
            board_size: DEFAULT_BOARD_SIZE,
            use_dice: true,
            classic_scoring: false,
        }
    }
}

impl BoggleConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: Self = serialization::load_from_disk(path.as_ref())?;
        log::debug!("Loaded config from {}: {:?}", path.as_ref().display(), config);
        Ok(config)
    }

    pub fn policy(&self) -> WordPolicy {
        let digraph = if self.fold_qu { Some(("qu", 'q')) } else { None };
        WordPolicy::with_digraph(self.min_length, self.max_length, digraph)
    }

    /// Scorer that sees words with "qu" restored when the fold is on
    pub fn scorer(&self) -> Scorer {
        let scorer = if self.classic_scoring {
            classic_scorer()
        } else {
            unit_scorer()
        };
        self.policy().restoring(scorer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config: BoggleConfig = serde_json::from_str(r#"{"min_length": 2, "use_dice": false}"#).unwrap();
        assert_eq!(config.min_length, 2);
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);
        assert!(!config.use_dice);
        assert!(config.fold_qu);
    }

    #[test]
    fn test_policy_from_config() {
        let config = BoggleConfig {
            min_length: 2,
            fold_qu: false,
            ..Default::default()
        };
        let policy = config.policy();
        assert_eq!(policy.clean_line("at").unwrap(), Some("at".into()));
        assert_eq!(policy.clean_line("quit").unwrap(), Some("quit".into()));
    }

    #[test]
    fn test_scorer_from_config() {
        let config = BoggleConfig {
            classic_scoring: true,
            ..Default::default()
        };
        assert_eq!((config.scorer())("planets"), 5);
        assert_eq!((BoggleConfig::default().scorer())("planets"), 1);
        // Stored as "qeen", scored as the five letters of "queen"
        assert_eq!((config.scorer())("qeen"), 2);
    }

    #[test]
    fn test_bad_config_file() {
        let path = std::env::temp_dir().join(format!("boggle_config_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let result = BoggleConfig::from_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(crate::boggle::BoggleError::Json(_))));
    }
}
