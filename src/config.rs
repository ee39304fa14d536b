//! Frame configuration and the preferences file that carries it between runs.
//!
//! The engine only reads [`FrameConfig`]; loading and saving it is left to the
//! host application.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Who receives the penalty points when a foul is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum FoulAwardPolicy {
    /// Only the player seated after the offender.
    #[default]
    NextPlayer,
    /// Every player at the table, the offender included.
    AllPlayers,
}

impl FoulAwardPolicy {
    pub const ALL: [FoulAwardPolicy; 2] =
        [FoulAwardPolicy::NextPlayer, FoulAwardPolicy::AllPlayers];

    pub fn title(self) -> &'static str {
        match self {
            FoulAwardPolicy::NextPlayer => "Next Player",
            FoulAwardPolicy::AllPlayers => "All Players",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            FoulAwardPolicy::NextPlayer => FoulAwardPolicy::AllPlayers,
            FoulAwardPolicy::AllPlayers => FoulAwardPolicy::NextPlayer,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum PrefsError {
    #[error("preferences I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("preferences file {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("preferences could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Settings the frame consults while scoring. Callers should only change them
/// between frames; the frame itself does not check.
///
/// This is also the on-disk preferences record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub foul_award_policy: FoulAwardPolicy,
    pub enforce_rules: bool,
}

impl FrameConfig {
    pub const ENV_PATH: &'static str = "SNOOKER_PREFS";
    const FILE_NAME: &'static str = ".snooker-scoreboard.json";

    /// Preferences location: `$SNOOKER_PREFS`, else a dotfile in `$HOME`.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(p) = std::env::var_os(Self::ENV_PATH) {
            return Some(PathBuf::from(p));
        }
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(Self::FILE_NAME))
    }

    /// Reads preferences from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, PrefsError> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(PrefsError::Io { path: path.to_path_buf(), source }),
        };
        serde_json::from_str(&text)
            .map_err(|source| PrefsError::Parse { path: path.to_path_buf(), source })
    }

    pub fn save(&self, path: &Path) -> Result<(), PrefsError> {
        let text = serde_json::to_string_pretty(self).map_err(PrefsError::Encode)?;
        fs::write(path, text).map_err(|source| PrefsError::Io { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_serializes_snake_case() {
        let json = serde_json::to_string(&FoulAwardPolicy::AllPlayers).unwrap();
        assert_eq!(json, "\"all_players\"");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let prefs: FrameConfig = serde_json::from_str("{\"enforce_rules\":true}").unwrap();
        assert_eq!(prefs.foul_award_policy, FoulAwardPolicy::NextPlayer);
        assert!(prefs.enforce_rules);
    }

    #[test]
    fn toggled_flips_policy() {
        assert_eq!(FoulAwardPolicy::NextPlayer.toggled(), FoulAwardPolicy::AllPlayers);
        assert_eq!(FoulAwardPolicy::AllPlayers.toggled(), FoulAwardPolicy::NextPlayer);
    }
}
