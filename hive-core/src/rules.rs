//! Rules - tunable game rules

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rule variations a game is played under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Round (1-based) by which a player's queen must be on the board.
    /// A player entering this round with the queen in hand may only place it.
    pub queen_deadline_round: u32,
    /// Forbid moving tiles while the mover's queen is still in hand
    pub queen_before_movement: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            queen_deadline_round: 4,
            queen_before_movement: false,
        }
    }
}

impl Rules {
    /// Stricter variant: no movement before the queen is placed
    pub fn strict() -> Self {
        Self {
            queen_before_movement: true,
            ..Self::default()
        }
    }

    /// Load from JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules: {}", path.display()))?;
        let rules = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse rules: {}", path.display()))?;
        Ok(rules)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write rules: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = Rules::default();
        assert_eq!(rules.queen_deadline_round, 4);
        assert!(!rules.queen_before_movement);
        assert!(Rules::strict().queen_before_movement);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let rules: Rules = serde_json::from_str(r#"{"queen_before_movement": true}"#).unwrap();
        assert_eq!(rules.queen_deadline_round, 4);
        assert!(rules.queen_before_movement);
    }

    #[test]
    fn test_load_errors_name_the_file() {
        let err = Rules::load(Path::new("/nonexistent/rules.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read rules: /nonexistent/rules.json"));

        let path = std::env::temp_dir().join(format!("hive-rules-bad-{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();
        let err = Rules::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("Failed to parse rules"));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("hive-rules-{}.json", std::process::id()));
        let rules = Rules {
            queen_deadline_round: 3,
            queen_before_movement: true,
        };
        rules.save(&path).unwrap();
        let loaded = Rules::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, rules);
    }
}
