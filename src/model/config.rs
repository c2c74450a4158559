use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from lectio/config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub planner: PlannerSection,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Plan shown on startup: "calendar", "chronological", or "nt90"
    #[serde(default = "default_plan")]
    pub default_plan: String,
    /// Open the calendar on today's Ethiopian month instead of Meskerem
    #[serde(default = "default_true")]
    pub follow_today: bool,
}

impl Default for PlannerSection {
    fn default() -> Self {
        PlannerSection {
            default_plan: default_plan(),
            follow_today: true,
        }
    }
}

fn default_plan() -> String {
    "calendar".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_on_empty_config() {
        let config: PlannerConfig = toml::from_str("").unwrap();
        assert_eq!(config.planner.default_plan, "calendar");
        assert!(config.planner.follow_today);
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn parses_overrides() {
        let config: PlannerConfig = toml::from_str(
            r##"
[planner]
default_plan = "nt90"
follow_today = false

[ui]
show_key_hints = true

[ui.colors]
highlight = "#FB4196"
"##,
        )
        .unwrap();
        assert_eq!(config.planner.default_plan, "nt90");
        assert!(!config.planner.follow_today);
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FB4196");
    }
}
