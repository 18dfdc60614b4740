use serde::{Deserialize, Serialize};

/// Configuration from grocer.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub pantry: PantryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Print the contributing recipe titles under each item
    #[serde(default)]
    pub show_sources: bool,
    /// Leave checked items out of text output
    #[serde(default)]
    pub hide_checked: bool,
    /// Width of the item name column in text output
    #[serde(default = "default_width")]
    pub width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_sources: false,
            hide_checked: false,
            width: default_width(),
        }
    }
}

fn default_width() -> usize {
    28
}

/// Items already at home. The CLI host hides these from display without
/// touching the snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PantryConfig {
    #[serde(default)]
    pub items: Vec<String>,
}
