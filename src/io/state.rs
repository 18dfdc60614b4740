use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::category::Category;

/// Per-list view state kept next to the snapshot (`.<file>.state.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Categories collapsed in the sectioned view
    #[serde(default)]
    pub collapsed: BTreeSet<Category>,
}

/// Path of the state file for a given snapshot file
pub fn state_path(list_path: &Path) -> PathBuf {
    let file_name = list_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("list.json");
    list_path.with_file_name(format!(".{}.state.json", file_name))
}

/// Read the state file. Missing or unreadable state reads as empty.
pub fn read_view_state(list_path: &Path) -> ViewState {
    let path = state_path(list_path);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return ViewState::default(),
    };
    match serde_json::from_str(&content) {
        Ok(state) => state,
        Err(e) => {
            warn!(path = %path.display(), "ignoring malformed view state: {}", e);
            ViewState::default()
        }
    }
}

/// Write the state file
pub fn write_view_state(list_path: &Path, state: &ViewState) -> Result<(), std::io::Error> {
    let path = state_path(list_path);
    let content = serde_json::to_string_pretty(state)?;
    super::list_io::atomic_write(&path, content.as_bytes())
}
