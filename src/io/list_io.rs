use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::item::GroceryItem;
use crate::model::list::GroceryList;

/// Error type for snapshot file I/O
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not serialize grocery list: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Load a grocery list snapshot from a JSON file
pub fn read_list(path: &Path) -> Result<GroceryList, ListError> {
    let text = fs::read_to_string(path).map_err(|e| ListError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| ListError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write a grocery list snapshot back to disk atomically
pub fn write_list(path: &Path, list: &GroceryList) -> Result<(), ListError> {
    let mut content = serde_json::to_string_pretty(list)?;
    content.push('\n');
    atomic_write(path, content.as_bytes()).map_err(|e| ListError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write to a temp file in the same directory, then rename over the target.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Apply queued checked-state changes. Returns how many items changed;
/// names not in the list are skipped.
pub fn apply_toggles(list: &mut GroceryList, toggles: &[(String, bool)]) -> usize {
    let mut changed = 0;
    for (name, checked) in toggles {
        if let Some(item) = list.find_mut(name)
            && item.checked != *checked
        {
            item.checked = *checked;
            changed += 1;
        }
    }
    changed
}

/// Put items in the given order. Items not named in `ordered` (hidden or added
/// since) keep their relative order after the ordered ones.
pub fn apply_order(list: &mut GroceryList, ordered: &[GroceryItem]) {
    let mut rest = std::mem::take(&mut list.items);
    let mut items = Vec::with_capacity(rest.len());
    for wanted in ordered {
        if let Some(pos) = rest.iter().position(|i| i.name == wanted.name) {
            items.push(rest.remove(pos));
        }
    }
    items.extend(rest);
    list.items = items;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use tempfile::TempDir;

    fn sample() -> GroceryList {
        GroceryList::new(
            Some("2026-W42"),
            vec![
                GroceryItem::new("Apple", Category::Produce),
                GroceryItem::new("Milk", Category::Dairy).checked(true),
                GroceryItem::new("Salt", Category::Pantry),
            ],
        )
    }

    fn names(list: &GroceryList) -> Vec<&str> {
        list.items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn write_and_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.json");
        let list = sample();
        write_list(&path, &list).unwrap();
        assert_eq!(read_list(&path).unwrap(), list);
    }

    #[test]
    fn read_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = read_list(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ListError::ReadError { .. }));
    }

    #[test]
    fn read_malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.json");
        fs::write(&path, "{ not json").unwrap();
        let err = read_list(&path).unwrap_err();
        assert!(matches!(err, ListError::ParseError { .. }));
        assert!(err.to_string().contains("list.json"));
    }

    #[test]
    fn apply_toggles_counts_real_changes() {
        let mut list = sample();
        let changed = apply_toggles(
            &mut list,
            &[
                ("Apple".into(), true),
                ("Milk".into(), true),
                ("Ghost".into(), true),
            ],
        );
        assert_eq!(changed, 1);
        assert!(list.find("Apple").unwrap().checked);
    }

    #[test]
    fn apply_order_keeps_unlisted_items_after() {
        let mut list = sample();
        let ordered = vec![
            GroceryItem::new("Salt", Category::Pantry),
            GroceryItem::new("Apple", Category::Produce),
        ];
        apply_order(&mut list, &ordered);
        assert_eq!(names(&list), vec!["Salt", "Apple", "Milk"]);
    }
}
