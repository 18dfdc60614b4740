use serde::Serialize;

use crate::model::category::Category;
use crate::model::config::DisplayConfig;
use crate::model::item::GroceryItem;
use crate::ops::quantity::aggregate;
use crate::util::unicode::pad_to_width;
use crate::view::{DisplayView, SectionView};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson {
    pub name: String,
    pub category: Category,
    pub checked: bool,
    pub quantity: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipes: Vec<String>,
}

#[derive(Serialize)]
pub struct SectionJson {
    pub category: Category,
    pub label: &'static str,
    pub checked: usize,
    pub total: usize,
    pub collapsed: bool,
    pub items: Vec<ItemJson>,
}

#[derive(Serialize)]
pub struct ListJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<SectionJson>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemJson>>,
}

#[derive(Serialize)]
pub struct ToggleJson {
    pub name: String,
    /// None when the item was not on the list
    pub checked: Option<bool>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn item_to_json(item: &GroceryItem) -> ItemJson {
    ItemJson {
        name: item.name.clone(),
        category: item.category,
        checked: item.checked,
        quantity: aggregate(item),
        recipes: item.recipe_sources.clone(),
    }
}

pub fn section_to_json(section: &SectionView) -> SectionJson {
    SectionJson {
        category: section.category,
        label: section.category.label(),
        checked: section.checked,
        total: section.total,
        collapsed: section.collapsed,
        items: section.items.iter().map(item_to_json).collect(),
    }
}

pub fn view_to_json(week: Option<&str>, view: &DisplayView) -> ListJson {
    let (sections, items) = match view {
        DisplayView::Sections(sections) => {
            (Some(sections.iter().map(section_to_json).collect()), None)
        }
        DisplayView::Reordering(items) => (None, Some(items.iter().map(item_to_json).collect())),
    };
    ListJson {
        week: week.map(str::to_string),
        sections,
        items,
    }
}

pub fn items_to_json(week: Option<&str>, items: &[GroceryItem]) -> ListJson {
    ListJson {
        week: week.map(str::to_string),
        sections: None,
        items: Some(items.iter().map(item_to_json).collect()),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `[x] Name          350 g`, with the name column padded to the configured width
pub fn format_item_line(item: &GroceryItem, config: &DisplayConfig) -> String {
    let mark = if item.checked { "[x]" } else { "[ ]" };
    let line = format!(
        "{} {} {}",
        mark,
        pad_to_width(&item.name, config.width),
        aggregate(item)
    );
    line.trim_end().to_string()
}

fn push_item(out: &mut Vec<String>, prefix: &str, item: &GroceryItem, config: &DisplayConfig) {
    out.push(format!("{}{}", prefix, format_item_line(item, config)));
    if config.show_sources && !item.recipe_sources.is_empty() {
        out.push(format!(
            "{}    from: {}",
            " ".repeat(prefix.len()),
            item.recipe_sources.join(", ")
        ));
    }
}

/// Sectioned text view. Collapsed sections show only their header.
pub fn format_sections(sections: &[SectionView], config: &DisplayConfig) -> String {
    let mut out = Vec::new();
    for section in sections {
        let mut header = format!(
            "{} {}/{}",
            section.category.label(),
            section.checked,
            section.total
        );
        if section.collapsed {
            header.push_str(" (collapsed)");
            out.push(header);
            continue;
        }
        out.push(header);
        for item in &section.items {
            if config.hide_checked && item.checked {
                continue;
            }
            push_item(&mut out, "  ", item, config);
        }
    }
    out.join("\n")
}

/// Flat text view. With `numbered`, each line carries its index for `--move`.
pub fn format_flat(items: &[GroceryItem], config: &DisplayConfig, numbered: bool) -> String {
    let index_width = items.len().saturating_sub(1).to_string().len();
    let mut out = Vec::new();
    for (i, item) in items.iter().enumerate() {
        if !numbered && config.hide_checked && item.checked {
            continue;
        }
        let prefix = if numbered {
            format!("{:>w$}  ", i, w = index_width)
        } else {
            String::new()
        };
        push_item(&mut out, &prefix, item, config);
    }
    out.join("\n")
}

pub fn format_view(view: &DisplayView, config: &DisplayConfig) -> String {
    match view {
        DisplayView::Sections(sections) => format_sections(sections, config),
        DisplayView::Reordering(items) => format_flat(items, config, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn narrow() -> DisplayConfig {
        DisplayConfig {
            width: 10,
            ..Default::default()
        }
    }

    fn sections() -> Vec<SectionView> {
        vec![
            SectionView {
                category: Category::Produce,
                items: vec![
                    GroceryItem::new("Apple", Category::Produce)
                        .with_quantity("3", None)
                        .with_source(None, None, "Crumble"),
                    GroceryItem::new("Lemon", Category::Produce).checked(true),
                ],
                checked: 1,
                total: 2,
                collapsed: false,
            },
            SectionView {
                category: Category::Meat,
                items: vec![
                    GroceryItem::new("Salmon", Category::Meat)
                        .with_source(Some(200.0), Some("g"), "Poke")
                        .with_source(Some(150.0), Some("g"), "Salad"),
                ],
                checked: 0,
                total: 1,
                collapsed: false,
            },
            SectionView {
                category: Category::Dairy,
                items: vec![GroceryItem::new("Milk", Category::Dairy)],
                checked: 0,
                total: 1,
                collapsed: true,
            },
        ]
    }

    #[test]
    fn item_line_pads_name_and_trims() {
        let item = GroceryItem::new("Flour", Category::Pantry)
            .with_source(Some(0.5), Some("kg"), "Bread")
            .with_source(Some(0.3), Some("kg"), "Cake");
        assert_eq!(format_item_line(&item, &narrow()), "[ ] Flour      0.8 kg");
        let bare = GroceryItem::new("Salt", Category::Pantry).checked(true);
        assert_eq!(format_item_line(&bare, &narrow()), "[x] Salt");
    }

    #[test]
    fn sections_text() {
        assert_snapshot!(format_sections(&sections(), &narrow()), @r"
        Produce 1/2
          [ ] Apple      3
          [x] Lemon
        Meat & Seafood 0/1
          [ ] Salmon     350 g
        Dairy 0/1 (collapsed)
        ");
    }

    #[test]
    fn sections_with_sources_and_hidden_checked() {
        let config = DisplayConfig {
            show_sources: true,
            hide_checked: true,
            width: 10,
        };
        let out = format_sections(&sections()[..1], &config);
        assert_eq!(out, "Produce 1/2\n  [ ] Apple      3\n      from: Crumble");
    }

    #[test]
    fn numbered_flat_view() {
        let items: Vec<GroceryItem> = (0..11)
            .map(|i| GroceryItem::new(&format!("Item{}", i), Category::Other))
            .collect();
        let out = format_flat(&items, &narrow(), true);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " 0  [ ] Item0");
        assert_eq!(lines[10], "10  [ ] Item10");
    }

    #[test]
    fn empty_views_render_empty() {
        assert_eq!(format_sections(&[], &narrow()), "");
        assert_eq!(format_flat(&[], &narrow(), true), "");
    }

    #[test]
    fn json_view_has_aggregated_quantity() {
        let view = DisplayView::Sections(sections());
        let json = serde_json::to_value(view_to_json(Some("2026-W42"), &view)).unwrap();
        assert_eq!(json["week"], "2026-W42");
        assert_eq!(json["sections"][1]["category"], "meat");
        assert_eq!(json["sections"][1]["items"][0]["quantity"], "350 g");
        assert!(json.get("items").is_none());
    }
}
