use indexmap::IndexMap;

use crate::model::item::GroceryItem;

/// Render an item's total quantity as display text.
///
/// Structured `quantity_sources` are summed per unit (units listed in the
/// order they first appear, `None` and `""` counting as one unit). Sources
/// without an amount are skipped, and a unit whose sources all lack an
/// amount is omitted rather than shown as `0`. When the sources produce
/// nothing, the item's scalar `quantity`/`unit` are used instead.
pub fn aggregate(item: &GroceryItem) -> String {
    let mut groups: IndexMap<&str, Option<f64>> = IndexMap::new();
    for source in &item.quantity_sources {
        let unit = source.unit.as_deref().unwrap_or("");
        let sum = groups.entry(unit).or_insert(None);
        if let Some(q) = source.quantity {
            *sum = Some(sum.unwrap_or(0.0) + q);
        }
    }

    let parts: Vec<String> = groups
        .iter()
        .filter_map(|(unit, sum)| sum.map(|s| render_amount(s, unit)))
        .collect();
    if !parts.is_empty() {
        return parts.join(", ");
    }

    fallback(item)
}

fn fallback(item: &GroceryItem) -> String {
    let quantity = item.quantity.as_deref().filter(|q| !q.is_empty());
    let unit = item.unit.as_deref().filter(|u| !u.is_empty());
    match (quantity, unit) {
        (Some(q), Some(u)) => format!("{} {}", q, u),
        (Some(q), None) => q.to_string(),
        _ => String::new(),
    }
}

fn render_amount(sum: f64, unit: &str) -> String {
    let amount = format_amount(sum);
    if unit.is_empty() {
        amount
    } else {
        format!("{} {}", amount, unit)
    }
}

/// Whole numbers print without a decimal point, anything else with one
/// decimal, rounded half away from zero (0.25 -> 0.3, 0.75 -> 0.8).
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        // `+ 0.0` turns -0.0 into 0.0
        return format!("{}", value + 0.0);
    }
    let rounded = (value * 10.0).round() / 10.0 + 0.0;
    format!("{:.1}", rounded)
}
