use serde::{Deserialize, Deserializer, Serialize};

use super::category::Category;

/// One recipe's contribution toward a grocery item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitySource {
    /// Amount contributed (None when the recipe lists no amount, e.g. "salt to taste")
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Unit of `quantity`; None and "" are the same unit
    #[serde(default)]
    pub unit: Option<String>,
    /// Recipe that asked for this amount
    #[serde(default)]
    pub recipe_title: String,
}

impl QuantitySource {
    pub fn new(quantity: Option<f64>, unit: Option<&str>, recipe_title: &str) -> Self {
        QuantitySource {
            quantity,
            unit: unit.map(str::to_string),
            recipe_title: recipe_title.to_string(),
        }
    }
}

/// A single line on the grocery list. `name` is the item's identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: Category,
    #[serde(default)]
    pub checked: bool,
    /// Direct quantity, used only when `quantity_sources` yields nothing
    #[serde(
        default,
        deserialize_with = "de_scalar_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default)]
    pub quantity_sources: Vec<QuantitySource>,
    /// Recipe titles, for attribution only
    #[serde(default)]
    pub recipe_sources: Vec<String>,
}

impl GroceryItem {
    /// Create an unchecked item with no quantity information
    pub fn new(name: &str, category: Category) -> Self {
        GroceryItem {
            name: name.to_string(),
            category,
            checked: false,
            quantity: None,
            unit: None,
            quantity_sources: Vec::new(),
            recipe_sources: Vec::new(),
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_source(mut self, quantity: Option<f64>, unit: Option<&str>, recipe: &str) -> Self {
        self.quantity_sources
            .push(QuantitySource::new(quantity, unit, recipe));
        if !recipe.is_empty() && !self.recipe_sources.iter().any(|r| r == recipe) {
            self.recipe_sources.push(recipe.to_string());
        }
        self
    }

    pub fn with_quantity(mut self, quantity: &str, unit: Option<&str>) -> Self {
        self.quantity = Some(quantity.to_string());
        self.unit = unit.map(str::to_string);
        self
    }
}

fn default_category() -> Category {
    Category::Other
}

/// Scalar quantities arrive as either `"3"` or `3` depending on the producer.
fn de_scalar_quantity<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(f64),
    }

    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => None,
        Some(Scalar::Text(s)) => Some(s),
        Some(Scalar::Number(n)) => Some(n.to_string()),
    })
}
