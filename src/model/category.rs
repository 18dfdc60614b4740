use serde::{Deserialize, Serialize};

/// Grocery aisle category. `ALL` is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "RawCategory")]
pub enum Category {
    Produce,
    Dairy,
    Bakery,
    Pantry,
    Frozen,
    Beverages,
    Meat,
    Other,
}

impl Category {
    /// Every category, in the order sections are displayed
    pub const ALL: [Category; 8] = [
        Category::Produce,
        Category::Dairy,
        Category::Bakery,
        Category::Pantry,
        Category::Frozen,
        Category::Beverages,
        Category::Meat,
        Category::Other,
    ];

    /// The tag used in snapshot files and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Dairy => "dairy",
            Category::Bakery => "bakery",
            Category::Pantry => "pantry",
            Category::Frozen => "frozen",
            Category::Beverages => "beverages",
            Category::Meat => "meat",
            Category::Other => "other",
        }
    }

    /// Human-readable section heading
    pub fn label(self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Bakery => "Bakery",
            Category::Pantry => "Pantry",
            Category::Frozen => "Frozen",
            Category::Beverages => "Beverages",
            Category::Meat => "Meat & Seafood",
            Category::Other => "Other",
        }
    }

    /// Parse a category tag. Case-insensitive; accepts a few spellings of
    /// meat/seafood. Returns None for anything unrecognized.
    pub fn parse(s: &str) -> Option<Category> {
        let tag = s.trim().to_ascii_lowercase();
        let category = match tag.as_str() {
            "produce" => Category::Produce,
            "dairy" => Category::Dairy,
            "bakery" => Category::Bakery,
            "pantry" => Category::Pantry,
            "frozen" => Category::Frozen,
            "beverages" | "beverage" | "drinks" => Category::Beverages,
            "meat" | "seafood" | "meat/seafood" | "meat_seafood" | "meatseafood"
            | "meat & seafood" => Category::Meat,
            "other" => Category::Other,
            _ => return None,
        };
        Some(category)
    }

    /// Position of this category in `ALL`
    pub fn rank(self) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or(Category::ALL.len())
    }
}

/// What a snapshot may carry in the `category` field: usually a tag, but
/// anything else (`null`, a number) is accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategory {
    Tag(String),
    Unrecognized(serde::de::IgnoredAny),
}

/// Unknown tags and non-string values land in `Other` rather than failing
/// the whole snapshot.
impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        match raw {
            RawCategory::Tag(s) => Category::parse(&s).unwrap_or(Category::Other),
            RawCategory::Unrecognized(_) => Category::Other,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
