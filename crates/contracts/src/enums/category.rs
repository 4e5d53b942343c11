use serde::{Deserialize, Serialize};

/// Product categories offered by the shop
///
/// The backend contract is a closed string-tagged set; values this client
/// does not recognize deserialize as `Unknown` instead of failing the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Pesticide,
    Herbicide,
    Insecticide,
    Fungicide,
    PlantGrowthRegulator,
    Seed,
    Machine,
    KitchenGarden,
    #[serde(other)]
    Unknown,
}

impl Category {
    /// Wire code of the category
    pub fn code(&self) -> &'static str {
        match self {
            Category::Pesticide => "pesticide",
            Category::Herbicide => "herbicide",
            Category::Insecticide => "insecticide",
            Category::Fungicide => "fungicide",
            Category::PlantGrowthRegulator => "plantGrowthRegulator",
            Category::Seed => "seed",
            Category::Machine => "machine",
            Category::KitchenGarden => "kitchenGarden",
            Category::Unknown => "unknown",
        }
    }

    /// Human-readable label (English default, used where no translation exists)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pesticide => "Pesticides",
            Category::Herbicide => "Herbicides",
            Category::Insecticide => "Insecticides",
            Category::Fungicide => "Fungicides",
            Category::PlantGrowthRegulator => "Plant Growth Regulators (PGR)",
            Category::Seed => "Seeds",
            Category::Machine => "Agriculture Machines",
            Category::KitchenGarden => "Organic Home Kitchen Garden",
            Category::Unknown => "Unknown",
        }
    }

    /// Key for the UI string table, e.g. "category.seed"
    pub fn translation_key(&self) -> String {
        format!("category.{}", self.code())
    }

    /// All selectable categories (excludes `Unknown`)
    pub fn all() -> Vec<Category> {
        vec![
            Category::Pesticide,
            Category::Herbicide,
            Category::Insecticide,
            Category::Fungicide,
            Category::PlantGrowthRegulator,
            Category::Seed,
            Category::Machine,
            Category::KitchenGarden,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Category::all().into_iter().find(|c| c.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_camel_case() {
        assert_eq!(
            serde_json::to_string(&Category::PlantGrowthRegulator).unwrap(),
            "\"plantGrowthRegulator\""
        );
        let parsed: Category = serde_json::from_str("\"kitchenGarden\"").unwrap();
        assert_eq!(parsed, Category::KitchenGarden);
    }

    #[test]
    fn unknown_tag_does_not_error() {
        let parsed: Category = serde_json::from_str("\"biostimulant\"").unwrap();
        assert_eq!(parsed, Category::Unknown);
    }

    #[test]
    fn code_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        assert_eq!(Category::from_code("nope"), None);
    }
}
