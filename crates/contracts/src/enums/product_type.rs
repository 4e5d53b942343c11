use serde::{Deserialize, Serialize};

use super::Category;

/// Coarse product grouping derived from the category
///
/// Never stored or sent on the wire as its own field; the canonical contract
/// derives it from `Category` on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductType {
    AgriProduct,
    Machine,
    KitchenGarden,
}

impl ProductType {
    pub fn from_category(category: Category) -> Self {
        match category {
            Category::Machine => ProductType::Machine,
            Category::KitchenGarden => ProductType::KitchenGarden,
            _ => ProductType::AgriProduct,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductType::AgriProduct => "Agri product",
            ProductType::Machine => "Machine",
            ProductType::KitchenGarden => "Kitchen Garden",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_from_category() {
        assert_eq!(
            ProductType::from_category(Category::Machine),
            ProductType::Machine
        );
        assert_eq!(
            ProductType::from_category(Category::KitchenGarden),
            ProductType::KitchenGarden
        );
        assert_eq!(
            ProductType::from_category(Category::Seed),
            ProductType::AgriProduct
        );
        assert_eq!(
            ProductType::from_category(Category::Unknown),
            ProductType::AgriProduct
        );
    }
}
