//! Shopping list items.

use crate::store::CollectionStore;
use crate::validate::validate_name;
use crate::{CoreError, Schema};

/// Store holding the shopping list.
pub type ShoppingListStore<G> = CollectionStore<ShoppingItem, G>;

/// A single entry on the shopping list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShoppingItem {
    pub name: String,
    pub checked: bool,
}

impl ShoppingItem {
    pub fn new<S: Into<String>>(name: S, checked: bool) -> Result<Self, CoreError> {
        let item = Self {
            name: name.into(),
            checked,
        };
        item.validate()?;
        Ok(item)
    }

    fn seed_item(name: &str, checked: bool) -> Self {
        Self {
            name: name.to_string(),
            checked,
        }
    }
}

impl Schema for ShoppingItem {
    const KIND: &'static str = "shopping_item";

    fn validate(&self) -> Result<(), CoreError> {
        validate_name("name", &self.name)
    }

    fn seed() -> Vec<Self> {
        vec![
            Self::seed_item("milk", false),
            Self::seed_item("eggs", true),
            Self::seed_item("bread", false),
        ]
    }
}
