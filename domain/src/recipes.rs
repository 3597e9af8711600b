//! Recipes and their ordered ingredient lists.

use crate::store::CollectionStore;
use crate::validate::{validate_ingredients, validate_name};
use crate::{CoreError, Schema};

/// Store holding the recipe collection.
pub type RecipeStore<G> = CollectionStore<Recipe, G>;

/// A named recipe. Ingredient order is meaningful and preserved as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new<S: Into<String>>(name: S, ingredients: Vec<String>) -> Result<Self, CoreError> {
        let recipe = Self {
            name: name.into(),
            ingredients,
        };
        recipe.validate()?;
        Ok(recipe)
    }

    fn seed_recipe(name: &str, ingredients: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }
}

impl Schema for Recipe {
    const KIND: &'static str = "recipe";

    fn validate(&self) -> Result<(), CoreError> {
        validate_name("name", &self.name)?;
        validate_ingredients(&self.ingredients)
    }

    fn seed() -> Vec<Self> {
        vec![
            Self::seed_recipe("hot cocoa", &["milk", "cocoa powder", "sugar"]),
            Self::seed_recipe("pancakes", &["flour", "eggs", "milk", "butter"]),
        ]
    }
}
