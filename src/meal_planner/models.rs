use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Date;
use tracing::warn;

/// Parsed form of the recipe-card nutrition shorthand, e.g.
/// `366KCAL;23P,28UH,18M` (calories; protein, carbs, fat in grams).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: u32,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl NutritionFacts {
    pub fn from_label(label: &str) -> Option<Self> {
        let parsed = Self::parse_label(label);
        if parsed.is_none() {
            warn!(label = %label, "unparseable nutrition label");
        }
        parsed
    }

    fn parse_label(label: &str) -> Option<Self> {
        let (calories_part, macros_part) = label.split_once(';')?;
        let calories = calories_part
            .trim()
            .strip_suffix("KCAL")?
            .trim()
            .parse()
            .ok()?;

        let mut macros = macros_part.trim().split(',');
        let proteins = parse_macro(macros.next()?, "P")?;
        let carbs = parse_macro(macros.next()?, "UH")?;
        let fats = parse_macro(macros.next()?, "M")?;

        Some(Self {
            calories,
            proteins,
            carbs,
            fats,
        })
    }
}

fn parse_macro(raw: &str, suffix: &str) -> Option<f64> {
    raw.trim().strip_suffix(suffix)?.trim().parse().ok()
}

/// One recipe record as stored in the JSON collection file.
///
/// `meal_type` is a free-form, sometimes slash-delimited label such as
/// `"ručak/večera"`; it is matched by case-insensitive substring, never as an
/// exact set. `additional_sections` holds named sub-recipes (a sauce, a
/// filling) with their own ingredient lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub number: Option<u32>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub nutritional_info: Option<NutritionFacts>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub additional_sections: BTreeMap<String, Vec<String>>,
}

/// A meal that was planned at some point, kept for ranking purposes.
#[derive(Debug, Clone, PartialEq)]
pub struct MealRecord {
    pub recipe_id: u32,
    pub meal_type: Option<String>,
    pub date: Option<Date>,
}

const MEAL_HISTORY_LIMIT: usize = 50;

/// Per-user taste state. Held in memory for the lifetime of the process;
/// nothing here is persisted.
#[derive(Debug, Clone)]
pub struct UserPreferences {
    pub user_id: String,
    dietary_restrictions: Vec<String>,
    favorite_cuisines: Vec<String>,
    disliked_ingredients: Vec<String>,
    meal_history: Vec<MealRecord>,
    favorite_recipes: Vec<u32>,
}

impl UserPreferences {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            dietary_restrictions: Vec::new(),
            favorite_cuisines: Vec::new(),
            disliked_ingredients: Vec::new(),
            meal_history: Vec::new(),
            favorite_recipes: Vec::new(),
        }
    }

    pub fn dietary_restrictions(&self) -> &[String] {
        &self.dietary_restrictions
    }

    pub fn favorite_cuisines(&self) -> &[String] {
        &self.favorite_cuisines
    }

    pub fn disliked_ingredients(&self) -> &[String] {
        &self.disliked_ingredients
    }

    pub fn meal_history(&self) -> &[MealRecord] {
        &self.meal_history
    }

    pub fn favorite_recipes(&self) -> &[u32] {
        &self.favorite_recipes
    }

    pub fn set_dietary_restrictions(&mut self, values: Vec<String>) {
        self.dietary_restrictions = values;
    }

    pub fn set_favorite_cuisines(&mut self, values: Vec<String>) {
        self.favorite_cuisines = values;
    }

    pub fn set_disliked_ingredients(&mut self, values: Vec<String>) {
        self.disliked_ingredients = values;
    }

    pub fn set_favorite_recipes(&mut self, values: Vec<u32>) {
        self.favorite_recipes = values;
    }

    /// Appends to the meal history, evicting the oldest entries past the cap.
    pub fn add_to_meal_history(&mut self, record: MealRecord) {
        self.meal_history.push(record);
        if self.meal_history.len() > MEAL_HISTORY_LIMIT {
            let excess = self.meal_history.len() - MEAL_HISTORY_LIMIT;
            self.meal_history.drain(..excess);
        }
    }
}

/// One meal-type slot of a daily plan; `None` means no suggestion was found.
#[derive(Debug, Clone, PartialEq)]
pub struct MealSlot {
    pub meal_type: String,
    pub recipe: Option<Recipe>,
}

/// Suggestions for a single day, in the order the meal types were requested.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPlan {
    pub date: Date,
    pub meals: Vec<MealSlot>,
}

/// Seven consecutive daily plans keyed by ISO date string; the BTreeMap
/// ordering keeps the keys chronological.
pub type WeeklyPlan = BTreeMap<String, DailyPlan>;

#[cfg(test)]
mod nutrition_tests {
    use super::*;

    #[test]
    fn parses_recipe_card_label() {
        let facts = NutritionFacts::from_label("366KCAL;23P,28UH,18M").expect("valid label");
        assert_eq!(facts.calories, 366);
        assert_eq!(facts.proteins, 23.0);
        assert_eq!(facts.carbs, 28.0);
        assert_eq!(facts.fats, 18.0);
    }

    #[test]
    fn parses_fractional_macros() {
        let facts = NutritionFacts::from_label("401KCAL;32P,31UH,15.5M").expect("valid label");
        assert_eq!(facts.fats, 15.5);
    }

    #[test]
    fn rejects_malformed_labels() {
        assert_eq!(NutritionFacts::from_label(""), None);
        assert_eq!(NutritionFacts::from_label("366;23P,28UH,18M"), None);
        assert_eq!(NutritionFacts::from_label("366KCAL"), None);
        assert_eq!(NutritionFacts::from_label("366KCAL;23P,28UH"), None);
        assert_eq!(NutritionFacts::from_label("366KCAL;23X,28UH,18M"), None);
    }
}
