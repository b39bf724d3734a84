use rand::seq::SliceRandom;
use rand::thread_rng;
use time::{Date, Duration};
use tracing::warn;

use crate::dates::{format_iso, parse_iso};
use crate::meal_planner::models::{DailyPlan, MealSlot, Recipe, UserPreferences, WeeklyPlan};
use crate::meal_planner::repo::RecipeStore;

pub const DEFAULT_MEAL_TYPES: [&str; 3] = ["doručak", "ručak", "večera"];

/// A plan date as callers hand it in: either an actual date or loose text
/// that may be an ISO `YYYY-MM-DD` string. Anything unparseable resolves to
/// today rather than failing the request.
#[derive(Debug, Clone)]
pub enum DateInput {
    Value(Date),
    Text(String),
}

impl DateInput {
    pub fn resolve(&self, today: Date) -> Date {
        match self {
            Self::Value(date) => *date,
            Self::Text(raw) => parse_iso(raw).unwrap_or(today),
        }
    }
}

impl From<Date> for DateInput {
    fn from(value: Date) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Candidate recipes for one meal type, after the preference filters.
///
/// When every recipe is filtered away but the collection itself is non-empty,
/// the result falls back to a random sample of up to 3 unfiltered recipes —
/// restrictions and dislikes are ignored on that path, so it is logged loudly.
pub fn find_suitable_recipes(
    store: &RecipeStore,
    prefs: &UserPreferences,
    meal_type: Option<&str>,
) -> Vec<Recipe> {
    let all = store.all();
    if all.is_empty() {
        return Vec::new();
    }

    let mut suitable: Vec<Recipe> = all
        .iter()
        .filter(|recipe| {
            if let (Some(wanted), Some(label)) = (meal_type, recipe.meal_type.as_deref()) {
                if !label.to_lowercase().contains(&wanted.to_lowercase()) {
                    return false;
                }
            }
            matches_dietary_restrictions(prefs, recipe)
                && !contains_disliked_ingredients(prefs, recipe)
        })
        .cloned()
        .collect();

    if suitable.is_empty() {
        warn!(
            meal_type = ?meal_type,
            "no recipes passed the preference filters; sampling from the full collection"
        );
        let mut rng = thread_rng();
        suitable = all
            .choose_multiple(&mut rng, all.len().min(3))
            .cloned()
            .collect();
    }

    suitable
}

fn matches_dietary_restrictions(prefs: &UserPreferences, _recipe: &Recipe) -> bool {
    if prefs.dietary_restrictions().is_empty() {
        return true;
    }
    // Restriction matching against ingredients and tags is not implemented
    // yet; every recipe passes.
    true
}

fn contains_disliked_ingredients(prefs: &UserPreferences, recipe: &Recipe) -> bool {
    if prefs.disliked_ingredients().is_empty() {
        return false;
    }
    recipe.ingredients.iter().any(|ingredient| {
        let ingredient = ingredient.to_lowercase();
        prefs
            .disliked_ingredients()
            .iter()
            .any(|disliked| ingredient.contains(&disliked.to_lowercase()))
    })
}

fn score_recipe(prefs: &UserPreferences, recipe: &Recipe, recent_ids: &[u32]) -> i32 {
    let mut score = 0;
    if recipe
        .cuisine_type
        .as_deref()
        .is_some_and(|cuisine| prefs.favorite_cuisines().iter().any(|f| f == cuisine))
    {
        score += 2;
    }
    if prefs.favorite_recipes().contains(&recipe.id) {
        score += 3;
    }
    if recent_ids.contains(&recipe.id) {
        score -= 1;
    }
    score
}

/// Orders candidates best first: +2 for a favorite cuisine, +3 for a favorite
/// recipe, -1 for showing up in the last 10 history entries. Recipes with
/// equal scores are shuffled within their group so repeated requests vary,
/// without ever promoting a recipe past a higher-scored one.
pub fn rank_recipes(prefs: &UserPreferences, recipes: &[Recipe]) -> Vec<Recipe> {
    let recent_ids: Vec<u32> = prefs
        .meal_history()
        .iter()
        .rev()
        .take(10)
        .map(|m| m.recipe_id)
        .collect();

    let mut scored: Vec<(Recipe, i32)> = recipes
        .iter()
        .map(|recipe| (recipe.clone(), score_recipe(prefs, recipe, &recent_ids)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let mut rng = thread_rng();
    let mut ranked = Vec::with_capacity(scored.len());
    let mut start = 0;
    while start < scored.len() {
        let score = scored[start].1;
        let end = start
            + scored[start..]
                .iter()
                .take_while(|(_, s)| *s == score)
                .count();
        let mut group: Vec<Recipe> = scored[start..end].iter().map(|(r, _)| r.clone()).collect();
        group.shuffle(&mut rng);
        ranked.extend(group);
        start = end;
    }
    ranked
}

/// Builds suggestions for one day. Meal types default to breakfast, lunch and
/// dinner; a slot with no candidates at all gets an absence marker. Read-only:
/// neither the store nor the preferences are touched.
pub fn generate_daily_plan(
    store: &RecipeStore,
    prefs: &UserPreferences,
    date: DateInput,
    meal_types: Option<&[String]>,
    today: Date,
) -> DailyPlan {
    let date = date.resolve(today);
    let meal_types: Vec<String> = match meal_types {
        Some(requested) => requested.to_vec(),
        None => DEFAULT_MEAL_TYPES.iter().map(|s| s.to_string()).collect(),
    };

    let mut meals = Vec::with_capacity(meal_types.len());
    for meal_type in meal_types {
        let candidates = find_suitable_recipes(store, prefs, Some(&meal_type));
        let recipe = rank_recipes(prefs, &candidates).into_iter().next();
        meals.push(MealSlot { meal_type, recipe });
    }

    DailyPlan { date, meals }
}

/// Exactly seven consecutive daily plans starting at `start`, keyed by ISO
/// date string.
pub fn generate_weekly_plan(
    store: &RecipeStore,
    prefs: &UserPreferences,
    start: DateInput,
    today: Date,
) -> WeeklyPlan {
    let start = start.resolve(today);
    let mut plan = WeeklyPlan::new();
    let mut current = start;
    for _ in 0..7 {
        let daily = generate_daily_plan(store, prefs, DateInput::Value(current), None, today);
        plan.insert(format_iso(current), daily);
        current = current + Duration::days(1);
    }
    plan
}

#[cfg(test)]
mod planner_tests {
    use super::*;
    use crate::meal_planner::models::MealRecord;
    use crate::meal_planner::seed;
    use std::collections::BTreeMap;
    use time::Month;

    fn store() -> RecipeStore {
        RecipeStore::from_parts("unused.json", seed::initial_recipes())
    }

    fn today() -> Date {
        Date::from_calendar_date(2024, Month::August, 6).expect("valid date")
    }

    fn plain(id: u32, name: &str, cuisine: Option<&str>) -> Recipe {
        Recipe {
            id,
            name: name.into(),
            number: None,
            ingredients: vec!["200g piletine".into()],
            instructions: vec!["Ispeći.".into()],
            nutritional_info: None,
            prep_time: None,
            cuisine_type: cuisine.map(String::from),
            tags: Vec::new(),
            meal_type: Some("ručak".into()),
            image_path: None,
            difficulty: None,
            additional_sections: BTreeMap::new(),
        }
    }

    #[test]
    fn empty_collection_yields_no_candidates_and_no_fallback() {
        let store = RecipeStore::from_parts("unused.json", Vec::new());
        let prefs = UserPreferences::new("user1");
        assert!(find_suitable_recipes(&store, &prefs, Some("ručak")).is_empty());
    }

    #[test]
    fn meal_type_is_matched_by_substring() {
        let store = store();
        let prefs = UserPreferences::new("user1");
        let lunch = find_suitable_recipes(&store, &prefs, Some("ručak"));
        // "ručak/večera" recipes and the slash-less matches, not exact labels
        assert!(lunch.iter().any(|r| r.id == 2));
        assert!(lunch.iter().any(|r| r.id == 5));
        assert!(!lunch.iter().any(|r| r.id == 4));
    }

    #[test]
    fn recipe_without_meal_type_passes_the_type_filter() {
        let mut untyped = plain(9, "NEUTRALNO JELO", None);
        untyped.meal_type = None;
        let store = RecipeStore::from_parts("unused.json", vec![untyped]);
        let prefs = UserPreferences::new("user1");
        let found = find_suitable_recipes(&store, &prefs, Some("večera"));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn disliked_ingredients_filter_by_substring() {
        let store = store();
        let mut prefs = UserPreferences::new("user1");
        prefs.set_disliked_ingredients(vec!["tunjevin".into()]);
        let breakfast = find_suitable_recipes(&store, &prefs, Some("doručak"));
        assert!(
            !breakfast.iter().any(|r| r.id == 1),
            "tuna toast should be filtered out"
        );
    }

    #[test]
    fn filters_that_eliminate_everything_fall_back_to_a_sample() {
        let store = store();
        let mut prefs = UserPreferences::new("user1");
        // Every seed recipe lists an ingredient in grams.
        prefs.set_disliked_ingredients(vec!["g".into()]);
        let found = find_suitable_recipes(&store, &prefs, Some("ručak"));
        assert!(!found.is_empty(), "fallback sample expected");
        assert!(found.len() <= 3);
    }

    #[test]
    fn favorite_recipe_never_ranks_below_a_plain_one() {
        let recipes = vec![plain(1, "JELO A", None), plain(2, "JELO B", None)];
        let mut prefs = UserPreferences::new("user1");
        prefs.set_favorite_recipes(vec![2]);

        for _ in 0..20 {
            let ranked = rank_recipes(&prefs, &recipes);
            assert_eq!(ranked[0].id, 2, "favorite must stay on top");
        }
    }

    #[test]
    fn recently_planned_recipes_rank_below_fresh_ones() {
        let recipes = vec![plain(1, "JELO A", None), plain(2, "JELO B", None)];
        let mut prefs = UserPreferences::new("user1");
        prefs.add_to_meal_history(MealRecord {
            recipe_id: 1,
            meal_type: Some("ručak".into()),
            date: None,
        });

        for _ in 0..20 {
            let ranked = rank_recipes(&prefs, &recipes);
            assert_eq!(ranked[0].id, 2);
        }
    }

    #[test]
    fn favorite_cuisine_outranks_unknown_cuisine() {
        let recipes = vec![
            plain(1, "JELO A", Some("kineska")),
            plain(2, "JELO B", Some("italijanska")),
        ];
        let mut prefs = UserPreferences::new("user1");
        prefs.set_favorite_cuisines(vec!["italijanska".into()]);

        for _ in 0..20 {
            let ranked = rank_recipes(&prefs, &recipes);
            assert_eq!(ranked[0].id, 2);
        }
    }

    #[test]
    fn daily_plan_defaults_to_three_meal_types() {
        let store = store();
        let prefs = UserPreferences::new("user1");
        let plan = generate_daily_plan(&store, &prefs, today().into(), None, today());
        let types: Vec<&str> = plan.meals.iter().map(|m| m.meal_type.as_str()).collect();
        assert_eq!(types, DEFAULT_MEAL_TYPES);
        assert!(plan.meals.iter().all(|m| m.recipe.is_some()));
    }

    #[test]
    fn daily_plan_marks_absent_suggestions() {
        let store = RecipeStore::from_parts("unused.json", Vec::new());
        let prefs = UserPreferences::new("user1");
        let plan = generate_daily_plan(&store, &prefs, today().into(), None, today());
        assert!(plan.meals.iter().all(|m| m.recipe.is_none()));
    }

    #[test]
    fn weekly_plan_is_seven_consecutive_days() {
        let store = store();
        let prefs = UserPreferences::new("user1");
        let start = Date::from_calendar_date(2024, Month::December, 29).expect("valid date");
        let plan = generate_weekly_plan(&store, &prefs, start.into(), today());

        assert_eq!(plan.len(), 7);
        let keys: Vec<&String> = plan.keys().collect();
        assert_eq!(keys[0], "2024-12-29");
        assert_eq!(keys[3], "2025-01-01");
        assert_eq!(keys[6], "2025-01-04");
        for (key, daily) in &plan {
            assert_eq!(key, &format_iso(daily.date));
        }
    }

    #[test]
    fn date_input_resolves_iso_text_and_falls_back_to_today() {
        let today = today();
        let parsed = DateInput::from("2024-08-15").resolve(today);
        assert_eq!(
            parsed,
            Date::from_calendar_date(2024, Month::August, 15).expect("valid date")
        );
        assert_eq!(DateInput::from("nije datum").resolve(today), today);
        assert_eq!(DateInput::Value(parsed).resolve(today), parsed);
    }
}
