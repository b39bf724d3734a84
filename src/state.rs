use time::OffsetDateTime;
use tracing::info;

use crate::config::AppConfig;
use crate::intent::processor::process_request;
use crate::lexicon::Lexicon;
use crate::meal_planner::models::UserPreferences;
use crate::meal_planner::repo::RecipeStore;
use crate::profile::UserProfile;
use crate::render;

/// Everything a request needs, passed explicitly into the pipeline rather
/// than held in globals.
pub struct AppState {
    pub config: AppConfig,
    pub lexicon: Lexicon,
    pub recipes: RecipeStore,
    pub profile: UserProfile,
    pub preferences: UserPreferences,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        let lexicon = Lexicon::load_or_default(config.lexicon_path.as_deref());
        let recipes = RecipeStore::load(&config.recipes_path)?;
        let profile = UserProfile::load_or_create(&config.profile_path)?;
        let preferences = UserPreferences::new(profile.id.clone());
        info!(
            user = %profile.id,
            recipes = recipes.all().len(),
            "assistant state ready"
        );
        Ok(Self {
            config,
            lexicon,
            recipes,
            profile,
            preferences,
        })
    }

    /// Runs one utterance through the full pipeline and returns the text to
    /// show the user. Both sides of the exchange are logged.
    pub fn process_command(&self, text: &str) -> String {
        info!(role = "user", text = %text, "interaction");

        let today = OffsetDateTime::now_utc().date();
        let response = process_request(self, text, today);
        let formatted = render::format_response(&response);

        info!(role = "assistant", text = %formatted, "interaction");
        formatted
    }

    #[cfg(test)]
    pub fn for_tests(recipes: Vec<crate::meal_planner::models::Recipe>) -> Self {
        use std::collections::BTreeMap;
        use std::path::PathBuf;

        let config = AppConfig {
            profile_path: PathBuf::from("unused_profile.json"),
            recipes_path: PathBuf::from("unused_recipes.json"),
            lexicon_path: None,
        };
        let profile = UserProfile {
            id: "user1".into(),
            name: "Korisnik".into(),
            communication_style: "casual".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
            preferences: BTreeMap::new(),
        };
        Self {
            config,
            lexicon: Lexicon::default(),
            recipes: RecipeStore::from_parts("unused_recipes.json", recipes),
            profile: profile.clone(),
            preferences: UserPreferences::new(profile.id),
        }
    }
}
