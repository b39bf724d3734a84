use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub profile_path: PathBuf,
    pub recipes_path: PathBuf,
    pub lexicon_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let profile_path = std::env::var("PROFILE_PATH")
            .unwrap_or_else(|_| "data/user_profile.json".into())
            .into();
        let recipes_path = std::env::var("RECIPES_PATH")
            .unwrap_or_else(|_| "data/recipes.json".into())
            .into();
        let lexicon_path = std::env::var("LEXICON_PATH").ok().map(PathBuf::from);
        Ok(Self {
            profile_path,
            recipes_path,
            lexicon_path,
        })
    }
}
