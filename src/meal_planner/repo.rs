use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};

use crate::meal_planner::models::Recipe;
use crate::meal_planner::seed;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("recipe with id {0} already exists")]
    DuplicateId(u32),
    #[error("failed to persist recipe collection")]
    Persist(#[from] std::io::Error),
    #[error("failed to encode recipe collection")]
    Encode(#[from] serde_json::Error),
}

/// The recipe collection, backed by a single JSON array file. Every mutation
/// rewrites the whole file; there is no locking and no partial write, which
/// is fine for a single-user local tool and nothing else.
#[derive(Debug)]
pub struct RecipeStore {
    path: PathBuf,
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Opens the collection file. A missing file is seeded with the starter
    /// recipes and written out; an unreadable or undecodable file degrades to
    /// an empty collection rather than failing startup.
    pub fn load(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();

        if !path.exists() {
            info!(path = %path.display(), "recipe file missing; seeding starter collection");
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)?;
            }
            let store = Self {
                path,
                recipes: seed::initial_recipes(),
            };
            store.save()?;
            return Ok(store);
        }

        let recipes = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<Recipe>>(&raw) {
                Ok(recipes) => recipes,
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "failed to decode recipe file; starting with an empty collection");
                    Vec::new()
                }
            },
            Err(e) => {
                warn!(error = %e, path = %path.display(), "failed to read recipe file; starting with an empty collection");
                Vec::new()
            }
        };

        Ok(Self { path, recipes })
    }

    pub fn from_parts(path: impl Into<PathBuf>, recipes: Vec<Recipe>) -> Self {
        Self {
            path: path.into(),
            recipes,
        }
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn add(&mut self, recipe: Recipe) -> Result<(), StoreError> {
        if self.get(recipe.id).is_some() {
            return Err(StoreError::DuplicateId(recipe.id));
        }
        self.recipes.push(recipe);
        self.save()
    }

    /// Replaces the record with the same id. Returns false when no record
    /// matched; nothing is written in that case.
    pub fn update(&mut self, recipe: Recipe) -> Result<bool, StoreError> {
        match self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => {
                *existing = recipe;
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn delete(&mut self, id: u32) -> Result<bool, StoreError> {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        if self.recipes.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    fn save(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.recipes)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
