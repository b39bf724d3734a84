use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{info, warn};

/// How drafted replies address people. Stored as free text in the profile
/// file; anything unrecognized reads as `Casual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunicationStyle {
    Formal,
    Casual,
    Friendly,
}

impl CommunicationStyle {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "formal" => Self::Formal,
            "friendly" => Self::Friendly,
            _ => Self::Casual,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub communication_style: String,
    pub created_at: String,
    #[serde(default)]
    pub preferences: BTreeMap<String, serde_json::Value>,
}

impl UserProfile {
    pub fn style(&self) -> CommunicationStyle {
        CommunicationStyle::parse(&self.communication_style)
    }

    /// Reads the profile file, or creates and persists a default one when the
    /// file is missing or undecodable.
    pub fn load_or_create(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(raw) => match serde_json::from_str::<UserProfile>(&raw) {
                    Ok(profile) => return Ok(profile),
                    Err(e) => {
                        warn!(error = %e, path = %path.display(), "failed to decode user profile; creating a fresh one")
                    }
                },
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "failed to read user profile; creating a fresh one")
                }
            }
        }

        let profile = Self::default_profile()?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(&profile)?)?;
        info!(path = %path.display(), "created default user profile");
        Ok(profile)
    }

    fn default_profile() -> anyhow::Result<Self> {
        Ok(Self {
            id: "user1".into(),
            name: "Korisnik".into(),
            communication_style: "casual".into(),
            created_at: OffsetDateTime::now_utc().format(&Rfc3339)?,
            preferences: BTreeMap::new(),
        })
    }
}
