use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Canonical meal-type label plus the spelling variants that trigger it.
/// Variants cover diacritic and non-diacritic forms; matching is by
/// substring against the lowercased utterance, in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTypeEntry {
    pub label: String,
    pub variants: Vec<String>,
}

/// Weekday trigger word with its Monday-based index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayEntry {
    pub name: String,
    pub index: u8,
}

/// Relative-day token ("sutra") with its offset in days from today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeDay {
    pub token: String,
    pub offset: i64,
}

/// Every keyword table the classifier and slot extractors consult.
///
/// The vocabulary ships as data rather than inline literals so the matching
/// logic stays testable with any word list, and so a deployment can swap the
/// locale by pointing `LEXICON_PATH` at a JSON override. Ordering inside the
/// tables is significant: entries are tried first to last, and some triggers
/// contain others as substrings ("ponedeljak" contains "nedelja",
/// "prekosutra" contains "sutra").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    pub version: u32,
    pub meal_nouns: Vec<String>,
    pub meal_suggest_verbs: Vec<String>,
    pub meal_view_verbs: Vec<String>,
    pub message_nouns: Vec<String>,
    pub message_draft_verbs: Vec<String>,
    pub message_view_verbs: Vec<String>,
    pub weekly_markers: Vec<String>,
    pub relative_days: Vec<RelativeDay>,
    pub weekdays: Vec<WeekdayEntry>,
    pub meal_types: Vec<MealTypeEntry>,
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            version: 1,
            meal_nouns: words(&[
                "obrok", "jelo", "recept", "ručak", "večera", "doručak", "hrana", "jesti",
                "rucak", "vecera", "dorucak",
            ]),
            meal_suggest_verbs: words(&[
                "planiraj",
                "predloži",
                "preporuči",
                "napravi",
                "predlozi",
                "preporuci",
                "daj",
                "spremiti",
            ]),
            meal_view_verbs: words(&["pokaži", "prikaži", "vidi", "pokazi", "prikazi", "videti"]),
            message_nouns: words(&[
                "poruka",
                "odgovori",
                "napiši",
                "pošalji",
                "mail",
                "email",
                "komuniciranje",
                "napisi",
                "posalji",
            ]),
            message_draft_verbs: words(&["sastavi", "napiši", "odgovori", "napisi"]),
            message_view_verbs: words(&["pogledaj", "prikaži", "vidi", "pokazi", "prikazi"]),
            weekly_markers: words(&["nedelj", "sedmic"]),
            // "prekosutra" must be tried before "sutra", which it contains.
            relative_days: vec![
                RelativeDay {
                    token: "danas".into(),
                    offset: 0,
                },
                RelativeDay {
                    token: "prekosutra".into(),
                    offset: 2,
                },
                RelativeDay {
                    token: "sutra".into(),
                    offset: 1,
                },
            ],
            weekdays: vec![
                WeekdayEntry {
                    name: "ponedeljak".into(),
                    index: 0,
                },
                WeekdayEntry {
                    name: "utorak".into(),
                    index: 1,
                },
                WeekdayEntry {
                    name: "sreda".into(),
                    index: 2,
                },
                WeekdayEntry {
                    name: "četvrtak".into(),
                    index: 3,
                },
                WeekdayEntry {
                    name: "petak".into(),
                    index: 4,
                },
                WeekdayEntry {
                    name: "subota".into(),
                    index: 5,
                },
                WeekdayEntry {
                    name: "nedelja".into(),
                    index: 6,
                },
            ],
            meal_types: vec![
                MealTypeEntry {
                    label: "doručak".into(),
                    variants: words(&["doručak", "dorucak", "jutarnji obrok", "ujutru", "jutro"]),
                },
                MealTypeEntry {
                    label: "ručak".into(),
                    variants: words(&["ručak", "rucak", "podnevni obrok", "popodne"]),
                },
                MealTypeEntry {
                    label: "večera".into(),
                    variants: words(&["večera", "vecera", "večernji obrok", "uveče", "uvece"]),
                },
                MealTypeEntry {
                    label: "užina".into(),
                    variants: words(&["užina", "uzina", "snack", "međuobrok"]),
                },
            ],
        }
    }
}

impl Lexicon {
    /// Loads a vocabulary override, falling back to the built-in Serbian
    /// tables when no path is given or the file cannot be decoded.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<Lexicon>(&raw) {
                Ok(lexicon) => {
                    info!(path = %path.display(), version = lexicon.version, "loaded lexicon override");
                    lexicon
                }
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "failed to decode lexicon; using built-in vocabulary");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(error = %e, path = %path.display(), "failed to read lexicon; using built-in vocabulary");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod lexicon_tests {
    use super::*;

    #[test]
    fn default_vocabulary_covers_core_triggers() {
        let lexicon = Lexicon::default();
        assert!(lexicon.meal_nouns.iter().any(|w| w == "recept"));
        assert!(lexicon.message_nouns.iter().any(|w| w == "poruka"));
        assert_eq!(lexicon.weekdays.len(), 7);
        assert_eq!(lexicon.weekdays[0].name, "ponedeljak");
        assert_eq!(lexicon.weekdays[6].index, 6);
    }

    #[test]
    fn relative_days_try_longer_tokens_first() {
        let lexicon = Lexicon::default();
        let prekosutra = lexicon
            .relative_days
            .iter()
            .position(|d| d.token == "prekosutra")
            .expect("prekosutra present");
        let sutra = lexicon
            .relative_days
            .iter()
            .position(|d| d.token == "sutra")
            .expect("sutra present");
        assert!(prekosutra < sutra);
    }

    #[test]
    fn json_roundtrip_preserves_tables() {
        let lexicon = Lexicon::default();
        let raw = serde_json::to_string(&lexicon).expect("serialize");
        let back: Lexicon = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(back, lexicon);
    }

    #[test]
    fn missing_override_falls_back_to_default() {
        let loaded = Lexicon::load_or_default(Some(Path::new("/nonexistent/lexicon.json")));
        assert_eq!(loaded, Lexicon::default());
    }
}
