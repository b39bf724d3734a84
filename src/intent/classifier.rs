use crate::lexicon::Lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentCategory {
    MealPlanning,
    Messaging,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    Suggest,
    View,
    Draft,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    pub category: IntentCategory,
    pub kind: Option<IntentKind>,
}

/// Assigns a (category, kind) pair to an utterance by substring membership
/// against the lexicon tables. Meal nouns are tested strictly before message
/// nouns, so an utterance that triggers both always lands in meal planning.
pub fn classify(lexicon: &Lexicon, text: &str) -> Intent {
    let lowered = text.to_lowercase();
    let contains_any = |words: &[String]| words.iter().any(|w| lowered.contains(w.as_str()));

    if contains_any(&lexicon.meal_nouns) {
        let kind = if contains_any(&lexicon.meal_suggest_verbs) {
            IntentKind::Suggest
        } else if contains_any(&lexicon.meal_view_verbs) {
            IntentKind::View
        } else {
            IntentKind::General
        };
        return Intent {
            category: IntentCategory::MealPlanning,
            kind: Some(kind),
        };
    }

    if contains_any(&lexicon.message_nouns) {
        let kind = if contains_any(&lexicon.message_draft_verbs) {
            IntentKind::Draft
        } else if contains_any(&lexicon.message_view_verbs) {
            IntentKind::View
        } else {
            IntentKind::General
        };
        return Intent {
            category: IntentCategory::Messaging,
            kind: Some(kind),
        };
    }

    Intent {
        category: IntentCategory::Unknown,
        kind: None,
    }
}
