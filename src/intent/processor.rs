use time::Date;
use tracing::debug;

use crate::intent::classifier::{classify, IntentCategory, IntentKind};
use crate::intent::slots::{
    extract_date, extract_meal_type, extract_message_content, extract_recipient,
};
use crate::meal_planner::models::{DailyPlan, WeeklyPlan};
use crate::meal_planner::service::{generate_daily_plan, generate_weekly_plan, DateInput};
use crate::message_assistant::service::{draft_response, MessageDraft};
use crate::state::AppState;

const UNKNOWN_INTENT_REPLY: &str =
    "Trenutno mogu da vam pomognem oko planiranja obroka i poruka. Kako vam mogu pomoći u vezi sa tim?";
const VIEW_PLANS_PENDING: &str =
    "Funkcionalnost pregleda postojećih planova obroka će biti dostupna uskoro.";
const MEAL_PLANNING_HINT: &str =
    "Mogu vam pomoći da isplanirate obroke. Recite mi za koji dan ili obrok želite predlog.";
const MISSING_DRAFT_DETAILS: &str =
    "Možete li mi reći kome i na koju poruku želite da odgovorite?";
const MESSAGING_HINT: &str =
    "Mogu vam pomoći da sastavite odgovor na poruke. Molim vas da mi kažete čiju poruku i kako da odgovorim.";

/// A routed result, tagged by the kind of formatting it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    General { message: String },
    MealPlanDaily { plan: DailyPlan },
    MealPlanWeekly { plan: WeeklyPlan },
    MessageDraft { draft: MessageDraft },
}

fn general(message: &str) -> Response {
    Response::General {
        message: message.to_string(),
    }
}

/// Classifies the utterance and routes it to the matching domain service.
pub fn process_request(state: &AppState, text: &str, today: Date) -> Response {
    let intent = classify(&state.lexicon, text);
    debug!(?intent, "classified utterance");

    match intent.category {
        IntentCategory::MealPlanning => handle_meal_planning(state, intent.kind, text, today),
        IntentCategory::Messaging => handle_messaging(state, intent.kind, text),
        IntentCategory::Unknown => general(UNKNOWN_INTENT_REPLY),
    }
}

fn handle_meal_planning(
    state: &AppState,
    kind: Option<IntentKind>,
    text: &str,
    today: Date,
) -> Response {
    match kind {
        Some(IntentKind::Suggest) => {
            let date = extract_date(&state.lexicon, text, today).unwrap_or(today);

            let lowered = text.to_lowercase();
            let wants_week = state
                .lexicon
                .weekly_markers
                .iter()
                .any(|marker| lowered.contains(marker.as_str()));

            if wants_week {
                let plan = generate_weekly_plan(
                    &state.recipes,
                    &state.preferences,
                    DateInput::Value(date),
                    today,
                );
                Response::MealPlanWeekly { plan }
            } else {
                let meal_types = extract_meal_type(&state.lexicon, text).map(|mt| vec![mt]);
                let plan = generate_daily_plan(
                    &state.recipes,
                    &state.preferences,
                    DateInput::Value(date),
                    meal_types.as_deref(),
                    today,
                );
                Response::MealPlanDaily { plan }
            }
        }
        Some(IntentKind::View) => general(VIEW_PLANS_PENDING),
        _ => general(MEAL_PLANNING_HINT),
    }
}

fn handle_messaging(state: &AppState, kind: Option<IntentKind>, text: &str) -> Response {
    if kind == Some(IntentKind::Draft) {
        let recipient = extract_recipient(text);
        let content = extract_message_content(text);

        return match (recipient, content) {
            (Some(recipient), Some(content)) => Response::MessageDraft {
                draft: draft_response(&state.profile, &content, &recipient),
            },
            _ => general(MISSING_DRAFT_DETAILS),
        };
    }

    general(MESSAGING_HINT)
}
