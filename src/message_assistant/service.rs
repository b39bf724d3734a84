use serde::Serialize;

use crate::profile::{CommunicationStyle, UserProfile};

const MEETING_KEYWORDS: &[&str] = &["sastanak", "poziv", "čujemo se", "vidimo se", "cujemo se"];
const GRATITUDE_KEYWORDS: &[&str] = &["hvala", "zahvaljujem"];

/// What the incoming message is after, decided by a fixed priority test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageIntent {
    Question,
    MeetingRequest,
    Gratitude,
    GeneralStatement,
}

pub fn analyze_message_intent(message: &str) -> MessageIntent {
    let lowered = message.to_lowercase();
    if message.contains('?') {
        MessageIntent::Question
    } else if MEETING_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        MessageIntent::MeetingRequest
    } else if GRATITUDE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        MessageIntent::Gratitude
    } else {
        MessageIntent::GeneralStatement
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageDraft {
    pub original_message: String,
    pub sender: String,
    pub draft_response: String,
    pub confidence: f64,
}

/// Drafts a reply to `message` from `sender`, phrased for the profile's
/// communication style. The confidence value is a placeholder constant.
pub fn draft_response(profile: &UserProfile, message: &str, sender: &str) -> MessageDraft {
    let intent = analyze_message_intent(message);
    let draft_response = render_template(intent, profile.style(), sender, &profile.name);
    MessageDraft {
        original_message: message.to_string(),
        sender: sender.to_string(),
        draft_response,
        confidence: 0.8,
    }
}

fn render_template(
    intent: MessageIntent,
    style: CommunicationStyle,
    sender: &str,
    name: &str,
) -> String {
    use CommunicationStyle::{Casual, Formal, Friendly};
    use MessageIntent::{GeneralStatement, Gratitude, MeetingRequest, Question};

    match (intent, style) {
        (Question, Formal) => format!(
            "Poštovani {sender},\n\nHvala Vam na upitu. Razmotriću i odgovoriti što pre.\n\nS poštovanjem,\n{name}"
        ),
        (Question, Casual) => format!(
            "Zdravo {sender},\n\nHvala na pitanju! Razmisliću i javiću ti uskoro.\n\nPozdrav,\n{name}"
        ),
        (Question, Friendly) => format!(
            "Hej {sender}! 😊\n\nSuper pitanje! Vidim šta mogu da saznam i javljam ti se ubrzo.\n\nPozdrav!\n{name}"
        ),
        (MeetingRequest, Formal) => format!(
            "Poštovani {sender},\n\nHvala Vam na predlogu za sastanak. Proveriću svoju dostupnost i javiti Vam se uskoro.\n\nS poštovanjem,\n{name}"
        ),
        (MeetingRequest, Casual) => format!(
            "Zdravo {sender},\n\nSvakako možemo da se nađemo! Pogledaću kalendar i javiti ti se za termin.\n\nPozdrav,\n{name}"
        ),
        (MeetingRequest, Friendly) => format!(
            "Hej {sender}! 😊\n\nDa, ajde da se vidimo! Baciću pogled na kalendar i predložiću ti neke termine.\n\nČujemo se!\n{name}"
        ),
        (Gratitude, Formal) => format!(
            "Poštovani {sender},\n\nNema na čemu, drago mi je da sam mogao/la da pomognem.\n\nS poštovanjem,\n{name}"
        ),
        (Gratitude, Casual) => format!(
            "Zdravo {sender},\n\nNema frke, drago mi je da sam mogao/la da pomognem! 🙂\n\nPozdrav,\n{name}"
        ),
        (Gratitude, Friendly) => format!(
            "Hej {sender}! 😊\n\nMa nema na čemu! Uvek sam tu ako ti treba još nešto!\n\nPozdrav!\n{name}"
        ),
        (GeneralStatement, Formal) => format!(
            "Poštovani {sender},\n\nHvala Vam na poruci. Uzeo/la sam to u obzir.\n\nS poštovanjem,\n{name}"
        ),
        (GeneralStatement, Casual) => format!(
            "Zdravo {sender},\n\nHvala na poruci! Razmotriću to.\n\nPozdrav,\n{name}"
        ),
        (GeneralStatement, Friendly) => format!(
            "Hej {sender}! 😊\n\nSuper, hvala ti na poruci! Bacam pogled na to.\n\nPozdrav!\n{name}"
        ),
    }
}
