use regex::Regex;
use std::sync::LazyLock;

use crate::catalog::SuggestedRoom;

static BUDGET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?(\d+)").expect("budget pattern is valid"));

pub const GREETING: &str = "Hello! I'm your hotel booking assistant. I can help you find the perfect room within your budget. What's your budget per night?";
const THANKS_REPLY: &str = "You're welcome! Let me know if you need anything else.";
const HELP_REPLY: &str = "I can help you find a room based on your budget. Just tell me how much you'd like to spend per night, and I'll suggest some options!";
const FALLBACK_REPLY: &str = "I'm here to help you find the perfect room. Could you please let me know your budget per night?";

/// First number in the text, with an optional leading `$`.
/// Digit runs too large for a u64 saturate.
pub fn extract_budget(text: &str) -> Option<u64> {
    let digits = BUDGET_RE.captures(text)?.get(1)?.as_str();
    Some(digits.parse().unwrap_or(u64::MAX))
}

/// Picks the bot reply for a user message. Rules are tried in order and the
/// first match wins; `budget` is recorded at most once per session.
pub fn respond(budget: &mut Option<u64>, rooms: &[SuggestedRoom], text: &str) -> String {
    // a zero budget never counts, same as no number at all
    let number = extract_budget(text).filter(|n| *n > 0);

    if let (None, Some(amount)) = (*budget, number) {
        *budget = Some(amount);
        return budget_reply(rooms, amount);
    }

    let lowered = text.to_lowercase();
    if lowered.contains("thank") {
        THANKS_REPLY.to_string()
    } else if lowered.contains("help") {
        HELP_REPLY.to_string()
    } else {
        FALLBACK_REPLY.to_string()
    }
}

fn budget_reply(rooms: &[SuggestedRoom], amount: u64) -> String {
    let suggestions: Vec<String> = rooms
        .iter()
        .filter(|room| u64::from(room.price) <= amount)
        .map(SuggestedRoom::summary)
        .collect();

    if suggestions.is_empty() {
        return format!(
            "I apologize, but I don't have any rooms available within your budget of ${amount}. Would you like to explore options in a different price range?"
        );
    }

    format!(
        "Great! For your budget of ${amount}, I can suggest these rooms:\n\n{}\n\nWould you like more details about any of these options?",
        suggestions.join("\n\n")
    )
}
