// Canned dialogue strings. Recommendation text itself is rendered by
// matching::composer.

use rand::seq::SliceRandom;

use crate::models::mode::Mode;

pub const FEEDBACK_PROMPT: &str = "Did this job match your interest? (yes/no)";

pub const MATCH_ACKNOWLEDGED: &str = "Great! 🎉 Glad I could help you find a match.";

pub const ANOTHER_PROMPT: &str = "Would you like to see another job suggestion? (yes/no)";

pub const IMPROVE_PROMPT: &str = "Would you like to add more skills to improve matches? (yes/no)";

pub const YES_NO_REPROMPT: &str = "Please answer with 'yes' or 'no'.";

pub const ENTER_MORE_SKILLS: &str = "Sure! Please enter the additional skills you'd like to add.";

pub const CLOSING_THANKS: &str = "Okay, thanks for your feedback. We’ll keep improving! 🙏";

/// Opening prompts for chatty mode.
pub const CHATTY_GREETINGS: &[&str] = &[
    "Let's see what you're made of! 🚀 Drop your skills below.",
    "Brag a little 😊 — what skills do you have?",
    "Go ahead — tell me your awesome skills! I'll find the right job for you. 😎",
    "Tech wizard? Team player? Fast typer? Tell me everything! ✨",
    "Give me your skills — I'll give you your future. 🔮",
    "You can write your skills however you want — a sentence, list, or even a paragraph.",
    "What kind of skills do you have? Type however you like!",
    "Tell me your skills — I'm all ears. 🎧",
    "Just describe your skills in your own words — I'll do the rest!",
];

/// Opening prompts for compact mode.
pub const COMPACT_GREETINGS: &[&str] = &[
    "Input your skill set to initiate recommendation protocols...",
    "Job matching engine engaged. Awaiting input of your skillset...",
    "Processing unit is active. Kindly enter the skills you possess...",
];

pub fn greetings(mode: Mode) -> &'static [&'static str] {
    match mode {
        Mode::Chatty => CHATTY_GREETINGS,
        Mode::Compact => COMPACT_GREETINGS,
    }
}

/// Picks one opening prompt for `mode` at random.
pub fn random_greeting(mode: Mode) -> &'static str {
    greetings(mode)
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(CHATTY_GREETINGS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_lists_sizes() {
        assert_eq!(greetings(Mode::Chatty).len(), 9);
        assert_eq!(greetings(Mode::Compact).len(), 3);
    }

    #[test]
    fn test_random_greeting_comes_from_mode_list() {
        for _ in 0..20 {
            assert!(COMPACT_GREETINGS.contains(&random_greeting(Mode::Compact)));
            assert!(CHATTY_GREETINGS.contains(&random_greeting(Mode::Chatty)));
        }
    }
}
