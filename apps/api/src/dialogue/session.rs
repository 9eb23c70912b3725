//! Dialogue state machine: one session's step plus its transition function.
//!
//! Cycle: Skills -> Feedback -> (Another | Improve) -> Skills. There is no
//! terminal step. Unrecognized yes/no answers re-prompt without moving.

use serde::Serialize;

use crate::dialogue::prompts::{
    ANOTHER_PROMPT, CLOSING_THANKS, ENTER_MORE_SKILLS, FEEDBACK_PROMPT, IMPROVE_PROMPT,
    MATCH_ACKNOWLEDGED, YES_NO_REPROMPT,
};
use crate::matching::composer::{compose, compose_alternative};
use crate::matching::matcher::Recommendation;
use crate::matching::Recommender;
use crate::models::mode::Mode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Waiting for free-text skills.
    #[default]
    Skills,
    /// Waiting for "did this match?".
    Feedback,
    /// Waiting for "see another suggestion?".
    Another,
    /// Waiting for "add more skills?".
    Improve,
}

/// Classified answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Affirm,
    Deny,
    Unrecognized,
}

impl Reply {
    /// Case-insensitive, surrounding whitespace ignored. Anything other than
    /// exactly "yes" or "no" is `Unrecognized`.
    pub fn classify(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "yes" => Reply::Affirm,
            "no" => Reply::Deny,
            _ => Reply::Unrecognized,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DialogueSession {
    pub id: String,
    pub step: Step,
    pub last_recommendations: Vec<Recommendation>,
}

impl DialogueSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            step: Step::default(),
            last_recommendations: Vec::new(),
        }
    }

    /// Applies exactly one transition and returns the outgoing messages
    /// (always at least one).
    pub fn advance(&mut self, mode: Mode, input: &str, recommender: &Recommender) -> Vec<String> {
        let reply = Reply::classify(input);
        let (next, message) = match self.step {
            Step::Skills => {
                self.last_recommendations = recommender.recommend(input);
                self.step = Step::Feedback;
                return vec![
                    compose(&self.last_recommendations, mode),
                    FEEDBACK_PROMPT.to_string(),
                ];
            }
            Step::Feedback => match reply {
                Reply::Affirm => (Step::Skills, MATCH_ACKNOWLEDGED.to_string()),
                Reply::Deny if self.last_recommendations.len() > 1 => {
                    (Step::Another, ANOTHER_PROMPT.to_string())
                }
                Reply::Deny => (Step::Improve, IMPROVE_PROMPT.to_string()),
                Reply::Unrecognized => (Step::Feedback, YES_NO_REPROMPT.to_string()),
            },
            Step::Another => match reply {
                // Always the second-ranked job; asking again never walks further down.
                Reply::Affirm => match self.last_recommendations.get(1) {
                    Some(second) => (Step::Skills, compose_alternative(second)),
                    None => (Step::Skills, ENTER_MORE_SKILLS.to_string()),
                },
                Reply::Deny => (Step::Improve, IMPROVE_PROMPT.to_string()),
                Reply::Unrecognized => (Step::Another, YES_NO_REPROMPT.to_string()),
            },
            Step::Improve => match reply {
                Reply::Affirm => (Step::Skills, ENTER_MORE_SKILLS.to_string()),
                Reply::Deny => (Step::Skills, CLOSING_THANKS.to_string()),
                Reply::Unrecognized => (Step::Improve, YES_NO_REPROMPT.to_string()),
            },
        };

        self.step = next;
        vec![message]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::catalog::Catalog;
    use crate::matching::composer::NO_MATCH_REPLY;
    use crate::matching::extractor::SkillExtractor;

    fn recommender() -> Recommender {
        Recommender::new(Arc::new(Catalog::builtin_default()), SkillExtractor::default())
    }

    fn session_at(step: Step, recs_for: &str) -> DialogueSession {
        let mut session = DialogueSession::new("s1");
        session.last_recommendations = recommender().recommend(recs_for);
        session.step = step;
        session
    }

    #[test]
    fn test_classify_reply() {
        assert_eq!(Reply::classify("yes"), Reply::Affirm);
        assert_eq!(Reply::classify("  YES "), Reply::Affirm);
        assert_eq!(Reply::classify("No"), Reply::Deny);
        assert_eq!(Reply::classify("yeah"), Reply::Unrecognized);
        assert_eq!(Reply::classify(""), Reply::Unrecognized);
    }

    #[test]
    fn test_new_session_starts_at_skills() {
        let session = DialogueSession::new("abc");
        assert_eq!(session.step, Step::Skills);
        assert!(session.last_recommendations.is_empty());
    }

    #[test]
    fn test_skills_step_emits_reply_and_feedback_prompt() {
        let mut session = DialogueSession::new("s1");
        let out = session.advance(Mode::Chatty, "I know python and sql", &recommender());
        assert_eq!(out.len(), 2);
        assert!(out[0].contains("Data Analyst"));
        assert!(out[0].contains("ABC Corp"));
        assert_eq!(out[1], FEEDBACK_PROMPT);
        assert_eq!(session.step, Step::Feedback);
        assert_eq!(session.last_recommendations.len(), 2);
    }

    #[test]
    fn test_skills_step_with_empty_text_apologizes() {
        for mode in [Mode::Chatty, Mode::Compact] {
            let mut session = DialogueSession::new("s1");
            let out = session.advance(mode, "", &recommender());
            assert_eq!(out, vec![NO_MATCH_REPLY.to_string(), FEEDBACK_PROMPT.to_string()]);
            assert_eq!(session.step, Step::Feedback);
            assert!(session.last_recommendations.is_empty());
        }
    }

    #[test]
    fn test_skills_text_yes_is_treated_as_skills() {
        let mut session = DialogueSession::new("s1");
        let out = session.advance(Mode::Chatty, "yes", &recommender());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], NO_MATCH_REPLY);
        assert_eq!(session.step, Step::Feedback);
    }

    #[test]
    fn test_compact_skills_reply() {
        let mut session = DialogueSession::new("s1");
        let out = session.advance(Mode::Compact, "python sql", &recommender());
        assert!(out[0].starts_with("Top matches:"));
    }

    #[test]
    fn test_feedback_yes_acknowledges() {
        let mut session = session_at(Step::Feedback, "python sql");
        let out = session.advance(Mode::Chatty, "Yes", &recommender());
        assert_eq!(out, vec![MATCH_ACKNOWLEDGED.to_string()]);
        assert_eq!(session.step, Step::Skills);
    }

    #[test]
    fn test_feedback_no_with_several_offers_another() {
        let mut session = session_at(Step::Feedback, "python sql");
        let out = session.advance(Mode::Chatty, "no", &recommender());
        assert_eq!(out, vec![ANOTHER_PROMPT.to_string()]);
        assert_eq!(session.step, Step::Another);
    }

    #[test]
    fn test_feedback_no_with_single_recommendation_offers_improve() {
        let mut session = session_at(Step::Feedback, "html");
        assert_eq!(session.last_recommendations.len(), 1);
        let out = session.advance(Mode::Chatty, "no", &recommender());
        assert_eq!(out, vec![IMPROVE_PROMPT.to_string()]);
        assert_eq!(session.step, Step::Improve);
    }

    #[test]
    fn test_feedback_no_with_zero_recommendations_offers_improve() {
        let mut session = session_at(Step::Feedback, "");
        let out = session.advance(Mode::Chatty, "no", &recommender());
        assert_eq!(out, vec![IMPROVE_PROMPT.to_string()]);
        assert_eq!(session.step, Step::Improve);
    }

    #[test]
    fn test_invalid_answers_never_move_the_step() {
        for step in [Step::Feedback, Step::Another, Step::Improve] {
            let mut session = session_at(step, "python sql");
            for input in ["maybe", "", "y", "nope", "python"] {
                let out = session.advance(Mode::Chatty, input, &recommender());
                assert_eq!(out, vec![YES_NO_REPROMPT.to_string()]);
                assert_eq!(session.step, step);
            }
        }
    }

    #[test]
    fn test_another_yes_names_second_recommendation() {
        let mut session = session_at(Step::Another, "python sql");
        let second = session.last_recommendations[1].clone();
        let out = session.advance(Mode::Chatty, "yes", &recommender());
        assert_eq!(out.len(), 1);
        assert!(out[0].contains(&second.job.title));
        assert!(out[0].contains(&second.job.company));
        assert_eq!(session.step, Step::Skills);
    }

    #[test]
    fn test_another_yes_always_uses_index_one() {
        let mut session = session_at(Step::Another, "python sql html");
        assert_eq!(session.last_recommendations.len(), 3);
        let expected = compose_alternative(&session.last_recommendations[1]);

        let first = session.advance(Mode::Chatty, "yes", &recommender());
        session.step = Step::Another;
        let again = session.advance(Mode::Chatty, "yes", &recommender());
        assert_eq!(first, vec![expected.clone()]);
        assert_eq!(again, vec![expected]);
    }

    #[test]
    fn test_another_no_offers_improve() {
        let mut session = session_at(Step::Another, "python sql");
        let out = session.advance(Mode::Chatty, "NO", &recommender());
        assert_eq!(out, vec![IMPROVE_PROMPT.to_string()]);
        assert_eq!(session.step, Step::Improve);
    }

    #[test]
    fn test_improve_yes_asks_for_more_skills() {
        let mut session = session_at(Step::Improve, "html");
        let out = session.advance(Mode::Chatty, "yes", &recommender());
        assert_eq!(out, vec![ENTER_MORE_SKILLS.to_string()]);
        assert_eq!(session.step, Step::Skills);
    }

    #[test]
    fn test_improve_no_closes_and_cycles_back() {
        let mut session = session_at(Step::Improve, "html");
        let out = session.advance(Mode::Chatty, "no", &recommender());
        assert_eq!(out, vec![CLOSING_THANKS.to_string()]);
        assert_eq!(session.step, Step::Skills);
    }

    #[test]
    fn test_full_cycle_returns_to_skills() {
        let r = recommender();
        let mut session = DialogueSession::new("s1");
        session.advance(Mode::Chatty, "python and sql", &r);
        session.advance(Mode::Chatty, "no", &r);
        assert_eq!(session.step, Step::Another);
        session.advance(Mode::Chatty, "no", &r);
        assert_eq!(session.step, Step::Improve);
        session.advance(Mode::Chatty, "yes", &r);
        assert_eq!(session.step, Step::Skills);
        let out = session.advance(Mode::Chatty, "css", &r);
        assert!(out[0].contains("Web Developer"));
        assert_eq!(session.step, Step::Feedback);
    }
}
