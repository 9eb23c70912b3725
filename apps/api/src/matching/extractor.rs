//! Skill extraction: maps free text onto the catalog's known skill tokens.

use std::sync::Arc;

use tracing::warn;

use crate::catalog::SkillSet;
use crate::matching::tokenizer::{Chunker, HeuristicChunker};

/// Pulls known skills out of free text.
///
/// Both noun phrases and single words are checked against the vocabulary and
/// the hits are unioned, so a single-word skill is found by either path.
/// Matching is exact after normalization: no stemming, no fuzzy matches.
#[derive(Clone)]
pub struct SkillExtractor {
    chunker: Arc<dyn Chunker>,
}

impl SkillExtractor {
    pub fn new(chunker: Arc<dyn Chunker>) -> Self {
        Self { chunker }
    }

    /// Never fails: a tokenizer error degrades to "no skills found".
    pub fn extract(&self, text: &str, known_skills: &SkillSet) -> SkillSet {
        let mut skills = SkillSet::new();
        if text.trim().is_empty() {
            return skills;
        }

        let tokens = match self.chunker.tokenize(text) {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!("Skill extraction degraded to empty set: {e}");
                return skills;
            }
        };

        for candidate in tokens.noun_phrases.iter().chain(tokens.words.iter()) {
            let candidate = SkillSet::normalize(candidate);
            if known_skills.contains(&candidate) {
                skills.insert(&candidate);
            }
        }
        skills
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new(Arc::new(HeuristicChunker))
    }
}
