#![allow(dead_code)]

//! Tokenizer / phrase-chunker seam.
//!
//! The extractor only needs two views of the same text: candidate noun
//! phrases and individual words. `HeuristicChunker` is the built-in backend;
//! a real NLP service can be plugged in behind `Chunker`.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenizedText {
    pub noun_phrases: Vec<String>,
    pub words: Vec<String>,
}

#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("tokenizer backend failed: {0}")]
    Backend(String),
}

pub trait Chunker: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<TokenizedText, TokenizeError>;
}

/// Words that never belong inside a skill phrase. A phrase is cut at each one.
const PHRASE_BREAKERS: &[&str] = &[
    "i", "me", "my", "we", "our", "you", "your", "he", "she", "they", "it", "a", "an", "the",
    "and", "or", "but", "also", "plus", "as", "well", "am", "is", "are", "was", "were", "be",
    "been", "do", "does", "did", "can", "know", "knows", "known", "have", "has", "had", "use",
    "used", "using", "like", "love", "with", "in", "of", "on", "at", "to", "for", "from", "by",
    "some", "good", "great", "strong", "basic", "experience", "experienced", "skilled",
    "familiar", "proficient", "skills", "skill", "years", "year",
];

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    // A word may carry inner '.'/'-' joins (node.js, scikit-learn) and
    // trailing '+'/'#' (c++, c#). Sentence-final periods are not captured.
    WORD.get_or_init(|| {
        Regex::new(r"[\p{L}\p{N}_]+(?:[.\-][\p{L}\p{N}_]+)*[+#]*").expect("word pattern is valid")
    })
}

/// Regex-driven tokenizer with a stopword-delimited phrase chunker.
///
/// Noun phrases are the maximal runs of consecutive words that contain no
/// breaker word and no punctuation between them: "I know machine learning,
/// and SQL" yields the phrases `["machine learning", "SQL"]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicChunker;

impl Chunker for HeuristicChunker {
    fn tokenize(&self, text: &str) -> Result<TokenizedText, TokenizeError> {
        let mut words = Vec::new();
        let mut noun_phrases = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut last_end = 0;

        for m in word_pattern().find_iter(text) {
            let word = m.as_str();
            let gap = &text[last_end..m.start()];
            last_end = m.end();
            words.push(word.to_string());

            if gap.chars().any(|c| !c.is_whitespace()) {
                flush_phrase(&mut current, &mut noun_phrases);
            }

            if PHRASE_BREAKERS.contains(&word.to_lowercase().as_str()) {
                flush_phrase(&mut current, &mut noun_phrases);
            } else {
                current.push(word);
            }
        }
        flush_phrase(&mut current, &mut noun_phrases);

        Ok(TokenizedText {
            noun_phrases,
            words,
        })
    }
}

fn flush_phrase(current: &mut Vec<&str>, phrases: &mut Vec<String>) {
    if !current.is_empty() {
        phrases.push(current.join(" "));
        current.clear();
    }
}
