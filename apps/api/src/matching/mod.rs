// Recommendation engine: free text -> known skills -> ranked jobs -> reply text.
// Pure, synchronous computation over the read-only catalog.

pub mod composer;
pub mod extractor;
pub mod matcher;
pub mod tokenizer;

use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::matching::extractor::SkillExtractor;
use crate::matching::matcher::{match_jobs, Recommendation};

/// Extractor + matcher bound to one catalog. Cheap to clone.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    extractor: SkillExtractor,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, extractor: SkillExtractor) -> Self {
        Self { catalog, extractor }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recommend(&self, text: &str) -> Vec<Recommendation> {
        let skills = self.extractor.extract(text, &self.catalog.known_skills);
        let recommendations = match_jobs(&skills, &self.catalog.jobs);
        debug!(
            "Extracted [{}] -> {} recommendations",
            skills.join(", "),
            recommendations.len()
        );
        recommendations
    }
}
