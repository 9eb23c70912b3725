//! Job matching: ranks catalog jobs by overlap with the extracted skills.

use serde::Serialize;

use crate::catalog::{JobListing, SkillSet};

/// A job paired with the subset of its required skills the user has.
/// Derived per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub job: JobListing,
    pub matched_skills: SkillSet,
    pub match_count: usize,
}

/// Returns every job with a non-empty overlap, best first.
///
/// Sorted by `match_count` descending. `sort_by` is stable, so jobs with
/// equal counts keep their catalog order. An empty result is a normal
/// outcome, not an error.
pub fn match_jobs(extracted: &SkillSet, jobs: &[JobListing]) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = jobs
        .iter()
        .filter_map(|job| {
            let matched_skills = extracted.intersection(&job.required_skills);
            if matched_skills.is_empty() {
                return None;
            }
            Some(Recommendation {
                job: job.clone(),
                match_count: matched_skills.len(),
                matched_skills,
            })
        })
        .collect();

    recommendations.sort_by(|a, b| b.match_count.cmp(&a.match_count));
    recommendations
}
