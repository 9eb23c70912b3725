//! Skill catalog: the known skill vocabulary plus the job listings.
//!
//! Loaded once at startup and read-only afterwards. A source that cannot be
//! read never fails startup: the built-in default catalog takes its place.

pub mod skills;
pub mod source;

pub use skills::SkillSet;
pub use source::{CatalogSource, CsvCatalogSource, JobRow};

use serde::Serialize;
use tracing::{info, warn};

/// Vocabulary used when the catalog source cannot be loaded.
pub const DEFAULT_SKILLS: &[&str] = &["python", "sql", "excel", "javascript", "html", "css"];

/// Job listings used when the catalog source cannot be loaded:
/// `(title, company, comma-separated skills)`.
pub const DEFAULT_JOBS: &[(&str, &str, &str)] = &[
    ("Data Analyst", "ABC Corp", "python, sql, excel"),
    ("Web Developer", "TechSoft", "html, css, javascript"),
    ("ML Engineer", "AI Labs", "python, machine learning"),
];

/// A job as loaded from the catalog. Identity is the `(title, company)` pair,
/// which is not enforced to be unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub required_skills: SkillSet,
}

impl From<JobRow> for JobListing {
    fn from(row: JobRow) -> Self {
        JobListing {
            required_skills: SkillSet::parse_list(&row.skills),
            title: row.title,
            company: row.company,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub known_skills: SkillSet,
    pub jobs: Vec<JobListing>,
}

impl Catalog {
    /// Builds a catalog from raw rows. The known vocabulary is the union of
    /// every job's required skills.
    pub fn from_rows(rows: Vec<JobRow>) -> Self {
        let jobs: Vec<JobListing> = rows.into_iter().map(JobListing::from).collect();
        let mut known_skills = SkillSet::new();
        for job in &jobs {
            known_skills.union_with(&job.required_skills);
        }
        Catalog { known_skills, jobs }
    }

    /// The fixed fallback catalog. Its vocabulary is `DEFAULT_SKILLS`, not the
    /// union of the default jobs, so "machine learning" is not extractable here.
    pub fn builtin_default() -> Self {
        Catalog {
            known_skills: DEFAULT_SKILLS.iter().copied().collect(),
            jobs: DEFAULT_JOBS
                .iter()
                .map(|(title, company, skills)| JobListing {
                    title: title.to_string(),
                    company: company.to_string(),
                    required_skills: SkillSet::parse_list(skills),
                })
                .collect(),
        }
    }

    /// Loads from `source`, falling back to `builtin_default` on any failure.
    pub fn load(source: &dyn CatalogSource) -> Self {
        match source.load_rows() {
            Ok(rows) => {
                let catalog = Catalog::from_rows(rows);
                info!(
                    "Catalog loaded from {}: {} jobs, {} known skills",
                    source.describe(),
                    catalog.jobs.len(),
                    catalog.known_skills.len()
                );
                catalog
            }
            Err(e) => {
                warn!(
                    "Catalog source {} unavailable ({e}); using built-in default catalog",
                    source.describe()
                );
                Catalog::builtin_default()
            }
        }
    }
}
