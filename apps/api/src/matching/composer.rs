//! Response composition: renders a recommendation list as reply text.
//!
//! Pure functions of their inputs; no session state is consulted.

use crate::matching::matcher::Recommendation;
use crate::models::mode::Mode;

/// Reply used whenever there is nothing to recommend, in either mode.
pub const NO_MATCH_REPLY: &str =
    "Sorry, I couldn't find any matching jobs. Try listing more skills or being more specific.";

/// Header line of the compact listing.
pub const COMPACT_HEADER: &str = "Top matches:";

/// Maximum number of jobs listed in compact mode.
pub const COMPACT_LIMIT: usize = 5;

pub fn compose(recommendations: &[Recommendation], mode: Mode) -> String {
    let Some(top) = recommendations.first() else {
        return NO_MATCH_REPLY.to_string();
    };

    match mode {
        Mode::Chatty => {
            let mut reply = format!(
                "Based on your skills in {}, you'd be a great fit for the {} role at {}.",
                top.matched_skills.join(", "),
                top.job.title,
                top.job.company
            );
            if let Some(second) = recommendations.get(1) {
                reply.push_str(&format!(
                    " You might also check out the {} role at {}.",
                    second.job.title, second.job.company
                ));
            }
            reply
        }
        Mode::Compact => {
            let lines: Vec<String> = recommendations
                .iter()
                .take(COMPACT_LIMIT)
                .map(|rec| {
                    format!(
                        "{} at {} ({} skills matched)",
                        rec.job.title, rec.job.company, rec.match_count
                    )
                })
                .collect();
            format!("{COMPACT_HEADER}\n{}", lines.join("\n"))
        }
    }
}

/// Follow-up sentence offering one more recommendation.
pub fn compose_alternative(rec: &Recommendation) -> String {
    format!(
        "You might also want to check out the {} role at {}, which values skills like {}.",
        rec.job.title,
        rec.job.company,
        rec.matched_skills.join(", ")
    )
}
