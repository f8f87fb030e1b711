//! Check command - explain whether two catalog courses conflict

use clap::Args;
use courseplan_core::schedule::{days_overlap, times_overlap};
use courseplan_core::{courses_conflict, parse_meeting, Config, Course};

use super::load_catalog;

/// Check whether two courses can both be taken
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// First course id
    pub first: String,

    /// Second course id
    pub second: String,
}

impl CheckArgs {
    /// Execute the check command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let catalog = load_catalog(&config.catalog_path()).await?;

        let a = catalog
            .get(&self.first)
            .ok_or_else(|| anyhow::anyhow!("Course {} not found", self.first))?;
        let b = catalog
            .get(&self.second)
            .ok_or_else(|| anyhow::anyhow!("Course {} not found", self.second))?;

        let verdict = if courses_conflict(a, b) {
            "❌ conflict"
        } else {
            "✅ no conflict"
        };
        println!("{} / {}: {}", self.first, self.second, verdict);
        println!("  {}", explain(a, b));

        Ok(())
    }
}

/// The deciding reason behind a conflict verdict
pub fn explain(a: &Course, b: &Course) -> String {
    if a.term.as_str() != b.term.as_str() {
        return format!("offered in different terms ({} vs {})", a.term, b.term);
    }

    let (am, bm) = match (parse_meeting(&a.meets), parse_meeting(&b.meets)) {
        (Some(am), Some(bm)) => (am, bm),
        _ => return "at least one course has no fixed meeting time".to_string(),
    };

    match (days_overlap(am.days(), bm.days()), times_overlap(&am, &bm)) {
        (true, true) => format!("{} overlaps {}", am, bm),
        (false, _) => "meets on different days".to_string(),
        (true, false) => "meets at different times on shared days".to_string(),
    }
}
