//! Edit command - update a course record in the catalog

use clap::Args;
use courseplan_core::{Config, Course, CoursePatch, EditOutcome, Error};

use super::{load_catalog, save_catalog};

/// Edit a course record, validating the result before saving
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Course id to edit
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New term (Fall, Winter, Spring or Summer)
    #[arg(long)]
    pub term: Option<String>,

    /// New course number, e.g. "213" or "213-2"
    #[arg(long)]
    pub number: Option<String>,

    /// New meeting time, e.g. "MWF 12:00-13:20"; pass "" to unschedule
    #[arg(long)]
    pub meets: Option<String>,

    /// Show the change without writing the catalog
    #[arg(long)]
    pub dry_run: bool,
}

impl EditArgs {
    fn patch(&self) -> CoursePatch {
        CoursePatch {
            title: self.title.clone(),
            term: self.term.clone(),
            number: self.number.clone(),
            meets: self.meets.clone(),
        }
    }

    /// Execute the edit command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let path = config.catalog_path();
        let mut catalog = load_catalog(&path).await?;

        let patch = self.patch();
        if patch.is_empty() {
            anyhow::bail!("Nothing to change. Pass at least one of --title, --term, --number, --meets");
        }

        let previous = match catalog.edit(&self.id, &patch) {
            Ok(EditOutcome::Unchanged) => {
                println!("No changes to {}.", self.id);
                return Ok(());
            }
            Ok(EditOutcome::Updated { previous }) => previous,
            Err(Error::Validation(errors)) => {
                println!("Course {} was not changed:", self.id);
                for err in &errors {
                    println!("  ❌ {}", err);
                }
                anyhow::bail!("{} field(s) failed validation", errors.len());
            }
            Err(e) => return Err(e.into()),
        };

        let Some(current) = catalog.get(&self.id) else {
            anyhow::bail!("Course {} disappeared while editing", self.id);
        };

        println!("Edit Course: {}", self.id);
        for line in describe_changes(&previous, current) {
            println!("  {}", line);
        }

        if self.dry_run {
            println!();
            println!("[Dry run] Catalog not written");
            return Ok(());
        }

        save_catalog(&catalog, &path).await?;
        if verbose {
            tracing::info!(id = %self.id, path = %path.display(), "Catalog updated");
        }
        println!();
        println!("Saved {}", path.display());

        Ok(())
    }
}

/// `field: old -> new` lines for every field that differs
pub fn describe_changes(before: &Course, after: &Course) -> Vec<String> {
    let fields = [
        ("title", before.title.as_str(), after.title.as_str()),
        ("term", before.term.as_str(), after.term.as_str()),
        ("number", before.number.as_str(), after.number.as_str()),
        ("meets", before.meets.as_str(), after.meets.as_str()),
    ];

    fields
        .into_iter()
        .filter(|(_, old, new)| old != new)
        .map(|(name, old, new)| format!("{}: {:?} -> {:?}", name, old, new))
        .collect()
}
