//! Plan command - build a course plan by toggling courses in order

use clap::Args;
use courseplan_core::{Catalog, Config, Selection, ToggleOutcome};

use super::{load_catalog, meets_label};

/// Toggle courses into a plan, refusing conflicting selections
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Course ids to toggle, applied left to right
    #[arg(required = true)]
    pub ids: Vec<String>,
}

impl PlanArgs {
    /// Execute the plan command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let catalog = load_catalog(&config.catalog_path()).await?;

        let (selection, outcomes) = build_selection(&self.ids, &catalog);

        for (id, outcome) in &outcomes {
            println!("{}", describe_outcome(id, outcome));
        }
        println!();

        if verbose {
            tracing::info!(
                requested = self.ids.len(),
                selected = selection.len(),
                "Plan built"
            );
        }

        print_plan(&selection, &catalog, config);
        Ok(())
    }
}

/// Apply each id to an empty selection in order
///
/// Returns the final selection and the outcome of every request.
pub fn build_selection<'a>(
    ids: &'a [String],
    catalog: &Catalog,
) -> (Selection, Vec<(&'a str, ToggleOutcome)>) {
    let mut selection = Selection::new();
    let outcomes = ids
        .iter()
        .map(|id| (id.as_str(), selection.request(id, catalog)))
        .collect();
    (selection, outcomes)
}

/// One-line summary of a toggle request
pub fn describe_outcome(id: &str, outcome: &ToggleOutcome) -> String {
    match outcome {
        ToggleOutcome::Added => format!("  ✅ {} added", id),
        ToggleOutcome::Removed => format!("  ➖ {} removed", id),
        ToggleOutcome::Blocked { conflicts } => {
            format!("  ❌ {} conflicts with {}", id, conflicts.join(", "))
        }
        ToggleOutcome::Unknown => format!("  ❓ {} is not in the catalog", id),
    }
}

/// Print the selected courses as an ID / Title / Meets table
pub fn print_plan(selection: &Selection, catalog: &Catalog, config: &Config) {
    println!("Your Course Plan ({})", selection.len());
    println!("================");
    println!();

    let entries: Vec<_> = selection.plan_entries(catalog).collect();
    if entries.is_empty() {
        println!("No courses selected yet.");
        println!("  - Choose a term with `courseplan list --term <TERM>`.");
        println!("  - Pass course ids to `courseplan plan` to add them to your plan.");
        return;
    }

    let id_width = entries
        .iter()
        .map(|(id, _)| id.len())
        .max()
        .unwrap_or(0)
        .max(2);
    let title_width = entries
        .iter()
        .map(|(_, course)| course.title.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    println!(
        "  {:<id_width$}  {:<title_width$}  Meets",
        "ID", "Title"
    );
    for (id, course) in entries {
        println!(
            "  {:<id_width$}  {:<title_width$}  {}",
            id,
            course.title,
            meets_label(course, config)
        );
    }
}
