//! List command - show a term's courses and whether each can be selected

use clap::Args;
use courseplan_core::{conflicting_courses, Catalog, Config, Selection, Term, ToggleOutcome};

use super::plan::{build_selection, describe_outcome};
use super::{load_catalog, meets_label};

/// List the courses offered in a term
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Term to list, case-insensitive (defaults to the configured term)
    #[arg(short, long, value_parser = parse_term)]
    pub term: Option<Term>,

    /// Course ids already in the plan
    #[arg(short, long = "select", value_name = "ID")]
    pub selected: Vec<String>,
}

fn parse_term(s: &str) -> Result<Term, std::convert::Infallible> {
    s.parse()
}

/// How a course is shown relative to the current plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseStatus {
    Selected,
    Available,
    Blocked(Vec<String>),
}

impl CourseStatus {
    pub fn of(id: &str, catalog: &Catalog, selection: &Selection) -> Self {
        if selection.contains(id) {
            return CourseStatus::Selected;
        }

        let conflicts = conflicting_courses(id, catalog, selection);
        if conflicts.is_empty() {
            CourseStatus::Available
        } else {
            CourseStatus::Blocked(conflicts.into_iter().map(str::to_string).collect())
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            CourseStatus::Selected => "[x]",
            CourseStatus::Available => "[ ]",
            CourseStatus::Blocked(_) => "[!]",
        }
    }
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let catalog = load_catalog(&config.catalog_path()).await?;
        let term = self
            .term
            .clone()
            .unwrap_or_else(|| config.display.default_term.clone());

        let (selection, outcomes) = build_selection(&self.selected, &catalog);
        for (id, outcome) in &outcomes {
            // Only refused or repeated selections are worth mentioning here
            if *outcome != ToggleOutcome::Added {
                println!("{}", describe_outcome(id, outcome));
            }
        }

        if let Some(title) = catalog.title() {
            println!("{}", title);
            println!();
        }

        let courses: Vec<_> = catalog.in_term(&term).collect();
        if verbose {
            tracing::info!(
                term = %term,
                courses = courses.len(),
                selected = selection.len(),
                "Listing courses"
            );
        }

        if courses.is_empty() {
            println!("No courses found for {}.", term);
            return Ok(());
        }

        println!("{} ({} courses)", term, courses.len());
        println!();

        let id_width = courses.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
        for (id, course) in courses {
            let status = CourseStatus::of(id, &catalog, &selection);
            println!(
                "  {} {:<id_width$}  {} - {}  ({})",
                status.marker(),
                id,
                course.number,
                course.title,
                meets_label(course, config)
            );
            if let CourseStatus::Blocked(conflicts) = &status {
                println!(
                    "      {:<id_width$}  conflicts with {}",
                    "",
                    conflicts.join(", ")
                );
            }
        }

        println!();
        println!("Course Plan: {} selected", selection.len());

        Ok(())
    }
}
