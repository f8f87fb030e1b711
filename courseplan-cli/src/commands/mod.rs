//! CLI command implementations

pub mod check;
pub mod edit;
pub mod list;
pub mod meets;
pub mod plan;

pub use check::CheckArgs;
pub use edit::EditArgs;
pub use list::ListArgs;
pub use meets::MeetsArgs;
pub use plan::PlanArgs;

use std::path::Path;

use anyhow::Context;
use courseplan_core::{Catalog, Config, Course};

/// Read and parse the catalog document at `path`
pub async fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_json_str(&contents)
        .with_context(|| format!("Failed to load catalog {}", path.display()))?;

    tracing::debug!(path = %path.display(), courses = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

/// Write the catalog document to `path`
pub async fn save_catalog(catalog: &Catalog, path: &Path) -> anyhow::Result<()> {
    let contents = catalog.to_json_string()?;
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write catalog {}", path.display()))?;

    tracing::debug!(path = %path.display(), "Catalog saved");
    Ok(())
}

/// Meeting text for display, using the configured label when unscheduled
pub fn meets_label<'a>(course: &'a Course, config: &'a Config) -> &'a str {
    if course.is_unscheduled() {
        &config.display.unscheduled_label
    } else {
        course.meets.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_meets_label() {
        let config = Config::default();
        let scheduled = Course::new("Fall", "101", "MWF 9:00-9:50", "Intro");
        let unscheduled = Course::new("Fall", "399", "  ", "Independent Study");

        assert_eq!(meets_label(&scheduled, &config), "MWF 9:00-9:50");
        assert_eq!(meets_label(&unscheduled, &config), "TBA");
    }

    #[tokio::test]
    async fn test_save_then_load_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("courses.json");

        let mut catalog = Catalog::new().with_title("Test Catalog");
        catalog.insert("F101", Course::new("Fall", "101", "MWF 9:00-9:50", "Intro"));

        save_catalog(&catalog, &path).await.unwrap();
        let loaded = load_catalog(&path).await.unwrap();

        assert_eq!(loaded, catalog);
    }

    #[tokio::test]
    async fn test_load_missing_catalog() {
        let dir = TempDir::new().unwrap();
        let err = load_catalog(&dir.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }
}
