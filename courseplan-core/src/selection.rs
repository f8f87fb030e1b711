//! The user's course plan
//!
//! A [`Selection`] is a set of course ids owned by the caller. The schedule
//! engine only reads it; changes go through [`Selection::toggle`] or the
//! conflict-aware [`Selection::request`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::course::{Catalog, Course};
use crate::schedule::conflicting_courses;

/// Outcome of asking to toggle a course in the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The course was added to the plan
    Added,
    /// The course was already selected and has been removed
    Removed,
    /// The course conflicts with these selected courses and was not added
    Blocked { conflicts: Vec<String> },
    /// The course id is not in the catalog
    Unknown,
}

impl ToggleOutcome {
    /// Whether the selection changed
    pub fn changed(&self) -> bool {
        matches!(self, ToggleOutcome::Added | ToggleOutcome::Removed)
    }
}

/// Set of selected course ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeSet<String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate selected ids in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Insert the id if absent, remove it if present
    ///
    /// Returns `true` if the id is selected afterwards.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    /// Toggle `id`, refusing additions that are unknown or would conflict
    ///
    /// Removing a selected course is never refused.
    pub fn request(&mut self, id: &str, catalog: &Catalog) -> ToggleOutcome {
        if self.contains(id) {
            self.0.remove(id);
            debug!(id, "Course removed from plan");
            return ToggleOutcome::Removed;
        }

        if !catalog.contains(id) {
            debug!(id, "Refusing unknown course");
            return ToggleOutcome::Unknown;
        }

        let conflicts: Vec<String> = conflicting_courses(id, catalog, self)
            .into_iter()
            .map(str::to_string)
            .collect();
        if !conflicts.is_empty() {
            debug!(id, conflicts = ?conflicts, "Refusing conflicting course");
            return ToggleOutcome::Blocked { conflicts };
        }

        self.0.insert(id.to_string());
        debug!(id, "Course added to plan");
        ToggleOutcome::Added
    }

    /// Selected courses that exist in the catalog, in id order
    pub fn plan_entries<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (&'a str, &'a Course)> {
        self.iter()
            .filter_map(move |id| catalog.get(id).map(|course| (id, course)))
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for Selection {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}
