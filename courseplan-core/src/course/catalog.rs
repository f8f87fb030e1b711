//! Course catalog loading, lookup and editing
//!
//! A catalog document is JSON in one of two shapes:
//!
//! ```json
//! { "title": "CS Courses for 2018-2019", "courses": { "F101": { ... } } }
//! ```
//!
//! or a bare map of course id to course record. Saving always writes the
//! first shape.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::types::{Course, CoursePatch, Term};
use crate::validate::validate_course;
use crate::{Error, Result};

/// Result of editing a course
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The normalized record was identical to the stored one; nothing changed
    Unchanged,
    /// The record was replaced; holds the previous value
    Updated { previous: Course },
}

/// All known courses keyed by course id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    title: Option<String>,
    courses: BTreeMap<String, Course>,
}

#[derive(Serialize)]
struct CatalogDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    courses: &'a BTreeMap<String, Course>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog's display title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Display title from the catalog document, if any
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Add or replace a course, returning the previous record
    pub fn insert(&mut self, id: impl Into<String>, course: Course) -> Option<Course> {
        self.courses.insert(id.into(), course)
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.courses.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Iterate courses in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Course)> {
        self.courses.iter().map(|(id, course)| (id.as_str(), course))
    }

    /// Courses offered in `term`, in id order
    pub fn in_term(&self, term: &Term) -> impl Iterator<Item = (&str, &Course)> {
        let term = term.clone();
        self.iter()
            .filter(move |(_, course)| course.term.as_str() == term.as_str())
    }

    /// Apply a patch after strict validation
    ///
    /// Patch values are trimmed before validation, so `" X"` is checked as
    /// the one-character title `"X"` and `" MWF 9:00-9:50"` is accepted.
    /// The record is only replaced when the normalized result differs from
    /// the normalized stored record.
    pub fn edit(&mut self, id: &str, patch: &CoursePatch) -> Result<EditOutcome> {
        let course = self
            .courses
            .get_mut(id)
            .ok_or_else(|| Error::CourseNotFound(id.to_string()))?;

        let updated = patch.apply(course);
        validate_course(&updated).map_err(Error::Validation)?;

        if updated == course.normalized() {
            debug!(id, "Edit left course unchanged");
            return Ok(EditOutcome::Unchanged);
        }

        let previous = std::mem::replace(course, updated);
        info!(id, "Course updated");
        Ok(EditOutcome::Updated { previous })
    }

    /// Parse a catalog document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a catalog from an already-parsed JSON document
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut root) = value else {
            return Err(Error::Catalog(
                "Unexpected data shape: expected a JSON object".to_string(),
            ));
        };

        let (title, entries) = match root.remove("courses") {
            Some(Value::Object(courses)) => {
                let title = match root.remove("title") {
                    Some(Value::String(title)) => Some(title),
                    _ => None,
                };
                (title, courses)
            }
            Some(_) => {
                return Err(Error::Catalog(
                    "Unexpected data shape: \"courses\" is not an object".to_string(),
                ))
            }
            None => {
                if root.is_empty() || !root.values().all(Value::is_object) {
                    return Err(Error::Catalog(
                        "Unexpected data shape: missing \"courses\"".to_string(),
                    ));
                }
                (None, root)
            }
        };

        let mut courses = BTreeMap::new();
        for (id, entry) in entries {
            if !entry.is_object() {
                warn!(id = %id, "Skipping course entry that is not an object");
                continue;
            }
            courses.insert(id, serde_json::from_value::<Course>(entry)?);
        }
        debug!(courses = courses.len(), title = ?title, "Catalog parsed");

        Ok(Self { title, courses })
    }

    /// Serialize the catalog as a pretty-printed document
    pub fn to_json_string(&self) -> Result<String> {
        let doc = CatalogDocument {
            title: self.title.as_deref(),
            courses: &self.courses,
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

impl FromIterator<(String, Course)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Course)>>(iter: I) -> Self {
        Self {
            title: None,
            courses: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CATALOG: &str = r#"{
  "title": "CS Courses for 2018-2019",
  "courses": {
    "F101": { "term": "Fall", "number": "101", "meets": "MWF 11:00-11:50", "title": "Computer Science: Concepts, Philosophy, and Connections" },
    "F110": { "term": "Fall", "number": "110", "meets": "MWF 10:00-10:50", "title": "Intro Programming for non-majors" },
    "S313": { "term": "Spring", "number": "313", "meets": "TuTh 15:30-16:50", "title": "Tomography: Mathematical Foundations" },
    "W213": { "term": "Winter", "number": 213, "meets": null, "title": "Intro to Computer Systems" }
  }
}"#;

    #[test]
    fn test_parse_catalog_with_title() {
        let catalog = Catalog::from_json_str(SAMPLE_CATALOG).unwrap();
        assert_eq!(catalog.title(), Some("CS Courses for 2018-2019"));
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("F110").unwrap().number, "110");
    }

    #[test]
    fn test_parse_coerces_loose_fields() {
        let catalog = Catalog::from_json_str(SAMPLE_CATALOG).unwrap();
        let course = catalog.get("W213").unwrap();
        assert_eq!(course.number, "213");
        assert_eq!(course.meets, "");
    }

    #[test]
    fn test_parse_bare_map() {
        let json = r#"{ "F101": { "term": "Fall", "number": "101", "meets": "", "title": "Intro" } }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.title(), None);
        assert!(catalog.contains("F101"));
    }

    #[test]
    fn test_parse_rejects_unexpected_shapes() {
        assert!(matches!(
            Catalog::from_json_str("[1, 2, 3]"),
            Err(Error::Catalog(_))
        ));
        assert!(matches!(
            Catalog::from_json_str(r#"{ "title": "No courses here" }"#),
            Err(Error::Catalog(_))
        ));
        assert!(matches!(
            Catalog::from_json_str(r#"{ "courses": [] }"#),
            Err(Error::Catalog(_))
        ));
        assert!(matches!(
            Catalog::from_json_str("{}"),
            Err(Error::Catalog(_))
        ));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            Catalog::from_json_str("{ not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_in_term_filters_and_orders() {
        let catalog = Catalog::from_json_str(SAMPLE_CATALOG).unwrap();
        let fall: Vec<&str> = catalog.in_term(&Term::Fall).map(|(id, _)| id).collect();
        assert_eq!(fall, vec!["F101", "F110"]);

        assert_eq!(catalog.in_term(&Term::Summer).count(), 0);
    }

    #[test]
    fn test_parse_skips_non_object_entries() {
        let json = r#"{
  "courses": {
    "A": { "term": "Fall", "number": "101", "meets": "", "title": "Intro" },
    "B": "junk",
    "C": null
  }
}"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("A"));
        assert!(!catalog.contains("B"));
    }

    #[test]
    fn test_edit_unknown_course() {
        let mut catalog = Catalog::from_json_str(SAMPLE_CATALOG).unwrap();
        let result = catalog.edit("X999", &CoursePatch::default());
        assert!(matches!(result, Err(Error::CourseNotFound(id)) if id == "X999"));
    }

    #[test]
    fn test_edit_validates_trimmed_values() {
        let mut catalog = Catalog::from_json_str(SAMPLE_CATALOG).unwrap();

        let padded_title = CoursePatch {
            title: Some(" X".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            catalog.edit("F110", &padded_title),
            Err(Error::Validation(_))
        ));

        let padded_meets = CoursePatch {
            meets: Some(" TuTh 10:00-11:20".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            catalog.edit("F110", &padded_meets),
            Ok(EditOutcome::Updated { .. })
        ));
        assert_eq!(catalog.get("F110").unwrap().meets, "TuTh 10:00-11:20");
    }

    #[test]
    fn test_edit_validates() {
        let mut catalog = Catalog::from_json_str(SAMPLE_CATALOG).unwrap();
        let patch = CoursePatch {
            meets: Some("MWF 10:50-10:00".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            catalog.edit("F110", &patch),
            Err(Error::Validation(_))
        ));
        assert_eq!(catalog.get("F110").unwrap().meets, "MWF 10:00-10:50");
    }

    #[test]
    fn test_edit_detects_no_op() {
        let mut catalog = Catalog::from_json_str(SAMPLE_CATALOG).unwrap();
        let patch = CoursePatch {
            title: Some("  Intro Programming for non-majors ".to_string()),
            ..Default::default()
        };
        assert_eq!(catalog.edit("F110", &patch).unwrap(), EditOutcome::Unchanged);
    }

    #[test]
    fn test_edit_replaces_record() {
        let mut catalog = Catalog::from_json_str(SAMPLE_CATALOG).unwrap();
        let patch = CoursePatch {
            number: Some("110-2".to_string()),
            ..Default::default()
        };

        let outcome = catalog.edit("F110", &patch).unwrap();
        match outcome {
            EditOutcome::Updated { previous } => assert_eq!(previous.number, "110"),
            other => panic!("expected update, got {:?}", other),
        }
        assert_eq!(catalog.get("F110").unwrap().number, "110-2");
    }

    #[test]
    fn test_json_string_reparses() {
        let catalog = Catalog::from_json_str(SAMPLE_CATALOG).unwrap();
        let json = catalog.to_json_string().unwrap();

        assert!(json.contains("\"courses\""));
        assert_eq!(Catalog::from_json_str(&json).unwrap(), catalog);
    }
}
