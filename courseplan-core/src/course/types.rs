//! Course record definitions
//!
//! Course records arrive from an external catalog feed where fields are
//! loosely typed. Deserialization goes through a raw record that coerces
//! every field to a string and maps absent or `null` values to `""`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The academic term a course is offered in
///
/// Unknown term names are kept verbatim in [`Term::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Term {
    #[default]
    Fall,
    Winter,
    Spring,
    Summer,
    Other(String),
}

impl Term {
    /// The four terms accepted when editing a course
    pub fn standard() -> &'static [Term] {
        &[Term::Fall, Term::Winter, Term::Spring, Term::Summer]
    }

    /// The raw term name
    pub fn as_str(&self) -> &str {
        match self {
            Term::Fall => "Fall",
            Term::Winter => "Winter",
            Term::Spring => "Spring",
            Term::Summer => "Summer",
            Term::Other(name) => name,
        }
    }

    /// Whether this is one of the four standard terms
    pub fn is_standard(&self) -> bool {
        Self::standard().contains(self)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exact conversion used for catalog data: only the exact spelling maps to
/// a standard term
impl From<String> for Term {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Fall" => Term::Fall,
            "Winter" => Term::Winter,
            "Spring" => Term::Spring,
            "Summer" => Term::Summer,
            _ => Term::Other(s),
        }
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::from(s.to_string())
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        match term {
            Term::Other(name) => name,
            standard => standard.as_str().to_string(),
        }
    }
}

/// Lenient conversion used for user input such as `--term fall`
impl std::str::FromStr for Term {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.to_lowercase().as_str() {
            "fall" => Term::Fall,
            "winter" => Term::Winter,
            "spring" => Term::Spring,
            "summer" => Term::Summer,
            _ => Term::Other(s.to_string()),
        })
    }
}

/// A course offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCourse")]
pub struct Course {
    /// Term the course is offered in
    pub term: Term,
    /// Course number, possibly with a section suffix (e.g. "213-2")
    pub number: String,
    /// Meeting time, e.g. "MWF 9:00-9:50"; empty when unscheduled
    pub meets: String,
    /// Display title
    pub title: String,
}

impl Course {
    pub fn new(
        term: impl Into<Term>,
        number: impl Into<String>,
        meets: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            number: number.into(),
            meets: meets.into(),
            title: title.into(),
        }
    }

    /// Whether the course has no scheduled meeting text
    pub fn is_unscheduled(&self) -> bool {
        self.meets.trim().is_empty()
    }

    /// Copy of this course with every text field trimmed
    pub fn normalized(&self) -> Self {
        Self {
            term: Term::from(self.term.as_str().trim()),
            number: self.number.trim().to_string(),
            meets: self.meets.trim().to_string(),
            title: self.title.trim().to_string(),
        }
    }
}

/// Loosely typed course record as found in catalog feeds
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCourse {
    term: Value,
    number: Value,
    meets: Value,
    title: Value,
}

impl From<RawCourse> for Course {
    fn from(raw: RawCourse) -> Self {
        Self {
            term: Term::from(coerce_field("term", raw.term)),
            number: coerce_field("number", raw.number),
            meets: coerce_field("meets", raw.meets),
            title: coerce_field("title", raw.title),
        }
    }
}

/// Coerce a loosely typed field to the string the rest of the crate expects
fn coerce_field(field: &str, value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => {
            tracing::warn!(field, value = %other, "Unexpected structured value in course field");
            other.to_string()
        }
    }
}

/// Partial update to a course record
///
/// Each provided value is trimmed before it is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub term: Option<String>,
    pub number: Option<String>,
    pub meets: Option<String>,
}

impl CoursePatch {
    /// Whether the patch carries no values at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.term.is_none() && self.number.is_none() && self.meets.is_none()
    }

    /// Produce the normalized course that results from applying this patch
    pub fn apply(&self, course: &Course) -> Course {
        let mut updated = course.normalized();

        if let Some(title) = &self.title {
            updated.title = title.trim().to_string();
        }
        if let Some(term) = &self.term {
            updated.term = Term::from(term.trim());
        }
        if let Some(number) = &self.number {
            updated.number = number.trim().to_string();
        }
        if let Some(meets) = &self.meets {
            updated.meets = meets.trim().to_string();
        }

        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_from_string_is_exact() {
        assert_eq!(Term::from("Fall"), Term::Fall);
        assert_eq!(Term::from("Summer"), Term::Summer);
        assert_eq!(Term::from("fall"), Term::Other("fall".to_string()));
    }

    #[test]
    fn test_term_from_str_is_case_insensitive() {
        assert_eq!("fall".parse::<Term>().unwrap(), Term::Fall);
        assert_eq!("WINTER".parse::<Term>().unwrap(), Term::Winter);
        assert_eq!(
            "Autumn".parse::<Term>().unwrap(),
            Term::Other("Autumn".to_string())
        );
    }

    #[test]
    fn test_is_standard() {
        assert!(Term::standard().iter().all(Term::is_standard));
        assert!(!Term::from("fall").is_standard());
        assert!(!Term::Other("Fall".to_string()).is_standard());
    }

    #[test]
    fn test_term_display() {
        assert_eq!(Term::Spring.to_string(), "Spring");
        assert_eq!(Term::Other("Q3".to_string()).to_string(), "Q3");
    }

    #[test]
    fn test_term_serde_as_plain_string() {
        let json = serde_json::to_string(&Term::Winter).unwrap();
        assert_eq!(json, "\"Winter\"");
        let parsed: Term = serde_json::from_str("\"Intersession\"").unwrap();
        assert_eq!(parsed, Term::Other("Intersession".to_string()));
    }

    #[test]
    fn test_course_deserialize() {
        let json = r#"{"term":"Fall","number":"101","meets":"MWF 11:00-11:50","title":"Intro"}"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course, Course::new("Fall", "101", "MWF 11:00-11:50", "Intro"));
    }

    #[test]
    fn test_course_deserialize_coerces_loose_fields() {
        let json = r#"{"term":"Winter","number":213,"meets":null,"title":"Data Structures"}"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.number, "213");
        assert_eq!(course.meets, "");
        assert!(course.is_unscheduled());
    }

    #[test]
    fn test_course_deserialize_missing_fields_default_to_empty() {
        let course: Course = serde_json::from_str(r#"{"title":"Seminar"}"#).unwrap();
        assert_eq!(course.meets, "");
        assert_eq!(course.number, "");
        assert_eq!(course.term, Term::Other(String::new()));
    }

    #[test]
    fn test_course_serialize_uses_plain_strings() {
        let course = Course::new("Spring", "343", "TuTh 9:30-10:50", "Operating Systems");
        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(value["term"], "Spring");
        assert_eq!(value["meets"], "TuTh 9:30-10:50");
    }

    #[test]
    fn test_patch_apply_trims_and_overrides() {
        let course = Course::new("Fall", "101 ", "MWF 9:00-9:50", " Intro");
        let patch = CoursePatch {
            meets: Some("  TuTh 9:00-10:20 ".to_string()),
            term: Some("Winter".to_string()),
            ..Default::default()
        };

        let updated = patch.apply(&course);
        assert_eq!(updated.meets, "TuTh 9:00-10:20");
        assert_eq!(updated.term, Term::Winter);
        assert_eq!(updated.number, "101");
        assert_eq!(updated.title, "Intro");
    }

    #[test]
    fn test_empty_patch() {
        assert!(CoursePatch::default().is_empty());
        let patch = CoursePatch {
            title: Some("x".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
