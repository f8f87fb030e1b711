//! Strict validation for course data entry
//!
//! The schedule engine reads meeting strings leniently. Edits to the
//! catalog go through the stricter rules here so malformed values are
//! reported instead of silently meaning "no meeting".

use std::fmt;

use crate::course::{Course, Term};
use crate::schedule::{parse_hhmm, Day};

/// Course field a validation message refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseField {
    Title,
    Term,
    Number,
    Meets,
}

impl CourseField {
    pub fn name(&self) -> &'static str {
        match self {
            CourseField::Title => "title",
            CourseField::Term => "term",
            CourseField::Number => "number",
            CourseField::Meets => "meets",
        }
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A validation failure for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: CourseField,
    pub message: String,
}

impl FieldError {
    fn new(field: CourseField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

const TITLE_MESSAGE: &str = "Title must be at least 2 characters";
const TERM_MESSAGE: &str = "Term must be Fall, Winter, Spring, or Summer";
const NUMBER_MESSAGE: &str =
    "Number must be digits with optional section, e.g., \"213\" or \"213-2\"";
const MEETS_MESSAGE: &str = "Must be empty or like \"MWF 12:00-13:20\" or \"TuTh 14:00-15:20\" (one or more days + start-end)";
const ORDER_MESSAGE: &str = "Start time must be earlier than end time";

/// Validate every field of a course, collecting all failures
pub fn validate_course(course: &Course) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = [
        validate_title(&course.title),
        validate_term(&course.term),
        validate_number(&course.number),
        validate_meets(&course.meets),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_title(title: &str) -> Result<(), FieldError> {
    if title.chars().count() < 2 {
        return Err(FieldError::new(CourseField::Title, TITLE_MESSAGE));
    }
    Ok(())
}

pub fn validate_term(term: &Term) -> Result<(), FieldError> {
    if !term.is_standard() {
        return Err(FieldError::new(CourseField::Term, TERM_MESSAGE));
    }
    Ok(())
}

/// Digits with an optional `-digits` section suffix
pub fn validate_number(number: &str) -> Result<(), FieldError> {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let valid = match number.split_once('-') {
        Some((base, section)) => all_digits(base) && all_digits(section),
        None => all_digits(number),
    };

    if !valid {
        return Err(FieldError::new(CourseField::Number, NUMBER_MESSAGE));
    }
    Ok(())
}

/// Empty, or a well-formed meeting whose start precedes its end
///
/// Unlike the lenient parser, every character of the day run must belong
/// to a day token and nothing may follow the time range.
pub fn validate_meets(meets: &str) -> Result<(), FieldError> {
    if meets.is_empty() {
        return Ok(());
    }

    let Some((start, end)) = strict_meeting_times(meets) else {
        return Err(FieldError::new(CourseField::Meets, MEETS_MESSAGE));
    };

    if start >= end {
        return Err(FieldError::new(CourseField::Meets, ORDER_MESSAGE));
    }
    Ok(())
}

/// Split a strictly formatted meeting into start and end minutes
fn strict_meeting_times(meets: &str) -> Option<(u16, u16)> {
    let split = meets.find(char::is_whitespace)?;
    let (days, rest) = meets.split_at(split);
    let range = rest.trim_start();

    if !is_strict_day_run(days) || range.contains(char::is_whitespace) {
        return None;
    }

    let (start, end) = range.split_once('-')?;
    Some((parse_hhmm(start)?, parse_hhmm(end)?))
}

/// One or more day tokens with nothing in between
fn is_strict_day_run(days: &str) -> bool {
    let mut rest = days;
    while !rest.is_empty() {
        match Day::match_prefix(rest) {
            Some((_, len)) => rest = &rest[len..],
            None => return false,
        }
    }
    !days.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(errors: &[FieldError]) -> Vec<CourseField> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_course() {
        let course = Course::new("Fall", "213-2", "MWF 12:00-13:20", "Intro to Systems");
        assert_eq!(validate_course(&course), Ok(()));
    }

    #[test]
    fn test_unscheduled_course_is_valid() {
        let course = Course::new("Spring", "394", "", "Agile Software Development");
        assert_eq!(validate_course(&course), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let course = Course::new("Autumn", "CS-1", "sometime", "X");
        let errors = validate_course(&course).unwrap_err();
        assert_eq!(
            fields(&errors),
            vec![
                CourseField::Title,
                CourseField::Term,
                CourseField::Number,
                CourseField::Meets
            ]
        );
    }

    #[test]
    fn test_title() {
        assert!(validate_title("OS").is_ok());
        assert!(validate_title("X").is_err());
        assert!(validate_title("").is_err());
    }

    #[test]
    fn test_term_must_be_standard() {
        for term in Term::standard() {
            assert!(validate_term(term).is_ok());
        }
        assert!(validate_term(&Term::from("fall")).is_err());
        assert!(validate_term(&Term::from("")).is_err());
    }

    #[test]
    fn test_number() {
        assert!(validate_number("213").is_ok());
        assert!(validate_number("213-2").is_ok());
        assert!(validate_number("213-").is_err());
        assert!(validate_number("-2").is_err());
        assert!(validate_number("213-2-1").is_err());
        assert!(validate_number("CS213").is_err());
        assert!(validate_number("").is_err());
    }

    #[test]
    fn test_meets_accepts_strict_forms() {
        assert!(validate_meets("MWF 9:00-9:50").is_ok());
        assert!(validate_meets("TuTh 14:00-15:20").is_ok());
        assert!(validate_meets("SaSu 09:00-17:00").is_ok());
        assert!(validate_meets("M  8:00-9:00").is_ok());
    }

    #[test]
    fn test_meets_rejects_what_the_lenient_parser_tolerates() {
        let format_error = |s: &str| {
            validate_meets(s)
                .unwrap_err()
                .message
                .starts_with("Must be empty")
        };
        assert!(format_error("MxWF 9:00-9:50"));
        assert!(format_error("T 9:00-9:50"));
        assert!(format_error("9:00-9:50"));
        assert!(format_error("MWF 9:00-9:50 extra"));
        assert!(format_error("MWF 9:00-9:50-10:00"));
        assert!(format_error("MWF 24:00-25:00"));
        assert!(format_error(" MWF 9:00-9:50"));
    }

    #[test]
    fn test_meets_start_before_end() {
        let err = validate_meets("MWF 9:50-9:00").unwrap_err();
        assert_eq!(err.field, CourseField::Meets);
        assert_eq!(err.message, "Start time must be earlier than end time");
        assert!(validate_meets("MWF 9:00-9:00").is_err());
    }

    #[test]
    fn test_field_error_display() {
        let err = validate_title("X").unwrap_err();
        assert_eq!(err.to_string(), "title: Title must be at least 2 characters");
    }
}
