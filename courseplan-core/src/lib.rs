//! courseplan core - Course catalogs, meeting times and schedule conflicts
//!
//! This crate loads course catalogs, parses meeting-time strings and decides
//! whether a course can be added to a plan without a scheduling conflict.

pub mod config;
pub mod course;
pub mod error;
pub mod schedule;
pub mod selection;
pub mod validate;

pub use config::Config;
pub use course::{Catalog, Course, CoursePatch, EditOutcome, Term};
pub use error::{Error, Result};
pub use schedule::{
    conflicting_courses, courses_conflict, is_course_selectable, parse_meeting, Day, DaySet,
    Meeting,
};
pub use selection::{Selection, ToggleOutcome};
pub use validate::{validate_course, CourseField, FieldError};
