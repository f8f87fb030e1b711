//! Meeting-time parsing and schedule conflict detection
//!
//! Everything in this module is a pure function of its inputs: meetings
//! are re-parsed on every call and nothing is cached or mutated.

mod conflict;
mod meeting;

pub use conflict::{
    conflicting_courses, courses_conflict, days_overlap, is_course_selectable, meetings_overlap,
    times_overlap,
};
pub use meeting::{format_hhmm, parse_days, parse_hhmm, parse_meeting, Day, DaySet, Meeting};
