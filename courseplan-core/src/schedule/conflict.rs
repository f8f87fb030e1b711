//! Schedule conflict detection
//!
//! Two courses conflict when they are offered in the same term and their
//! parsed meetings share at least one day and overlapping times. Courses
//! without a parseable meeting never conflict with anything.

use super::meeting::{parse_meeting, DaySet, Meeting};
use crate::course::{Catalog, Course};
use crate::selection::Selection;

/// Whether the two day sets share at least one day
pub fn days_overlap(a: &DaySet, b: &DaySet) -> bool {
    a.iter().any(|day| b.contains(day))
}

/// Whether two half-open time ranges intersect
///
/// A meeting ending at the minute another starts does not overlap it.
pub fn times_overlap(a: &Meeting, b: &Meeting) -> bool {
    a.start() < b.end() && b.start() < a.end()
}

/// Whether two meetings occupy the same time on a shared day
pub fn meetings_overlap(a: &Meeting, b: &Meeting) -> bool {
    days_overlap(a.days(), b.days()) && times_overlap(a, b)
}

/// Whether two courses cannot both be taken
///
/// Terms are compared by their raw names.
pub fn courses_conflict(a: &Course, b: &Course) -> bool {
    if a.term.as_str() != b.term.as_str() {
        return false;
    }

    match (parse_meeting(&a.meets), parse_meeting(&b.meets)) {
        (Some(am), Some(bm)) => meetings_overlap(&am, &bm),
        _ => false,
    }
}

/// Whether `candidate_id` may be added to the current selection
///
/// A course that is already selected is always selectable so it can be
/// toggled off. Unknown ids are never selectable. Selected ids that are
/// missing from the catalog are ignored.
pub fn is_course_selectable(candidate_id: &str, courses: &Catalog, selected: &Selection) -> bool {
    if selected.contains(candidate_id) {
        return true;
    }

    let Some(candidate) = courses.get(candidate_id) else {
        return false;
    };

    !selected
        .iter()
        .filter_map(|id| courses.get(id))
        .any(|course| courses_conflict(candidate, course))
}

/// Selected course ids that conflict with `candidate_id`, in id order
///
/// Empty when the candidate is already selected or not in the catalog.
pub fn conflicting_courses<'a>(
    candidate_id: &str,
    courses: &Catalog,
    selected: &'a Selection,
) -> Vec<&'a str> {
    if selected.contains(candidate_id) {
        return Vec::new();
    }

    let Some(candidate) = courses.get(candidate_id) else {
        return Vec::new();
    };

    selected
        .iter()
        .filter(|id| {
            courses
                .get(id)
                .is_some_and(|course| courses_conflict(candidate, course))
        })
        .collect()
}
