//! Pure roster projections. Views call these after every state change.

use crate::domain::model::{Coach, Student, YearFilter};

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// First name, last name (both case-insensitive) or the coach number as text
/// (literal substring).
pub fn coach_matches(coach: &Coach, search: &str) -> bool {
    let needle = search.to_lowercase();
    contains_ignore_case(&coach.first_name, &needle)
        || contains_ignore_case(&coach.last_name, &needle)
        || coach.coach_id.to_string().contains(search)
}

pub fn filter_coaches<'a>(coaches: &'a [Coach], search: &str) -> Vec<&'a Coach> {
    coaches.iter().filter(|c| coach_matches(c, search)).collect()
}

pub fn student_matches(student: &Student, search: &str, year: YearFilter) -> bool {
    contains_ignore_case(&student.full_name(), &search.to_lowercase())
        && year.accepts(&student.year_level)
}

pub fn filter_students<'a>(
    students: &'a [Student],
    search: &str,
    year: YearFilter,
) -> Vec<&'a Student> {
    students
        .iter()
        .filter(|s| student_matches(s, search, year))
        .collect()
}
