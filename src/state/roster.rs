//! Roster cache for the students page.
//!
//! DESIGN
//! ======
//! The roster is a read-through cache: replaced wholesale after every
//! successful fetch, never merged partially. Any mutation triggers a full
//! re-fetch, so the cache only diverges from backend truth for the length
//! of one round-trip. Filtering operates on this cache alone and never
//! touches the network.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use crate::net::types::Student;

/// The in-memory student cache owned by the students page.
#[derive(Clone, Debug, Default)]
pub struct RosterState {
    /// Last successfully fetched collection, in backend order.
    pub students: Vec<Student>,
    /// True while a collection fetch is in flight.
    pub loading: bool,
}

/// Case-insensitive substring match against first name, last name, email,
/// or major. A student with no major is matched on the other three fields.
pub fn matches_term(student: &Student, term: &str) -> bool {
    let term = term.to_lowercase();
    student.first_name.to_lowercase().contains(&term)
        || student.last_name.to_lowercase().contains(&term)
        || student.email.to_lowercase().contains(&term)
        || student
            .major
            .as_ref()
            .is_some_and(|major| major.to_lowercase().contains(&term))
}

/// Project the subsequence of `students` matching `term`, preserving order.
pub fn filter_students(students: &[Student], term: &str) -> Vec<Student> {
    students
        .iter()
        .filter(|student| matches_term(student, term))
        .cloned()
        .collect()
}
