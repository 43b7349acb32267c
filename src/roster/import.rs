//! Batch import de-duplication
//!
//! A candidate is rejected when its NIS or its NISN already belongs to a
//! student on the roster. Candidates are only checked against students that
//! existed before the import, not against each other.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{NewStudent, Student, StudentId};

/// Outcome of one import call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Ids assigned to the accepted candidates, in input order
    pub added: Vec<StudentId>,
    /// Candidates dropped for a NIS/NISN collision
    pub skipped: usize,
    /// Candidates dropped because no id above the current max was left
    pub ids_exhausted: usize,
}

impl ImportReport {
    pub fn added_count(&self) -> usize {
        self.added.len()
    }
}

/// Highest id on the roster, 0 when empty
pub fn max_id(students: &[Student]) -> StudentId {
    students.iter().map(|s| s.id).max().unwrap_or(0)
}

/// Id following `current`, or `None` once `StudentId::MAX` is taken
pub fn next_id(current: StudentId) -> Option<StudentId> {
    current.checked_add(1)
}

/// Filter `candidates` against `existing` and assign ids continuing from the
/// current max. Survivors keep their input order.
pub fn accept_candidates(
    existing: &[Student],
    candidates: Vec<NewStudent>,
) -> (Vec<Student>, ImportReport) {
    let existing_nis: HashSet<&str> = existing.iter().map(|s| s.nis.as_str()).collect();
    let existing_nisn: HashSet<&str> = existing.iter().map(|s| s.nisn.as_str()).collect();

    let mut report = ImportReport::default();
    let mut last_id = max_id(existing);
    let mut accepted = Vec::new();
    for c in candidates {
        if existing_nis.contains(c.nis.as_str()) || existing_nisn.contains(c.nisn.as_str()) {
            report.skipped += 1;
            continue;
        }
        match next_id(last_id) {
            Some(id) => {
                last_id = id;
                report.added.push(id);
                accepted.push(Student::from_new(id, c));
            }
            None => report.ids_exhausted += 1,
        }
    }

    if report.ids_exhausted > 0 {
        log::error!(
            "Student ids exhausted, {} import rows dropped",
            report.ids_exhausted
        );
    }
    (accepted, report)
}

/// `current ++ new`, keeping first occurrences only
pub fn merge_dta<'a>(current: &'a [String], new: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(current.len());
    for name in current.iter().map(String::as_str).chain(new) {
        if seen.insert(name) {
            merged.push(name.to_string());
        }
    }
    merged
}
