//! Built-in roster used when storage holds nothing yet

use crate::model::{AttendanceStatus, Student};

/// Default DTA (category) list
pub const INITIAL_DTA_LIST: [&str; 3] = ["Ula", "Wustho", "Ulya"];

/// (nis, nisn, name, class, dta)
const INITIAL_STUDENTS: [(&str, &str, &str, &str, &str); 6] = [
    ("1001", "0081234501", "Ahmad Fauzi", "1A", "Ula"),
    ("1002", "0081234502", "Siti Aminah", "1A", "Ula"),
    ("1003", "0081234503", "Muhammad Rizki", "2B", "Wustho"),
    ("1004", "0081234504", "Nur Halimah", "2B", "Wustho"),
    ("1005", "0081234505", "Abdul Karim", "3A", "Ulya"),
    ("1006", "0081234506", "Fatimah Zahra", "3A", "Ulya"),
];

pub fn initial_dta_list() -> Vec<String> {
    INITIAL_DTA_LIST.iter().map(|s| s.to_string()).collect()
}

/// Seed roster, ids 1..=n, nobody recorded yet
pub fn initial_students() -> Vec<Student> {
    INITIAL_STUDENTS
        .iter()
        .zip(1..)
        .map(|(&(nis, nisn, name, class_name, dta), id)| Student {
            id,
            nis: nis.to_string(),
            nisn: nisn.to_string(),
            name: name.to_string(),
            class_name: class_name.to_string(),
            dta: dta.to_string(),
            status: AttendanceStatus::BelumDiabsen,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_is_consistent() {
        let students = initial_students();
        let dta = initial_dta_list();

        let ids: Vec<_> = students.iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=students.len() as u32).collect::<Vec<_>>());

        let nis: HashSet<_> = students.iter().map(|s| &s.nis).collect();
        let nisn: HashSet<_> = students.iter().map(|s| &s.nisn).collect();
        assert_eq!(nis.len(), students.len());
        assert_eq!(nisn.len(), students.len());

        assert!(students.iter().all(|s| dta.contains(&s.dta)));
    }
}
