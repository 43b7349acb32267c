//! Read-only attendance summaries and roster grouping

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{AttendanceRecord, AttendanceStatus, Student, StudentId};

/// Count per attendance status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AttendanceSummary {
    #[serde(rename = "Hadir")]
    pub hadir: usize,
    #[serde(rename = "Izin")]
    pub izin: usize,
    #[serde(rename = "Sakit")]
    pub sakit: usize,
    #[serde(rename = "Alfa")]
    pub alfa: usize,
    #[serde(rename = "Belum Diabsen")]
    pub belum_diabsen: usize,
}

impl AttendanceSummary {
    pub fn from_statuses(statuses: impl IntoIterator<Item = AttendanceStatus>) -> Self {
        let mut summary = Self::default();
        for status in statuses {
            summary.record(status);
        }
        summary
    }

    pub fn record(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Hadir => self.hadir += 1,
            AttendanceStatus::Izin => self.izin += 1,
            AttendanceStatus::Sakit => self.sakit += 1,
            AttendanceStatus::Alfa => self.alfa += 1,
            AttendanceStatus::BelumDiabsen => self.belum_diabsen += 1,
        }
    }

    pub fn count(&self, status: AttendanceStatus) -> usize {
        match status {
            AttendanceStatus::Hadir => self.hadir,
            AttendanceStatus::Izin => self.izin,
            AttendanceStatus::Sakit => self.sakit,
            AttendanceStatus::Alfa => self.alfa,
            AttendanceStatus::BelumDiabsen => self.belum_diabsen,
        }
    }

    pub fn total(&self) -> usize {
        AttendanceStatus::ALL.iter().map(|&s| self.count(s)).sum()
    }

    /// Entries that carry an actual status (everything but Belum Diabsen)
    pub fn recorded(&self) -> usize {
        self.total() - self.belum_diabsen
    }
}

/// Summary of every record taken on `date`
pub fn summarize_date(history: &[AttendanceRecord], date: &str) -> AttendanceSummary {
    AttendanceSummary::from_statuses(history.iter().filter(|r| r.date == date).map(|r| r.status))
}

/// Summary of one student's records across all dates
pub fn summarize_student(history: &[AttendanceRecord], student_id: StudentId) -> AttendanceSummary {
    AttendanceSummary::from_statuses(
        history
            .iter()
            .filter(|r| r.student_id == student_id)
            .map(|r| r.status),
    )
}

/// Summary of each student's current status
pub fn summarize_current(students: &[Student]) -> AttendanceSummary {
    AttendanceSummary::from_statuses(students.iter().map(|s| s.status))
}

/// A DTA and the students in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DtaGroup<'a> {
    pub dta: &'a str,
    pub students: Vec<&'a Student>,
}

/// Group students by DTA. Groups follow `dta_list` order (empty groups
/// included), then any category missing from the list in first-seen order.
pub fn group_by_dta<'a>(students: &'a [Student], dta_list: &'a [String]) -> Vec<DtaGroup<'a>> {
    let mut groups: Vec<DtaGroup<'a>> = Vec::with_capacity(dta_list.len());
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for dta in dta_list {
        index.entry(dta.as_str()).or_insert_with(|| {
            groups.push(DtaGroup {
                dta: dta.as_str(),
                students: Vec::new(),
            });
            groups.len() - 1
        });
    }

    for student in students {
        let slot = *index.entry(student.dta.as_str()).or_insert_with(|| {
            groups.push(DtaGroup {
                dta: student.dta.as_str(),
                students: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].students.push(student);
    }

    groups
}
