//! Domain state container
//!
//! Owns the student list, the attendance history and the DTA list. Every
//! operation updates memory first and then writes the changed collection(s)
//! through the persistence adapter, which never fails from the caller's view.

pub mod import;

pub use import::ImportReport;

use crate::consts::{KEY_ATTENDANCE_HISTORY, KEY_DTA_LIST, KEY_STUDENTS};
use crate::model::{AttendanceRecord, NewStudent, Student, StudentId};
use crate::persistence::{KeyValueStore, Persistence};
use crate::seed;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
    attendance_history: Vec<AttendanceRecord>,
    dta_list: Vec<String>,
}

impl Roster {
    /// Build from explicit collections (no persistence involved)
    pub fn from_parts(
        students: Vec<Student>,
        attendance_history: Vec<AttendanceRecord>,
        dta_list: Vec<String>,
    ) -> Self {
        Self {
            students,
            attendance_history,
            dta_list,
        }
    }

    /// Seed roster, empty history, seed DTA list
    pub fn seeded() -> Self {
        Self::from_parts(seed::initial_students(), Vec::new(), seed::initial_dta_list())
    }

    /// Load all three collections, each falling back to its own default
    pub fn restore<S: KeyValueStore>(persistence: &Persistence<S>) -> Self {
        let students: Vec<Student> = persistence.load(KEY_STUDENTS, seed::initial_students());
        let attendance_history: Vec<AttendanceRecord> =
            persistence.load(KEY_ATTENDANCE_HISTORY, Vec::new());
        let dta_list: Vec<String> = persistence.load(KEY_DTA_LIST, seed::initial_dta_list());

        log::info!(
            "Roster restored: {} students, {} attendance records, {} DTA",
            students.len(),
            attendance_history.len(),
            dta_list.len()
        );
        Self::from_parts(students, attendance_history, dta_list)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn attendance_history(&self) -> &[AttendanceRecord] {
        &self.attendance_history
    }

    pub fn dta_list(&self) -> &[String] {
        &self.dta_list
    }

    /// Append a student with the next free id. NIS/NISN are not checked here.
    /// Returns `None`, leaving the roster untouched, once the id space is used up.
    pub fn add_student<S: KeyValueStore>(
        &mut self,
        data: NewStudent,
        persistence: &mut Persistence<S>,
    ) -> Option<StudentId> {
        let Some(id) = import::next_id(import::max_id(&self.students)) else {
            log::error!("Student ids exhausted, {:?} not added", data.name);
            return None;
        };
        self.students.push(Student::from_new(id, data));
        log::info!("Added student {}", id);
        self.save_students(persistence);
        Some(id)
    }

    /// Append every candidate whose NIS and NISN are both new to the roster,
    /// and extend the DTA list with their categories
    pub fn import_students<S: KeyValueStore>(
        &mut self,
        candidates: Vec<NewStudent>,
        persistence: &mut Persistence<S>,
    ) -> ImportReport {
        let (accepted, report) = import::accept_candidates(&self.students, candidates);

        self.dta_list = import::merge_dta(&self.dta_list, accepted.iter().map(|s| s.dta.as_str()));
        self.save_dta_list(persistence);

        self.students.extend(accepted);
        self.save_students(persistence);

        log::info!(
            "Imported {} students ({} skipped as duplicates, {} without a free id)",
            report.added_count(),
            report.skipped,
            report.ids_exhausted
        );
        report
    }

    /// Replace the student with `record.id` in place; unknown ids are ignored
    pub fn update_student<S: KeyValueStore>(
        &mut self,
        record: Student,
        persistence: &mut Persistence<S>,
    ) {
        match self.students.iter_mut().find(|s| s.id == record.id) {
            Some(slot) => {
                log::info!("Updated student {}", record.id);
                *slot = record;
            }
            None => log::debug!("Update ignored, no student {}", record.id),
        }
        self.save_students(persistence);
    }

    /// Remove a student and all of their attendance records
    pub fn delete_student<S: KeyValueStore>(
        &mut self,
        id: StudentId,
        persistence: &mut Persistence<S>,
    ) {
        self.students.retain(|s| s.id != id);
        let before = self.attendance_history.len();
        self.attendance_history.retain(|r| r.student_id != id);
        log::info!(
            "Deleted student {} ({} attendance records removed)",
            id,
            before - self.attendance_history.len()
        );
        self.save_students(persistence);
        self.save_attendance_history(persistence);
    }

    /// Add a category if it is non-empty and new. Returns whether it was added.
    pub fn add_dta<S: KeyValueStore>(&mut self, name: &str, persistence: &mut Persistence<S>) -> bool {
        if name.is_empty() || self.dta_list.iter().any(|d| d == name) {
            log::debug!("DTA {:?} not added", name);
            return false;
        }
        self.dta_list.push(name.to_string());
        self.save_dta_list(persistence);
        true
    }

    /// Replace the attendance history wholesale. No rule is applied:
    /// several records for the same student and date are stored as given.
    pub fn set_attendance_history<S: KeyValueStore>(
        &mut self,
        records: Vec<AttendanceRecord>,
        persistence: &mut Persistence<S>,
    ) {
        self.attendance_history = records;
        self.save_attendance_history(persistence);
    }

    /// Replace the student list wholesale, bypassing id and uniqueness rules
    pub fn set_students<S: KeyValueStore>(
        &mut self,
        students: Vec<Student>,
        persistence: &mut Persistence<S>,
    ) {
        self.students = students;
        self.save_students(persistence);
    }

    fn save_students<S: KeyValueStore>(&self, persistence: &mut Persistence<S>) {
        persistence.save(KEY_STUDENTS, &self.students);
    }

    fn save_attendance_history<S: KeyValueStore>(&self, persistence: &mut Persistence<S>) {
        persistence.save(KEY_ATTENDANCE_HISTORY, &self.attendance_history);
    }

    fn save_dta_list<S: KeyValueStore>(&self, persistence: &mut Persistence<S>) {
        persistence.save(KEY_DTA_LIST, &self.dta_list);
    }
}
