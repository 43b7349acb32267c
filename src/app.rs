//! Application state
//!
//! One `App` owns the storage adapter, the session gate and the roster for
//! the lifetime of a session. It is passed explicitly to whoever renders it.

use crate::model::{AttendanceRecord, NewStudent, Student, StudentId};
use crate::persistence::{KeyValueStore, Persistence};
use crate::roster::{ImportReport, Roster};
use crate::session::{Session, SessionState};

#[derive(Debug)]
pub struct App<S: KeyValueStore> {
    persistence: Persistence<S>,
    session: Session,
    roster: Roster,
}

impl<S: KeyValueStore> App<S> {
    /// Load every persisted key once, falling back to defaults per key
    pub fn restore(store: S) -> Self {
        let persistence = Persistence::new(store);
        let session = Session::restore(&persistence);
        let roster = Roster::restore(&persistence);
        log::info!("App restored ({:?})", session.state());
        Self {
            persistence,
            session,
            roster,
        }
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn login(&mut self) {
        self.session.login(&mut self.persistence);
    }

    pub fn logout(&mut self) {
        self.session.logout(&mut self.persistence);
    }

    /// Roster view, reachable only while logged in
    pub fn view(&self) -> Option<&Roster> {
        self.is_logged_in().then_some(&self.roster)
    }

    /// Mutable roster view, reachable only while logged in
    pub fn view_mut(&mut self) -> Option<RosterMut<'_, S>> {
        if self.is_logged_in() {
            Some(self.roster_mut())
        } else {
            None
        }
    }

    /// Ungated read access
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Ungated write access
    pub fn roster_mut(&mut self) -> RosterMut<'_, S> {
        RosterMut {
            roster: &mut self.roster,
            persistence: &mut self.persistence,
        }
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Wipe saved data and go back to the seed roster, logged out
    pub fn reset(&mut self) {
        self.persistence.clear();
        self.session = Session::default();
        self.roster = Roster::seeded();
        log::info!("App reset to defaults");
    }

    pub fn into_store(self) -> S {
        self.persistence.into_inner()
    }
}

/// Roster paired with the adapter its mutations persist through
pub struct RosterMut<'a, S: KeyValueStore> {
    roster: &'a mut Roster,
    persistence: &'a mut Persistence<S>,
}

impl<S: KeyValueStore> RosterMut<'_, S> {
    pub fn roster(&self) -> &Roster {
        self.roster
    }

    pub fn add_student(&mut self, data: NewStudent) -> Option<StudentId> {
        self.roster.add_student(data, self.persistence)
    }

    pub fn import_students(&mut self, candidates: Vec<NewStudent>) -> ImportReport {
        self.roster.import_students(candidates, self.persistence)
    }

    pub fn update_student(&mut self, record: Student) {
        self.roster.update_student(record, self.persistence);
    }

    pub fn delete_student(&mut self, id: StudentId) {
        self.roster.delete_student(id, self.persistence);
    }

    pub fn add_dta(&mut self, name: &str) -> bool {
        self.roster.add_dta(name, self.persistence)
    }

    pub fn set_attendance_history(&mut self, records: Vec<AttendanceRecord>) {
        self.roster.set_attendance_history(records, self.persistence);
    }

    pub fn set_students(&mut self, students: Vec<Student>) {
        self.roster.set_students(students, self.persistence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::model::AttendanceStatus;
    use crate::persistence::MemoryStore;
    use crate::seed;

    fn new_student(nis: &str, nisn: &str) -> NewStudent {
        NewStudent {
            nis: nis.into(),
            nisn: nisn.into(),
            name: format!("Student {nis}"),
            class_name: "2B".into(),
            dta: "Wustho".into(),
        }
    }

    #[test]
    fn test_fresh_store_uses_defaults() {
        let app = App::restore(MemoryStore::new());
        assert_eq!(app.session_state(), SessionState::LoggedOut);
        assert_eq!(app.roster().students(), seed::initial_students().as_slice());
        assert!(app.roster().attendance_history().is_empty());
        assert_eq!(app.roster().dta_list(), seed::initial_dta_list().as_slice());
    }

    #[test]
    fn test_view_is_gated_by_session() {
        let mut app = App::restore(MemoryStore::new());
        assert!(app.view().is_none());
        assert!(app.view_mut().is_none());

        app.login();
        assert!(app.view().is_some());
        let id = app.view_mut().and_then(|mut r| r.add_student(new_student("9001", "9002")));
        assert_eq!(id, Some(seed::initial_students().len() as StudentId + 1));

        app.logout();
        assert!(app.view().is_none());
    }

    #[test]
    fn test_set_students_goes_through_gate() {
        let mut app = App::restore(MemoryStore::new());
        let replacement = vec![Student::from_new(42, new_student("9001", "9002"))];

        assert!(app.view_mut().is_none());
        app.login();
        if let Some(mut roster) = app.view_mut() {
            roster.set_students(replacement.clone());
        }

        assert_eq!(app.roster().students(), replacement.as_slice());
        let app = App::restore(app.into_store());
        assert_eq!(app.roster().students(), replacement.as_slice());
    }

    #[test]
    fn test_state_survives_restore() {
        let mut app = App::restore(MemoryStore::new());
        app.login();
        {
            let mut roster = app.roster_mut();
            let id = roster.add_student(new_student("9001", "9002")).unwrap();
            roster.add_dta("Tahfidz");
            roster.set_attendance_history(vec![AttendanceRecord::new(
                id,
                "2024-08-01",
                AttendanceStatus::Hadir,
            )]);
        }
        let before = app.roster().clone();

        let app = App::restore(app.into_store());
        assert!(app.is_logged_in());
        assert_eq!(app.roster(), &before);
    }

    #[test]
    fn test_corrupt_keys_fall_back_independently() {
        let mut store = MemoryStore::new();
        store.set_item(KEY_LOGGED_IN, "tru").unwrap();
        store.set_item(KEY_ATTENDANCE_HISTORY, "{}").unwrap();
        store.set_item(KEY_DTA_LIST, r#"["A","B"]"#).unwrap();

        let app = App::restore(store);
        assert!(!app.is_logged_in());
        assert!(app.roster().attendance_history().is_empty());
        assert_eq!(app.roster().dta_list(), ["A".to_string(), "B".to_string()]);
        assert_eq!(app.roster().students(), seed::initial_students().as_slice());
    }

    #[test]
    fn test_unavailable_storage_still_works_in_memory() {
        let mut app = App::restore(MemoryStore::unavailable());
        app.login();
        assert!(app.is_logged_in());
        let id = app.roster_mut().add_student(new_student("9001", "9002")).unwrap();
        assert!(app.roster().student(id).is_some());
    }

    #[test]
    fn test_reset_restores_seed_and_logs_out() {
        let mut app = App::restore(MemoryStore::new());
        app.login();
        app.roster_mut().delete_student(1);
        app.reset();

        assert!(!app.is_logged_in());
        assert_eq!(app.roster(), &Roster::seeded());
        for key in ALL_KEYS {
            assert_eq!(app.persistence().store().get_item(key).unwrap(), None);
        }
    }
}
