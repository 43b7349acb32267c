//! JS-facing handle for the web UI
//!
//! The UI owns exactly one handle; every call goes through `&mut self`, so
//! there is a single path to the state. Data crosses the boundary as JSON
//! strings in the same shapes that are written to LocalStorage.

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use super::LocalStorage;
use crate::app::App;
use crate::model::{AttendanceRecord, NewStudent, Student};
use crate::summary;

#[wasm_bindgen]
pub struct AbsensiHandle {
    app: App<LocalStorage>,
}

#[wasm_bindgen]
impl AbsensiHandle {
    /// Restore state from LocalStorage
    #[wasm_bindgen(constructor)]
    pub fn new() -> AbsensiHandle {
        Self {
            app: App::restore(LocalStorage::open()),
        }
    }

    #[wasm_bindgen(js_name = isLoggedIn)]
    pub fn is_logged_in(&self) -> bool {
        self.app.is_logged_in()
    }

    pub fn login(&mut self) {
        self.app.login();
    }

    pub fn logout(&mut self) {
        self.app.logout();
    }

    /// Student list as JSON (`[]` while logged out)
    pub fn students(&self) -> String {
        self.app
            .view()
            .map(|r| to_json(&r.students()))
            .unwrap_or_else(|| "[]".to_string())
    }

    #[wasm_bindgen(js_name = attendanceHistory)]
    pub fn attendance_history(&self) -> String {
        self.app
            .view()
            .map(|r| to_json(&r.attendance_history()))
            .unwrap_or_else(|| "[]".to_string())
    }

    #[wasm_bindgen(js_name = dtaList)]
    pub fn dta_list(&self) -> String {
        self.app
            .view()
            .map(|r| to_json(&r.dta_list()))
            .unwrap_or_else(|| "[]".to_string())
    }

    /// Add one student from form JSON; returns the new id
    #[wasm_bindgen(js_name = addStudent)]
    pub fn add_student(&mut self, json: &str) -> Option<u32> {
        let data: NewStudent = from_json("addStudent", json)?;
        self.app.view_mut().and_then(|mut r| r.add_student(data))
    }

    /// Import a parsed file's rows; returns the import report as JSON
    #[wasm_bindgen(js_name = importStudents)]
    pub fn import_students(&mut self, json: &str) -> Option<String> {
        let candidates: Vec<NewStudent> = from_json("importStudents", json)?;
        self.app
            .view_mut()
            .map(|mut r| to_json(&r.import_students(candidates)))
    }

    #[wasm_bindgen(js_name = updateStudent)]
    pub fn update_student(&mut self, json: &str) {
        if let Some(record) = from_json::<Student>("updateStudent", json) {
            if let Some(mut roster) = self.app.view_mut() {
                roster.update_student(record);
            }
        }
    }

    /// Replace the whole student list; no id or NIS/NISN rule is applied
    #[wasm_bindgen(js_name = setStudents)]
    pub fn set_students(&mut self, json: &str) {
        if let Some(students) = from_json::<Vec<Student>>("setStudents", json) {
            if let Some(mut roster) = self.app.view_mut() {
                roster.set_students(students);
            }
        }
    }

    #[wasm_bindgen(js_name = deleteStudent)]
    pub fn delete_student(&mut self, id: u32) {
        if let Some(mut roster) = self.app.view_mut() {
            roster.delete_student(id);
        }
    }

    #[wasm_bindgen(js_name = addDta)]
    pub fn add_dta(&mut self, name: &str) -> bool {
        self.app
            .view_mut()
            .map(|mut r| r.add_dta(name))
            .unwrap_or(false)
    }

    /// Replace the whole attendance history
    #[wasm_bindgen(js_name = setAttendanceHistory)]
    pub fn set_attendance_history(&mut self, json: &str) {
        if let Some(records) = from_json::<Vec<AttendanceRecord>>("setAttendanceHistory", json) {
            if let Some(mut roster) = self.app.view_mut() {
                roster.set_attendance_history(records);
            }
        }
    }

    /// Status counts for one date, as JSON keyed by status name
    #[wasm_bindgen(js_name = summaryForDate)]
    pub fn summary_for_date(&self, date: &str) -> String {
        let history = self
            .app
            .view()
            .map(|r| r.attendance_history())
            .unwrap_or_default();
        to_json(&summary::summarize_date(history, date))
    }

    /// Clear saved data and return to the seed roster
    pub fn reset(&mut self) {
        self.app.reset();
    }

    /// Today's local date as `YYYY-MM-DD`
    pub fn today() -> String {
        let now = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date()
        )
    }
}

impl Default for AbsensiHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("Could not encode response: {}", e);
        "null".to_string()
    })
}

fn from_json<T: DeserializeOwned>(call: &str, json: &str) -> Option<T> {
    match serde_json::from_str(json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("{}: ignoring malformed input: {}", call, e);
            None
        }
    }
}
