//! Absensi - student attendance tracker
//!
//! Core modules:
//! - `model`: Students, attendance records and statuses
//! - `persistence`: Key/value store adapter with fall-back-to-default semantics
//! - `roster`: Domain state container (students, history, DTA list)
//! - `session`: Login/logout gate
//! - `app`: Ties the above together and restores state at startup
//! - `platform`: Browser/native platform abstraction

pub mod app;
pub mod model;
pub mod persistence;
pub mod platform;
pub mod roster;
pub mod seed;
pub mod session;
pub mod summary;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use app::App;
pub use model::{AttendanceRecord, AttendanceStatus, NewStudent, Student, StudentId};
pub use persistence::{KeyValueStore, MemoryStore, Persistence, StoreError};
pub use roster::{ImportReport, Roster};
pub use session::{Session, SessionState};
pub use summary::AttendanceSummary;

/// Storage keys, one per persisted collection
pub mod consts {
    /// Session flag (`true` / `false`)
    pub const KEY_LOGGED_IN: &str = "isLoggedIn";
    /// Student list
    pub const KEY_STUDENTS: &str = "students";
    /// Attendance history
    pub const KEY_ATTENDANCE_HISTORY: &str = "attendanceHistory";
    /// DTA (category) list
    pub const KEY_DTA_LIST: &str = "dtaList";

    /// Every key the app owns, in restore order
    pub const ALL_KEYS: [&str; 4] = [
        KEY_LOGGED_IN,
        KEY_STUDENTS,
        KEY_ATTENDANCE_HISTORY,
        KEY_DTA_LIST,
    ];
}
