//! Absensi entry point
//!
//! On the web the UI drives `AbsensiHandle`; this only sets up logging.
//! Natively it restores the file-backed state and prints the roster.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    absensi::platform::init_logging();
    log::info!("Absensi starting...");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use absensi::config::Config;
    use absensi::persistence::{FileStore, MemoryStore};

    absensi::platform::init_logging();
    log::info!("Absensi (native) starting...");

    let config = Config::from_env();
    match FileStore::open(&config.data_dir) {
        Ok(store) => print_roster(&absensi::App::restore(store)),
        Err(e) => {
            log::error!(
                "Could not open data directory {}: {}",
                config.data_dir.display(),
                e
            );
            log::warn!("Falling back to in-memory storage");
            print_roster(&absensi::App::restore(MemoryStore::new()));
        }
    }
}

/// Roster grouped by DTA, then today's status counts
#[cfg(not(target_arch = "wasm32"))]
fn print_roster<S: absensi::KeyValueStore>(app: &absensi::App<S>) {
    use absensi::AttendanceStatus;
    use absensi::summary::{group_by_dta, summarize_current};

    let roster = app.roster();
    println!(
        "Session: {:?}, {} students, {} attendance records",
        app.session_state(),
        roster.students().len(),
        roster.attendance_history().len()
    );

    for group in group_by_dta(roster.students(), roster.dta_list()) {
        println!("\n{} ({})", group.dta, group.students.len());
        for s in group.students {
            println!(
                "  {:>4}  {:<10} {:<12} {:<24} {:<6} {}",
                s.id,
                s.nis,
                s.nisn,
                s.name,
                s.class_name,
                s.status.as_str()
            );
        }
    }

    let summary = summarize_current(roster.students());
    println!();
    for status in AttendanceStatus::ALL {
        println!("{:<14} {}", status.as_str(), summary.count(status));
    }
}
