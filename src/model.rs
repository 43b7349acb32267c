//! Roster data types
//!
//! JSON shapes match what the browser app has always written to storage:
//! camelCase fields and display-string statuses.

use serde::{Deserialize, Deserializer, Serialize};

/// Container-assigned student identifier
pub type StudentId = u32;

/// Attendance status for a student on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AttendanceStatus {
    /// Present
    Hadir,
    /// Excused
    Izin,
    /// Sick
    Sakit,
    /// Absent without excuse
    Alfa,
    /// Not yet recorded for the day
    #[default]
    #[serde(rename = "Belum Diabsen")]
    BelumDiabsen,
}

impl AttendanceStatus {
    /// Every status, in display order
    pub const ALL: [AttendanceStatus; 5] = [
        AttendanceStatus::Hadir,
        AttendanceStatus::Izin,
        AttendanceStatus::Sakit,
        AttendanceStatus::Alfa,
        AttendanceStatus::BelumDiabsen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Hadir => "Hadir",
            AttendanceStatus::Izin => "Izin",
            AttendanceStatus::Sakit => "Sakit",
            AttendanceStatus::Alfa => "Alfa",
            AttendanceStatus::BelumDiabsen => "Belum Diabsen",
        }
    }
}

/// Student data as supplied by the add form or an import source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    #[serde(deserialize_with = "string_or_number")]
    pub nis: String,
    #[serde(deserialize_with = "string_or_number")]
    pub nisn: String,
    #[serde(default)]
    pub name: String,
    /// Class name (NAMA KELAS)
    #[serde(default)]
    pub class_name: String,
    /// Category / group (NAMA DTA)
    #[serde(default)]
    pub dta: String,
}

/// A student on the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    #[serde(deserialize_with = "string_or_number")]
    pub nis: String,
    #[serde(deserialize_with = "string_or_number")]
    pub nisn: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub dta: String,
    /// Current (latest) attendance status
    #[serde(default)]
    pub status: AttendanceStatus,
}

impl Student {
    /// Build a roster entry from form/import data; status starts unrecorded
    pub fn from_new(id: StudentId, data: NewStudent) -> Self {
        Self {
            id,
            nis: data.nis,
            nisn: data.nisn,
            name: data.name,
            class_name: data.class_name,
            dta: data.dta,
            status: AttendanceStatus::BelumDiabsen,
        }
    }
}

/// One day's attendance for one student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub student_id: StudentId,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn new(student_id: StudentId, date: impl Into<String>, status: AttendanceStatus) -> Self {
        Self {
            student_id,
            date: date.into(),
            status,
        }
    }
}

/// Spreadsheet importers hand over NIS/NISN as numbers; store them as strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_json_uses_display_strings() {
        let json = serde_json::to_string(&AttendanceStatus::BelumDiabsen).unwrap();
        assert_eq!(json, "\"Belum Diabsen\"");

        let parsed: AttendanceStatus = serde_json::from_str("\"Belum Diabsen\"").unwrap();
        assert_eq!(parsed, AttendanceStatus::BelumDiabsen);

        let parsed: AttendanceStatus = serde_json::from_str("\"Sakit\"").unwrap();
        assert_eq!(parsed, AttendanceStatus::Sakit);
    }

    #[test]
    fn test_student_json_is_camel_case() {
        let student = Student::from_new(
            7,
            NewStudent {
                nis: "1".into(),
                nisn: "10".into(),
                name: "A".into(),
                class_name: "1A".into(),
                dta: "X".into(),
            },
        );
        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(value["className"], "1A");
        assert_eq!(value["status"], "Belum Diabsen");
        assert!(value.get("class_name").is_none());

        let record = AttendanceRecord::new(7, "2024-08-01", AttendanceStatus::Hadir);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["studentId"], 7);
    }

    #[test]
    fn test_numeric_identifiers_become_strings() {
        let json = r#"{"nis": 12345, "nisn": "0098765", "name": "Budi", "className": "7B", "dta": "Ula"}"#;
        let data: NewStudent = serde_json::from_str(json).unwrap();
        assert_eq!(data.nis, "12345");
        assert_eq!(data.nisn, "0098765");
    }

    #[test]
    fn test_rows_missing_text_fields_still_parse() {
        let json = r#"[{"nis": 1, "nisn": 2, "name": "Tanpa Kelas"}, {"nis": "3", "nisn": "4"}]"#;
        let rows: Vec<NewStudent> = serde_json::from_str(json).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Tanpa Kelas");
        assert_eq!(rows[0].class_name, "");
        assert_eq!(rows[0].dta, "");
        assert_eq!(rows[1].name, "");

        let stored = r#"{"id": 5, "nis": "1", "nisn": "2", "name": "D", "status": "Izin"}"#;
        let student: Student = serde_json::from_str(stored).unwrap();
        assert_eq!(student.dta, "");
        assert_eq!(student.status, AttendanceStatus::Izin);
    }

    #[test]
    fn test_student_missing_status_defaults_to_unrecorded() {
        let json = r#"{"id": 3, "nis": "1", "nisn": "2", "name": "C", "className": "1A", "dta": "X"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.status, AttendanceStatus::BelumDiabsen);
    }
}
