use crate::errors::{AppError, AppResult};
use crate::models::AttendanceMark;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// One request line of the JSON service.
#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    #[serde(default)]
    pub id: serde_json::Value,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

impl Request {
    /// Decode `params` into the typed request of a method.
    /// Absent params are read as an empty object.
    pub fn parse<T: DeserializeOwned>(&self) -> AppResult<T> {
        let params = if self.params.is_null() {
            serde_json::Value::Object(Default::default())
        } else {
            self.params.clone()
        };
        serde_json::from_value(params)
            .map_err(|e| AppError::InvalidInput(format!("{}: {}", self.method, e)))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateClass {
    pub class_id: i64,
    pub class_name: String,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateStudent {
    pub reg_no: String,
    pub student_name: String,
    pub class_id: i64,
}

/// Optional class filter shared by the student and period listings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassFilter {
    #[serde(default)]
    pub class_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportStudents {
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePeriod {
    pub class_id: i64,
    pub subject_name: String,
    pub period_date: String,
    pub period_number: i64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkAttendance {
    pub period_id: i64,
    pub attendance: Vec<AttendanceMark>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentRef {
    pub reg_no: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn req(method: &str, params: serde_json::Value) -> Request {
        Request {
            id: json!("1"),
            method: method.to_string(),
            params,
        }
    }

    #[test]
    fn missing_required_field_is_invalid_input() {
        let r = req("classes.create", json!({ "class_name": "CSE-A" }));
        let err = r.parse::<CreateClass>().expect_err("class_id is required");
        assert!(matches!(err, AppError::InvalidInput(ref m) if m.contains("class_id")));
    }

    #[test]
    fn wrong_type_is_invalid_input() {
        let r = req(
            "students.create",
            json!({ "reg_no": "21CS001", "student_name": "Ann", "class_id": "ten" }),
        );
        assert!(matches!(
            r.parse::<CreateStudent>(),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn null_params_read_as_empty_object() {
        let r = req("students.list", serde_json::Value::Null);
        let f: ClassFilter = r.parse().expect("empty filter");
        assert!(f.class_id.is_none());
    }

    #[test]
    fn attendance_batch_decodes_integer_flags() {
        let r = req(
            "attendance.mark",
            json!({
                "period_id": 1,
                "attendance": [
                    { "reg_no": "21CS001", "is_present": 1 },
                    { "reg_no": "21CS002", "is_present": 0 }
                ]
            }),
        );
        let m: MarkAttendance = r.parse().expect("batch");
        assert_eq!(m.attendance.len(), 2);
        assert!(m.attendance[0].is_present);
        assert!(!m.attendance[1].is_present);
    }
}
