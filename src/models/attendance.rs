use serde::{Deserialize, Deserializer, Serialize};

/// Presence state of one student in one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Presence {
    Present, // 1
    Absent,  // 0
}

impl Presence {
    pub fn is_present(&self) -> bool {
        matches!(self, Presence::Present)
    }

    /// Convert enum → DB integer
    pub fn to_db(&self) -> i64 {
        match self {
            Presence::Present => 1,
            Presence::Absent => 0,
        }
    }

    /// Helper: convert input code from CLI (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "1" | "p" | "present" | "true" | "yes" | "y" => Some(Presence::Present),
            "0" | "a" | "absent" | "false" | "no" | "n" => Some(Presence::Absent),
            _ => None,
        }
    }
}

impl From<bool> for Presence {
    fn from(b: bool) -> Self {
        if b { Presence::Present } else { Presence::Absent }
    }
}

/// One `{reg_no, is_present}` pair of a mark-attendance batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttendanceMark {
    pub reg_no: String,
    #[serde(deserialize_with = "bool_or_flag")]
    pub is_present: bool,
}

impl AttendanceMark {
    pub fn new(reg_no: impl Into<String>, presence: Presence) -> Self {
        Self {
            reg_no: reg_no.into(),
            is_present: presence.is_present(),
        }
    }

    /// Parse a CLI entry of the form `REG_NO=STATE`.
    pub fn parse_entry(entry: &str) -> Option<Self> {
        let (reg_no, state) = entry.rsplit_once('=')?;
        let reg_no = reg_no.trim();
        if reg_no.is_empty() {
            return None;
        }
        Presence::from_code(state).map(|p| AttendanceMark::new(reg_no, p))
    }
}

/// Accept `true`/`false` as well as the integers `1`/`0`.
fn bool_or_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(1) => Ok(true),
        Flag::Int(0) => Ok(false),
        Flag::Int(other) => Err(serde::de::Error::custom(format!(
            "is_present must be a boolean, 0 or 1 (got {})",
            other
        ))),
    }
}

/// Outcome of a mark-attendance batch: each pair is applied on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkOutcome {
    pub period_id: i64,
    pub saved: usize,
    pub rejected: Vec<String>,
}

/// Cumulative attendance of one student.
///
/// `total_classes` counts the periods for which a mark exists for this
/// student, not the periods scheduled for the student's class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceSummary {
    pub reg_no: String,
    pub student_name: String,
    pub total_classes: i64,
    pub attended_classes: i64,
    pub attendance_percentage: f64,
}

impl AttendanceSummary {
    pub fn new(reg_no: String, student_name: String, total: i64, attended: i64) -> Self {
        Self {
            reg_no,
            student_name,
            total_classes: total,
            attended_classes: attended,
            attendance_percentage: percentage(attended, total),
        }
    }
}

/// `attended * 100 / total` rounded to two decimals (ties to even), `0.0`
/// when nothing was marked.
pub fn percentage(attended: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let raw = attended as f64 * 100.0 / total as f64;
    (raw * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_two_decimals() {
        assert_eq!(percentage(2, 3), 66.67);
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(3, 3), 100.0);
        assert_eq!(percentage(0, 4), 0.0);
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(percentage(1, 32), 3.12);
        assert_eq!(percentage(5, 32), 15.62);
        assert_eq!(percentage(1, 160), 0.62);
        assert_eq!(percentage(3, 32), 9.38);
    }

    #[test]
    fn percentage_is_zero_without_marks() {
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn presence_codes() {
        assert_eq!(Presence::from_code("P"), Some(Presence::Present));
        assert_eq!(Presence::from_code(" absent "), Some(Presence::Absent));
        assert_eq!(Presence::from_code("1"), Some(Presence::Present));
        assert_eq!(Presence::from_code("maybe"), None);
        assert_eq!(Presence::Present.to_db(), 1);
        assert_eq!(Presence::from(false), Presence::Absent);
    }

    #[test]
    fn cli_entries() {
        let m = AttendanceMark::parse_entry("21CS001=p").expect("entry");
        assert_eq!(m.reg_no, "21CS001");
        assert!(m.is_present);

        assert!(AttendanceMark::parse_entry("21CS001").is_none());
        assert!(AttendanceMark::parse_entry("=1").is_none());
        assert!(AttendanceMark::parse_entry("21CS001=x").is_none());
    }

    #[test]
    fn marks_accept_bool_or_integer_flags() {
        let m: AttendanceMark =
            serde_json::from_str(r#"{"reg_no":"A","is_present":1}"#).expect("int flag");
        assert!(m.is_present);
        let m: AttendanceMark =
            serde_json::from_str(r#"{"reg_no":"A","is_present":false}"#).expect("bool flag");
        assert!(!m.is_present);

        assert!(serde_json::from_str::<AttendanceMark>(r#"{"reg_no":"A","is_present":2}"#).is_err());
        assert!(serde_json::from_str::<AttendanceMark>(r#"{"reg_no":"A"}"#).is_err());
    }
}
