use super::requests::{
    ClassFilter, CreateClass, CreatePeriod, CreateStudent, ImportStudents, MarkAttendance,
    Request, StudentRef,
};
use super::response::{err, from_app_error, ok};
use crate::config::Config;
use crate::core::{AttendanceReport, ClassLogic, ImportLogic, MarkLogic, PeriodLogic, StudentLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use serde_json::json;

/// Successful handler result: status code and JSON body.
type Reply = AppResult<(u16, serde_json::Value)>;

fn handle_health(cfg: &Config, _req: &Request) -> Reply {
    Ok((
        200,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "database": cfg.database,
        }),
    ))
}

fn handle_classes_create(cfg: &Config, req: &Request) -> Reply {
    let p: CreateClass = req.parse()?;
    let mut pool = DbPool::new(&cfg.database)?;
    ClassLogic::create(&mut pool, p.class_id, &p.class_name, p.department.as_deref())?;
    Ok((201, json!({ "message": "Class added" })))
}

fn handle_classes_list(cfg: &Config, _req: &Request) -> Reply {
    let mut pool = DbPool::new(&cfg.database)?;
    let classes = ClassLogic::list(&mut pool)?;
    Ok((200, serde_json::to_value(classes)?))
}

fn handle_students_create(cfg: &Config, req: &Request) -> Reply {
    let p: CreateStudent = req.parse()?;
    let mut pool = DbPool::new(&cfg.database)?;
    StudentLogic::create(
        &mut pool,
        &p.reg_no,
        &p.student_name,
        p.class_id,
        cfg.strict_references,
    )?;
    Ok((201, json!({ "message": "Student added" })))
}

fn handle_students_list(cfg: &Config, req: &Request) -> Reply {
    let p: ClassFilter = req.parse()?;
    let mut pool = DbPool::new(&cfg.database)?;
    let students = StudentLogic::list(&mut pool, p.class_id)?;
    Ok((200, serde_json::to_value(students)?))
}

fn handle_students_import(cfg: &Config, req: &Request) -> Reply {
    let p: ImportStudents = req.parse()?;
    let Some(file) = p.file else {
        return Err(AppError::InvalidInput("No file provided".to_string()));
    };
    if file.trim().is_empty() {
        return Err(AppError::InvalidInput("No file selected".to_string()));
    }

    let bytes = std::fs::read(&file)
        .map_err(|e| AppError::InvalidInput(format!("cannot read '{}': {}", file, e)))?;
    let mut pool = DbPool::new(&cfg.database)?;
    let tally =
        ImportLogic::import_students(&mut pool, &bytes, cfg.delimiter()?, cfg.strict_references)?;

    Ok((
        201,
        json!({
            "message": format!(
                "{} students added successfully, {} skipped (duplicates or errors)",
                tally.added, tally.skipped
            ),
            "added": tally.added,
            "skipped": tally.skipped,
        }),
    ))
}

fn handle_periods_create(cfg: &Config, req: &Request) -> Reply {
    let p: CreatePeriod = req.parse()?;
    let mut pool = DbPool::new(&cfg.database)?;
    let period = PeriodLogic::create(
        &mut pool,
        p.class_id,
        &p.subject_name,
        &p.period_date,
        p.period_number,
    )?;
    Ok((
        201,
        json!({ "message": "Period created", "period_id": period.period_id }),
    ))
}

fn handle_periods_list(cfg: &Config, req: &Request) -> Reply {
    let p: ClassFilter = req.parse()?;
    let mut pool = DbPool::new(&cfg.database)?;
    let periods = PeriodLogic::list(&mut pool, p.class_id)?;
    Ok((200, serde_json::to_value(periods)?))
}

fn handle_attendance_mark(cfg: &Config, req: &Request) -> Reply {
    let p: MarkAttendance = req.parse()?;
    let mut pool = DbPool::new(&cfg.database)?;
    let outcome = MarkLogic::apply(&mut pool, p.period_id, &p.attendance, cfg.strict_references)?;
    Ok((
        200,
        json!({
            "message": "Attendance saved",
            "saved": outcome.saved,
            "rejected": outcome.rejected,
        }),
    ))
}

fn handle_attendance_get(cfg: &Config, req: &Request) -> Reply {
    let p: StudentRef = req.parse()?;
    let mut pool = DbPool::new(&cfg.database)?;
    let summary = AttendanceReport::for_student(&mut pool, &p.reg_no)?;
    Ok((200, serde_json::to_value(summary)?))
}

/// Dispatch one request. Every outcome, including failures, is a response
/// value carrying the request id.
pub fn handle_request(cfg: &Config, req: &Request) -> serde_json::Value {
    let handler: fn(&Config, &Request) -> Reply = match req.method.as_str() {
        "health" => handle_health,
        "classes.create" => handle_classes_create,
        "classes.list" => handle_classes_list,
        "students.create" => handle_students_create,
        "students.list" => handle_students_list,
        "students.import" => handle_students_import,
        "periods.create" => handle_periods_create,
        "periods.list" => handle_periods_list,
        "attendance.mark" => handle_attendance_mark,
        "attendance.get" => handle_attendance_get,
        _ => {
            return err(
                &req.id,
                404,
                "not_implemented",
                format!("unknown method: {}", req.method),
            );
        }
    };

    match handler(cfg, req) {
        Ok((status, result)) => ok(&req.id, status, result),
        Err(e) => from_app_error(&req.id, &e),
    }
}
