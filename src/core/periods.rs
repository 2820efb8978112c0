use crate::core::required_text;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_period, load_periods};
use crate::errors::{AppError, AppResult};
use crate::models::Period;
use crate::utils::date::normalize_date;

/// Business logic for periods (one class session each).
pub struct PeriodLogic;

impl PeriodLogic {
    /// Create a period and return it with its generated id.
    ///
    /// No uniqueness is enforced on (class, date, number).
    pub fn create(
        pool: &mut DbPool,
        class_id: i64,
        subject_name: &str,
        period_date: &str,
        period_number: i64,
    ) -> AppResult<Period> {
        let subject_name = required_text("subject_name", subject_name)?;
        let period_date = normalize_date(period_date).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "period_date '{}' is not a YYYY-MM-DD calendar date",
                period_date
            ))
        })?;
        if period_number < 1 {
            return Err(AppError::InvalidInput(format!(
                "period_number must be a positive integer (got {})",
                period_number
            )));
        }

        let period_id = insert_period(
            &pool.conn,
            class_id,
            &subject_name,
            &period_date,
            period_number,
        )?;

        audit(
            &pool.conn,
            "add_period",
            &format!("period {}", period_id),
            &format!(
                "Period {} of {} created for class {} ({})",
                period_number, period_date, class_id, subject_name
            ),
        );

        Ok(Period {
            period_id,
            class_id,
            subject_name,
            period_date,
            period_number,
        })
    }

    pub fn list(pool: &mut DbPool, class_id: Option<i64>) -> AppResult<Vec<Period>> {
        load_periods(&pool.conn, class_id)
    }
}
