//! Bulk import of students from a delimited table.
//!
//! The first row is a header. Each following row with at least three fields
//! becomes `(reg_no, student_name, class_id)`; shorter rows are dropped
//! without being counted.

use crate::core::students::StudentLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::ImportTally;
use csv::{ReaderBuilder, StringRecord, Trim};

pub struct ImportLogic;

impl ImportLogic {
    /// Decode the payload into raw records. Undecodable text or a malformed
    /// record fails the whole import before anything is written.
    pub fn decode(bytes: &[u8], delimiter: u8) -> AppResult<Vec<StringRecord>> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| AppError::DecodeFailure(format!("content is not valid UTF-8 ({})", e)))?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(delimiter)
            .from_reader(text.as_bytes());

        let mut out = Vec::new();
        for rec in rdr.records() {
            out.push(rec.map_err(|e| AppError::DecodeFailure(e.to_string()))?);
        }
        Ok(out)
    }

    /// Import students from `bytes`.
    ///
    /// Rows with a non-integer class_id, a blank field or an already used
    /// reg_no are counted as skipped; the rest of the batch still goes in.
    pub fn import_students(
        pool: &mut DbPool,
        bytes: &[u8],
        delimiter: u8,
        strict: bool,
    ) -> AppResult<ImportTally> {
        let records = Self::decode(bytes, delimiter)?;

        let tally = pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let mut tally = ImportTally::default();

            for rec in records.iter().filter(|r| r.len() >= 3) {
                let row = rec[2]
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| {
                        AppError::InvalidInput(format!("class_id '{}' is not an integer", &rec[2]))
                    })
                    .and_then(|class_id| StudentLogic::build(&rec[0], &rec[1], class_id))
                    .and_then(|student| StudentLogic::insert(&tx, &student, strict));

                match row {
                    Ok(()) => tally.added += 1,
                    Err(AppError::DuplicateKey(_)) | Err(AppError::InvalidInput(_)) => {
                        tally.skipped += 1
                    }
                    Err(e) => return Err(e),
                }
            }

            tx.commit()?;
            Ok(tally)
        })?;

        audit(
            &pool.conn,
            "import_students",
            "students",
            &format!(
                "{} students added successfully, {} skipped (duplicates or errors)",
                tally.added, tally.skipped
            ),
        );

        Ok(tally)
    }
}
