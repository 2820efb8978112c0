use crate::core::required_text;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_class, load_classes};
use crate::errors::AppResult;
use crate::models::Class;

/// Business logic for classes.
pub struct ClassLogic;

impl ClassLogic {
    /// Create a class. Fails with `DuplicateKey` when `class_id` is taken;
    /// the existing row is left untouched.
    pub fn create(
        pool: &mut DbPool,
        class_id: i64,
        class_name: &str,
        department: Option<&str>,
    ) -> AppResult<Class> {
        let class = Class {
            class_id,
            class_name: required_text("class_name", class_name)?,
            department: department.map(|d| d.trim().to_string()).unwrap_or_default(),
        };

        insert_class(&pool.conn, &class)?;

        audit(
            &pool.conn,
            "add_class",
            &format!("class {}", class.class_id),
            &format!("Class '{}' added", class.class_name),
        );

        Ok(class)
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Vec<Class>> {
        load_classes(&pool.conn)
    }
}
