use serde::{Deserialize, Serialize};

/// A class (root entity). `class_id` is assigned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub class_id: i64,      // ⇔ classes.class_id (INTEGER PRIMARY KEY)
    pub class_name: String, // ⇔ classes.class_name (TEXT NOT NULL)
    pub department: String, // ⇔ classes.department (TEXT, '' when not given)
}
