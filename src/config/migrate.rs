use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry.
pub const EXPECTED_KEYS: [&str; 3] = ["database", "strict_references", "import_delimiter"];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top-level value must be a mapping",
            path.display()
        ))),
    }
}

/// List the expected keys that are absent from the configuration file.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(EXPECTED_KEYS
        .iter()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .copied()
        .collect())
}

/// Add missing keys with their default value, keeping every existing entry.
///   Returns the keys that were added (empty → file untouched).
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let missing = missing_keys(path)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    let mut map = read_mapping(path)?;
    let defaults = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(e.to_string()))?;

    for key in &missing {
        let k = Value::String(key.to_string());
        if let Some(v) = defaults.get(*key) {
            map.insert(k, v.clone());
        }
    }

    let serialized =
        serde_yaml::to_string(&Value::Mapping(map)).map_err(|e| AppError::Config(e.to_string()))?;
    fs::write(path, serialized)?;

    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_conf(name: &str, content: &str) -> std::path::PathBuf {
        let p = std::env::temp_dir().join(format!("{}_rattendance.conf", name));
        fs::write(&p, content).expect("write conf");
        p
    }

    #[test]
    fn reports_and_fills_missing_keys() {
        let p = temp_conf("cfg_migrate_fill", "database: /tmp/x.sqlite\n");

        assert_eq!(
            missing_keys(&p).expect("check"),
            vec!["strict_references", "import_delimiter"]
        );

        let added = fill_missing_keys(&p).expect("fill");
        assert_eq!(added.len(), 2);
        assert!(missing_keys(&p).expect("recheck").is_empty());

        let cfg: Config =
            serde_yaml::from_str(&fs::read_to_string(&p).expect("read")).expect("parse");
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert!(!cfg.strict_references);

        fs::remove_file(&p).ok();
    }
}
