//! Settings store backed by a JSON file in a shared directory.
//!
//! Both the interactive application and the widget host open the same
//! `<dir>/<namespace>.json`. Reads go to disk every time so each side sees
//! the other's writes; writes replace the file atomically. There is no
//! cross-process locking and the last writer wins.
//!
//! Failures never reach the caller: they are logged and the store behaves
//! as if the key were absent (reads) or the write never happened.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use randgen_core::error::DomainError;
use randgen_core::settings::{SettingKey, SettingValue, SettingsStore};
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "group.randgen.shared";

type RawSettings = BTreeMap<String, Value>;

/// JSON-file settings store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: Option<PathBuf>,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens the namespace under `dir`, creating `dir` if needed.
    ///
    /// If the namespace name is unusable or the directory cannot be created,
    /// the store is returned in the unavailable state.
    pub fn open(dir: impl AsRef<Path>, namespace: &str) -> Self {
        let dir = dir.as_ref();
        let path = if !is_valid_namespace(namespace) {
            warn!(namespace, "invalid settings namespace, using defaults");
            None
        } else if let Err(err) = fs::create_dir_all(dir) {
            warn!(
                dir = %dir.display(),
                error = %err,
                "settings namespace unavailable, using defaults"
            );
            None
        } else {
            Some(dir.join(format!("{namespace}.json")))
        };

        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Whether the namespace could be opened.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.path.is_some()
    }

    /// The backing file, when available.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl SettingsStore for JsonFileStore {
    fn read(&self, key: SettingKey) -> Option<SettingValue> {
        let path = self.path.as_deref()?;
        match load(path) {
            Ok(mut raw) => raw.remove(key.as_str()).and_then(from_json),
            Err(err) => {
                warn!(%key, error = %err, "settings read failed, using default");
                None
            }
        }
    }

    fn write(&self, key: SettingKey, value: SettingValue) {
        let Some(path) = self.path.as_deref() else {
            debug!(%key, "settings namespace unavailable, write dropped");
            return;
        };
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut raw = load(path).unwrap_or_else(|err| {
            warn!(error = %err, "replacing unreadable settings file");
            RawSettings::new()
        });
        raw.insert(key.as_str().to_owned(), to_json(value));

        if let Err(err) = persist(path, &raw) {
            warn!(%key, error = %err, "settings write failed");
        }
    }
}

fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty()
        && !namespace.starts_with('.')
        && namespace
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

fn load(path: &Path) -> Result<RawSettings, DomainError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(RawSettings::new()),
        Err(err) => {
            return Err(DomainError::Infrastructure(format!(
                "failed to read {}: {err}",
                path.display()
            )));
        }
    };
    serde_json::from_str(&content).map_err(|err| {
        DomainError::Infrastructure(format!("failed to parse {}: {err}", path.display()))
    })
}

/// Writes to a uniquely named temp file in the same directory and renames
/// it over `path`. Each writer gets its own temp file, so a reader in either
/// process never sees a half-written file, even while both are writing.
fn persist(path: &Path, raw: &RawSettings) -> Result<(), DomainError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|err| {
        DomainError::Infrastructure(format!(
            "failed to create temp file in {}: {err}",
            dir.display()
        ))
    })?;
    serde_json::to_writer_pretty(&mut tmp, raw)
        .map_err(|err| DomainError::Infrastructure(format!("failed to encode settings: {err}")))?;
    tmp.persist(path).map_err(|err| {
        DomainError::Infrastructure(format!("failed to replace {}: {err}", path.display()))
    })?;
    Ok(())
}

fn from_json(value: Value) -> Option<SettingValue> {
    match value {
        Value::Number(n) => n.as_i64().map(SettingValue::Int),
        Value::String(s) => Some(SettingValue::Text(s)),
        _ => None,
    }
}

fn to_json(value: SettingValue) -> Value {
    match value {
        SettingValue::Int(v) => Value::from(v),
        SettingValue::Text(s) => Value::from(s),
    }
}
