use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::store::{DefinitionStore, StoreError};

/// a store backed by a single JSON object file, one entry per key. every
/// write rewrites the whole file. a missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> JsonFileStore {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("store file {} does not exist yet", self.path.display());
                return Ok(Map::new());
            }
            Err(e) => return Err(self.read_error(e)),
        };
        let contents: Value =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| self.read_error(e))?;
        match contents {
            Value::Object(map) => Ok(map),
            other => Err(StoreError::ReadError {
                filepath: self.path.display().to_string(),
                error: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
        }
    }

    fn write_all(&self, values: &Map<String, Value>) -> Result<(), StoreError> {
        let write_error = |e: &dyn std::fmt::Display| StoreError::WriteError {
            filepath: self.path.display().to_string(),
            error: e.to_string(),
        };
        // the new contents replace the file only once completely written
        let tmp_path = self.tmp_path();
        let written = File::create(&tmp_path)
            .map_err(|e| write_error(&e))
            .and_then(|file| {
                let mut writer = BufWriter::new(file);
                serde_json::to_writer_pretty(&mut writer, values).map_err(|e| write_error(&e))?;
                writer.flush().map_err(|e| write_error(&e))?;
                writer
                    .into_inner()
                    .map_err(|e| write_error(&e))?
                    .sync_all()
                    .map_err(|e| write_error(&e))
            })
            .and_then(|_| std::fs::rename(&tmp_path, &self.path).map_err(|e| write_error(&e)));
        if written.is_err() {
            let _ = std::fs::remove_file(&tmp_path);
        }
        written
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn read_error(&self, e: impl std::fmt::Display) -> StoreError {
        StoreError::ReadError {
            filepath: self.path.display().to_string(),
            error: e.to_string(),
        }
    }
}

impl DefinitionStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let mut values = self.read_all()?;
        Ok(values.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value);
        self.write_all(&values)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
