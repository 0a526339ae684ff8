//! Record file load/save helpers with schema + invariant validation.
//!
//! The file is a JSON array of records. [`RecordStore`] plays the persistence
//! collaborator on top of it: approved commands are applied to the file, which
//! is the source of truth the next refresh reads back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::invariants::validate_invariants;
use crate::core::types::{Record, Role, Status, UserId};
use crate::io::collaborator::Collaborator;

const RECORDS_SCHEMA: &str = include_str!("../../schemas/records/v1.schema.json");

/// Load and validate a record set from disk (schema + invariants).
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    debug!(path = %path.display(), "loading records");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read records {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse records {}", path.display()))?;
    validate_schema(&value).with_context(|| format!("validate records {}", path.display()))?;
    let records: Vec<Record> = serde_json::from_value(value)
        .with_context(|| format!("deserialize records {}", path.display()))?;
    validate_record_invariants(&records)?;
    debug!(count = records.len(), "records loaded");
    Ok(records)
}

/// Atomically write a record set to disk (temp file + rename).
pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    debug!(path = %path.display(), count = records.len(), "writing records");
    let mut buf = serde_json::to_string_pretty(records).context("serialize records")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("records path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp records {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace records {}", path.display()))?;
    Ok(())
}

fn validate_schema(records: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(RECORDS_SCHEMA).context("parse records schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(records) {
        let messages = compiled
            .iter_errors(records)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "records schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

fn validate_record_invariants(records: &[Record]) -> Result<()> {
    let errors = validate_invariants(records);
    if errors.is_empty() {
        return Ok(());
    }
    Err(anyhow!("record invariants failed: {}", errors.join("; ")))
}

/// File-backed persistence collaborator.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Vec<Record>> {
        load_records(&self.path)
    }

    fn update(&self, apply: impl FnOnce(&mut Vec<Record>) -> Result<()>) -> Result<()> {
        let mut records = self.load()?;
        apply(&mut records)?;
        write_records(&self.path, &records)
    }
}

impl Collaborator for RecordStore {
    fn edit_user(&mut self, record: &Record) -> Result<()> {
        self.update(|records| {
            let stored = records
                .iter_mut()
                .find(|stored| stored.id == record.id)
                .ok_or_else(|| anyhow!("user not found with id: {}", record.id))?;
            *stored = record.clone();
            Ok(())
        })?;
        info!(id = record.id, "user edited");
        Ok(())
    }

    /// Records are keyed by role and id; a role mismatch is "not found".
    /// The terminal rule is re-checked against the stored status.
    fn change_status(&mut self, id: UserId, status: Status, role: Role) -> Result<()> {
        self.update(|records| {
            let stored = records
                .iter_mut()
                .find(|stored| stored.id == id && stored.role == role)
                .ok_or_else(|| anyhow!("{} not found with id: {}", role, id))?;
            if stored.status.is_terminal() {
                bail!("terminated users cannot be modified again");
            }
            stored.status = status;
            Ok(())
        })?;
        info!(id, %status, %role, "user status changed");
        Ok(())
    }

    fn delete_user(&mut self, id: UserId) -> Result<()> {
        self.update(|records| {
            let index = records
                .iter()
                .position(|stored| stored.id == id)
                .ok_or_else(|| anyhow!("user not found with id: {}", id))?;
            records.remove(index);
            Ok(())
        })?;
        info!(id, "user deleted");
        Ok(())
    }
}
