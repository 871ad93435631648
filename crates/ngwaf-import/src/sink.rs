//! Append-only destinations for import plan entries

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use ngwaf_import_types::{ImportError, ImportPlanDocument, ImportPlanEntry, ImportResult};
use tracing::debug;

/// Append-only sink for import plan entries
///
/// Each call receives one resource kind's complete batch. Implementations
/// must make the batch durable before returning and must never rewrite or
/// truncate what earlier calls appended.
pub trait PlanSink {
    /// Append one batch of entries
    fn append(&mut self, entries: &[ImportPlanEntry]) -> ImportResult<()>;

    /// Where entries end up, for log messages
    fn describe(&self) -> String;
}

/// Sink backed by an HCL file, e.g. `import.tf`
///
/// The file is opened in append mode for each batch and closed again before
/// `append` returns, so no handle outlives a batch.
#[derive(Debug, Clone)]
pub struct FilePlanSink {
    path: PathBuf,
}

impl FilePlanSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_failure(&self, source: std::io::Error) -> ImportError {
        ImportError::WriteFailure {
            path: self.path.clone(),
            source,
        }
    }
}

impl PlanSink for FilePlanSink {
    fn append(&mut self, entries: &[ImportPlanEntry]) -> ImportResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_failure(e))?;

        file.write_all(ImportPlanDocument::render(entries).as_bytes())
            .map_err(|e| self.write_failure(e))?;
        file.flush().map_err(|e| self.write_failure(e))?;
        file.sync_all().map_err(|e| self.write_failure(e))?;

        debug!(
            "Appended {} import blocks to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory sink that records every batch it receives
#[derive(Debug, Clone, Default)]
pub struct MemoryPlanSink {
    pub document: ImportPlanDocument,
    /// Size of each appended batch, in call order
    pub batches: Vec<usize>,
}

impl MemoryPlanSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlanSink for MemoryPlanSink {
    fn append(&mut self, entries: &[ImportPlanEntry]) -> ImportResult<()> {
        if entries.is_empty() {
            return Ok(());
        }
        self.batches.push(entries.len());
        self.document.extend(entries.iter().cloned());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
