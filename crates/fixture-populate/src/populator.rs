//! Generates provider documents and writes them to disk.

use crate::error::PopulateError;
use fixture_generator::{FixtureGenerator, Provider};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// File name of every provider fixture.
pub const FIXTURE_FILE_NAME: &str = "db.json";

/// Default buffer size for fixture writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from writing one provider file.
#[derive(Debug, Clone)]
pub struct PersistMetrics {
    pub provider: Provider,
    pub path: PathBuf,
    pub items_written: usize,
    pub file_size_bytes: u64,
    pub total_duration: Duration,
}

/// `<output_dir>/provider-N/db.json`
pub fn provider_path(output_dir: &Path, provider: Provider) -> PathBuf {
    output_dir.join(provider.dir_name()).join(FIXTURE_FILE_NAME)
}

/// Serialize `document` as 2-space indented JSON to `path`, replacing any existing file.
///
/// The parent directory must already exist. Returns the written size in bytes.
pub fn persist<T: Serialize + ?Sized, P: AsRef<Path>>(
    document: &T,
    path: P,
) -> Result<u64, PopulateError> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|e| PopulateError::io(path, e))?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    // write failures inside the serializer are still I/O errors
    serde_json::to_writer_pretty(&mut writer, document).map_err(|e| {
        if e.is_io() {
            PopulateError::io(path, e.into())
        } else {
            PopulateError::Json(e)
        }
    })?;
    writer.flush().map_err(|e| PopulateError::io(path, e))?;
    drop(writer);

    let size = std::fs::metadata(path)
        .map_err(|e| PopulateError::io(path, e))?
        .len();
    debug!("Wrote {} bytes to '{}'", size, path.display());
    Ok(size)
}

/// Writes provider fixtures under a root directory.
pub struct FixturePopulator {
    generator: FixtureGenerator,
    output_dir: PathBuf,
    create_dirs: bool,
}

impl FixturePopulator {
    pub fn new(generator: FixtureGenerator, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            generator,
            output_dir: output_dir.into(),
            create_dirs: false,
        }
    }

    /// Create missing `provider-N` directories before writing.
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Generate and write the fixture of a single provider.
    pub fn populate(&self, provider: Provider) -> Result<PersistMetrics, PopulateError> {
        let start_time = Instant::now();
        let path = provider_path(&self.output_dir, provider);

        if self.create_dirs {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| PopulateError::io(parent, e))?;
            }
        }

        let document = self.generator.generate(provider);
        let items_written = document.item_count();
        let file_size_bytes = persist(&document, &path)?;

        let metrics = PersistMetrics {
            provider,
            path,
            items_written,
            file_size_bytes,
            total_duration: start_time.elapsed(),
        };
        info!(
            "{}: wrote {} items ({} bytes) to '{}' in {:?}",
            provider,
            metrics.items_written,
            metrics.file_size_bytes,
            metrics.path.display(),
            metrics.total_duration
        );
        Ok(metrics)
    }

    /// Populate providers one after another in the given order.
    ///
    /// Stops at the first failure. Files written before the failure are kept.
    pub fn populate_all(&self, providers: &[Provider]) -> Result<Vec<PersistMetrics>, PopulateError> {
        info!(
            "Generating {} provider fixtures with {} items each (seed={:?})",
            providers.len(),
            self.generator.item_count(),
            self.generator.seed()
        );

        providers
            .iter()
            .map(|provider| self.populate(*provider))
            .collect()
    }
}
