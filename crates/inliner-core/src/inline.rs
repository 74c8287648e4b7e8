//! Building the asset table from files on disk and writing the module.

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::assets::{AssetTable, PLACEHOLDER_KEY};
use crate::config::InlineConfig;
use crate::data_url::DataUrl;
use crate::emit::{write_module, DEFAULT_IDENTIFIER};
use crate::error::{AssetError, InlineError, Result};
use crate::mime::mime_for_path;

/// Outcome of one inlining run.
#[derive(Debug)]
pub struct InlineReport {
    /// Paths that made it into the table, in input order.
    pub inlined: Vec<String>,
    /// Paths that were skipped, in input order.
    pub skipped: Vec<AssetError>,
    /// Where the module was written. Empty until the table is written.
    pub output: PathBuf,
}

impl InlineReport {
    pub fn inlined_count(&self) -> usize {
        self.inlined.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// True when every input path was inlined.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Read one file and turn it into a data URL.
pub fn inline_asset(path: &str) -> std::result::Result<DataUrl, AssetError> {
    if path == PLACEHOLDER_KEY {
        return Err(AssetError::Reserved {
            path: path.to_string(),
        });
    }
    if !Path::new(path).exists() {
        return Err(AssetError::NotFound {
            path: path.to_string(),
        });
    }

    let mime = mime_for_path(path);
    let data = fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_string(),
        source,
    })?;
    Ok(DataUrl::new(mime, data))
}

/// Inline every path in order, skipping the ones that fail.
///
/// Failures are logged and collected into the report; they never stop the
/// remaining paths from being processed.
pub fn collect_data_urls<I, S>(paths: I) -> (AssetTable, InlineReport)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = AssetTable::new();
    let mut report = InlineReport {
        inlined: Vec::new(),
        skipped: Vec::new(),
        output: PathBuf::new(),
    };

    for path in paths {
        let path = path.as_ref();
        match inline_asset(path) {
            Ok(url) => {
                log::debug!("inlined {path} as {} ({} bytes)", url.mime(), url.data().len());
                // inline_asset already refused the placeholder key
                if table.insert(path, url.to_string()).is_ok() && !report.inlined.iter().any(|p| p == path) {
                    report.inlined.push(path.to_string());
                }
            }
            Err(e) => {
                match &e {
                    AssetError::NotFound { .. } => log::warn!("{e}"),
                    AssetError::Read { .. } | AssetError::Reserved { .. } => log::error!("{e}"),
                }
                report.skipped.push(e);
            }
        }
    }

    (table, report)
}

/// Inline `paths` and write the module to `output` as `const dataUrls = ...;`.
///
/// The output file is created or truncated. Only a failure to write it is
/// returned as an error.
pub fn make_data_urls<I, S>(paths: I, output: impl AsRef<Path>) -> Result<InlineReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    emit_to_file(paths, output.as_ref(), DEFAULT_IDENTIFIER)
}

/// Run [`make_data_urls`] from a configuration.
pub fn make_data_urls_with(config: &InlineConfig) -> Result<InlineReport> {
    config.validate()?;
    emit_to_file(&config.inputs, &config.output, &config.identifier)
}

fn emit_to_file<I, S>(paths: I, output: &Path, identifier: &str) -> Result<InlineReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (table, mut report) = collect_data_urls(paths);

    let write_err = |source| InlineError::Write {
        path: output.to_path_buf(),
        source,
    };
    let file = fs::File::create(output).map_err(write_err)?;
    write_module(&table, identifier, BufWriter::new(file)).map_err(write_err)?;

    log::info!("CREATED: {}", output.display());
    report.output = output.to_path_buf();
    Ok(report)
}
