//! Batch conversion of an HTML directory tree into per-file text outputs.
//!
//! The orchestrator discovers `.html` files under a root, reads each one as
//! UTF-8, runs a fresh extraction session over it, and writes the resulting
//! chunks to `<output_dir>/<base name>.txt`, one chunk per line. Each file is
//! independent; in the default lenient mode a failing file is logged and
//! skipped without touching the rest of the run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::discover;
use crate::error::{Error, Result};
use crate::extract::{extract_with_options, ExtractOptions};

/// Output directory used when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "txt";

/// Options for batch conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Extraction options applied to every document.
    pub extract: ExtractOptions,

    /// Directory the `.txt` outputs are written into.
    pub output_dir: PathBuf,

    /// Error handling mode for per-file failures.
    pub error_mode: ErrorMode,

    /// Whether files are converted in parallel.
    pub parallel: bool,
}

impl ConvertOptions {
    /// Create new conversion options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Fail the whole run on the first per-file error.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            extract: ExtractOptions::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            error_mode: ErrorMode::Lenient,
            parallel: true,
        }
    }
}

/// Error handling mode for per-file failures during a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error.
    Strict,
    /// Log the failing file, skip it, and continue.
    #[default]
    Lenient,
}

/// Result of a batch conversion run.
#[derive(Debug, Default)]
pub struct ConvertSummary {
    /// Output paths written, in discovery order.
    pub converted: Vec<PathBuf>,

    /// Inputs skipped in lenient mode, with the error that sank each one.
    pub failed: Vec<(PathBuf, Error)>,
}

impl ConvertSummary {
    /// Number of files converted.
    pub fn converted_count(&self) -> usize {
        self.converted.len()
    }

    /// Number of files skipped.
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Whether every discovered file converted cleanly.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Map an input path to its output path.
///
/// Only the base name survives: `a/b/page.html` becomes
/// `<output_dir>/page.txt`. Directory structure is not preserved.
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".txt");
    output_dir.join(name)
}

/// Convert a single HTML file, returning the output path written.
///
/// Creates the output directory if absent. A fresh extraction session is
/// constructed for the document, so state from a previous file can never
/// leak in.
pub fn convert_file(input: &Path, options: &ConvertOptions) -> Result<PathBuf> {
    let html = read_html(input)?;
    let chunks = extract_with_options(&html, options.extract.clone());

    fs::create_dir_all(&options.output_dir)?;
    let output = output_path(input, &options.output_dir);
    write_lines(&output, &chunks)?;

    log::info!(
        "converted {} -> {} ({} chunks)",
        input.display(),
        output.display(),
        chunks.len()
    );
    Ok(output)
}

/// Convert every `.html` file under `root`.
///
/// The output directory is created once before any writes. Per-file failures
/// follow [`ConvertOptions::error_mode`]; traversal failures (unreadable
/// root or subdirectory) end the run in either mode.
pub fn convert_dir(root: &Path, options: &ConvertOptions) -> Result<ConvertSummary> {
    let inputs: Vec<PathBuf> = discover::html_files(root)?.collect::<io::Result<_>>()?;
    fs::create_dir_all(&options.output_dir)?;

    log::info!(
        "converting {} HTML files under {}",
        inputs.len(),
        root.display()
    );

    match options.error_mode {
        ErrorMode::Strict => {
            // Collecting into Result short-circuits: no new files are
            // started once an error has surfaced.
            let converted: Vec<PathBuf> = if options.parallel {
                inputs
                    .par_iter()
                    .map(|input| convert_file(input, options))
                    .collect::<Result<_>>()?
            } else {
                inputs
                    .iter()
                    .map(|input| convert_file(input, options))
                    .collect::<Result<_>>()?
            };
            Ok(ConvertSummary {
                converted,
                failed: Vec::new(),
            })
        }
        ErrorMode::Lenient => {
            let outcomes: Vec<(PathBuf, Result<PathBuf>)> = if options.parallel {
                inputs
                    .into_par_iter()
                    .map(|input| {
                        let outcome = convert_file(&input, options);
                        (input, outcome)
                    })
                    .collect()
            } else {
                inputs
                    .into_iter()
                    .map(|input| {
                        let outcome = convert_file(&input, options);
                        (input, outcome)
                    })
                    .collect()
            };

            let mut summary = ConvertSummary::default();
            for (input, outcome) in outcomes {
                match outcome {
                    Ok(output) => summary.converted.push(output),
                    Err(e) => {
                        log::warn!("skipping {}: {}", input.display(), e);
                        summary.failed.push((input, e));
                    }
                }
            }
            Ok(summary)
        }
    }
}

fn read_html(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(html) => Ok(html),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(Error::NonUtf8 {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(Error::Read {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn write_lines(path: &Path, chunks: &[String]) -> Result<()> {
    let mut content = String::with_capacity(chunks.iter().map(|c| c.len() + 1).sum());
    for chunk in chunks {
        content.push_str(chunk);
        content.push('\n');
    }
    fs::write(path, content).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_drops_directories() {
        let out = output_path(Path::new("corpus/a/b/page.html"), Path::new("txt"));
        assert_eq!(out, PathBuf::from("txt/page.txt"));
    }

    #[test]
    fn test_output_path_keeps_inner_dots() {
        let out = output_path(Path::new("index.v2.html"), Path::new("txt"));
        assert_eq!(out, PathBuf::from("txt/index.v2.txt"));
    }

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .with_output_dir("out")
            .strict()
            .sequential();

        assert_eq!(options.output_dir, PathBuf::from("out"));
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(options.parallel);
    }
}
