//! Reads expression files, evaluates them, and writes one result file per
//! input.
//!
//! Each input `name.txt` produces `<output_dir>/name_<tag>.txt` holding the
//! formatted value or `ERROR:<position>`, followed by a newline. Inputs are
//! independent, so they are evaluated in parallel.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::{
    config::BatchOptions,
    error::BatchError,
    evaluate_with,
    interpreter::{parser::core::EvalResult, value::core::Value, value::format::render},
};

/// Extension of files picked up from an input directory.
pub const INPUT_EXTENSION: &str = "txt";

/// Name used when a path has no usable file stem.
const FALLBACK_STEM: &str = "input";

/// Where inputs come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A single expression file.
    File(PathBuf),
    /// Every `*.txt` file directly inside a directory.
    Dir(PathBuf),
}

/// The outcome of evaluating one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    /// The file that was read.
    pub input:  PathBuf,
    /// The file that was written.
    pub output: PathBuf,
    /// The evaluation result written to `output`.
    pub result: EvalResult<Value>,
}

/// Lists the `*.txt` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into.
///
/// # Errors
/// Returns `BatchError::Walk` if the directory cannot be read.
pub fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let mut inputs = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1)
                                  .max_depth(1)
                                  .sort_by_file_name()
    {
        let entry = entry.map_err(|source| BatchError::Walk { path: dir.to_path_buf(),
                                                              source })?;
        if entry.file_type().is_file()
           && entry.path().extension().is_some_and(|ext| ext == INPUT_EXTENSION)
        {
            inputs.push(entry.into_path());
        }
    }
    Ok(inputs)
}

/// Returns the directory results for `source` are written to.
///
/// An explicit `options.output_dir` wins. Otherwise the directory is
/// `<stem>_<user>_<tag>`, where `<stem>` is the input file stem or the input
/// directory name.
///
/// # Example
/// ```
/// use std::path::{Path, PathBuf};
///
/// use calc::{
///     batch::{InputSource, output_dir_for},
///     config::BatchOptions,
/// };
///
/// let options = BatchOptions { user: "ada".to_string(),
///                              ..BatchOptions::default() };
/// let source = InputSource::File(PathBuf::from("work/task1.txt"));
/// assert_eq!(output_dir_for(&source, &options), Path::new("task1_ada_calc"));
/// ```
#[must_use]
pub fn output_dir_for(source: &InputSource, options: &BatchOptions) -> PathBuf {
    if let Some(dir) = &options.output_dir {
        return dir.clone();
    }
    let path = match source {
        InputSource::File(path) | InputSource::Dir(path) => path,
    };
    PathBuf::from(format!("{}_{}_{}", stem_of(path), options.user, options.tag))
}

/// Returns the result file name for `input`: `<stem>_<tag>.txt`.
///
/// # Example
/// ```
/// use std::path::Path;
///
/// use calc::batch::output_file_name;
///
/// assert_eq!(output_file_name(Path::new("in/task1.txt"), "calc"), "task1_calc.txt");
/// ```
#[must_use]
pub fn output_file_name(input: &Path, tag: &str) -> String {
    format!("{}_{tag}.{INPUT_EXTENSION}", stem_of(input))
}

/// Resolves `source` into the list of files to evaluate.
///
/// # Errors
/// Returns `BatchError::Walk` if an input directory cannot be listed.
pub fn resolve_inputs(source: &InputSource) -> Result<Vec<PathBuf>, BatchError> {
    match source {
        InputSource::File(path) => Ok(vec![path.clone()]),
        InputSource::Dir(dir) => collect_inputs(dir),
    }
}

/// Evaluates one file and writes its result file into `output_dir`.
///
/// An expression that fails to evaluate is not an error here: its
/// `ERROR:<position>` line is written like any other result.
///
/// # Errors
/// Returns `BatchError::Read` or `BatchError::Write` on I/O failure.
pub fn process_file(input: &Path,
                    output_dir: &Path,
                    options: &BatchOptions)
                    -> Result<FileReport, BatchError> {
    let source = fs::read(input).map_err(|source| BatchError::Read { path: input.to_path_buf(),
                                                                   source })?;
    let result = evaluate_with(&source, &options.eval);
    match &result {
        Ok(value) => debug!(input = %input.display(), %value, "evaluated"),
        Err(err) => warn!(input = %input.display(), position = err.position, kind = %err.kind, "evaluation failed"),
    }

    let output = output_dir.join(output_file_name(input, &options.tag));
    fs::write(&output, render(&result)).map_err(|source| BatchError::Write { path: output.clone(),
                                                                            source })?;
    info!(output = %output.display(), "wrote result");

    Ok(FileReport { input: input.to_path_buf(),
                    output,
                    result })
}

/// Evaluates every input and writes the results into `output_dir`, creating
/// it if needed.
///
/// Files are processed in parallel. Reports come back in input order, one per
/// input, so one unreadable file does not stop the others.
///
/// # Errors
/// Returns `BatchError::CreateDir` if the output directory cannot be created.
pub fn run(inputs: &[PathBuf],
           output_dir: &Path,
           options: &BatchOptions)
           -> Result<Vec<Result<FileReport, BatchError>>, BatchError> {
    fs::create_dir_all(output_dir).map_err(|source| BatchError::CreateDir { path: output_dir.to_path_buf(),
                                                                           source })?;
    debug!(count = inputs.len(), output_dir = %output_dir.display(), "processing inputs");

    Ok(inputs.par_iter()
             .map(|input| process_file(input, output_dir, options))
             .collect())
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| FALLBACK_STEM.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn options_in(dir: &Path) -> BatchOptions {
        BatchOptions { output_dir: Some(dir.join("out")),
                       tag: "t".to_string(),
                       user: "u".to_string(),
                       ..BatchOptions::default() }
    }

    #[test]
    fn derived_output_dir_uses_directory_name() {
        let options = BatchOptions { user: "u".to_string(),
                                     tag: "t".to_string(),
                                     ..BatchOptions::default() };
        let source = InputSource::Dir(PathBuf::from("data/batch"));
        assert_eq!(output_dir_for(&source, &options), PathBuf::from("batch_u_t"));
    }

    #[test]
    fn explicit_output_dir_wins() {
        let options = BatchOptions { output_dir: Some(PathBuf::from("results")),
                                     ..BatchOptions::default() };
        let source = InputSource::File(PathBuf::from("a.txt"));
        assert_eq!(output_dir_for(&source, &options), PathBuf::from("results"));
    }

    #[test]
    fn stemless_paths_fall_back() {
        assert_eq!(output_file_name(Path::new(".."), "t"), "input_t.txt");
    }

    #[test]
    fn collects_only_top_level_txt_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "2").unwrap();
        fs::write(dir.path().join("a.txt"), "1").unwrap();
        fs::write(dir.path().join("notes.md"), "3").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.txt"), "4").unwrap();

        let inputs = collect_inputs(dir.path()).unwrap();
        assert_eq!(inputs, vec![dir.path().join("a.txt"), dir.path().join("b.txt")]);
    }

    #[test]
    fn run_writes_one_result_per_input() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("bad.txt");
        fs::write(&good, "# sum\n3 + 4\n").unwrap();
        fs::write(&bad, "5 / (2 - 2)").unwrap();
        let options = options_in(dir.path());
        let out = options.output_dir.clone().unwrap();

        let reports = run(&[good, bad], &out, &options).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(fs::read_to_string(out.join("good_t.txt")).unwrap(), "7\n");
        assert_eq!(fs::read_to_string(out.join("bad_t.txt")).unwrap(), "ERROR:3\n");
        let bad_report = reports[1].as_ref().unwrap();
        assert_eq!(bad_report.result.unwrap_err().kind, ErrorKind::DivisionByZero);
    }

    #[test]
    fn unreadable_input_is_reported_without_stopping_others() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "1").unwrap();
        let missing = dir.path().join("missing.txt");
        let options = options_in(dir.path());
        let out = options.output_dir.clone().unwrap();

        let reports = run(&[missing, good], &out, &options).unwrap();

        assert!(matches!(reports[0], Err(BatchError::Read { .. })));
        assert!(reports[1].is_ok());
    }
}
