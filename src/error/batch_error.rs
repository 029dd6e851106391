use std::{io, path::PathBuf};

#[derive(Debug)]
/// Represents all errors that can occur while reading inputs or writing
/// results.
pub enum BatchError {
    /// An input file could not be read.
    Read {
        /// The file that failed.
        path:   PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The output directory could not be created.
    CreateDir {
        /// The directory that failed.
        path:   PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A result file could not be written.
    Write {
        /// The file that failed.
        path:   PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The input directory could not be listed.
    Walk {
        /// The directory being listed.
        path:   PathBuf,
        /// The underlying traversal error.
        source: walkdir::Error,
    },
    /// Neither an input file nor an input directory was given.
    NoInputs,
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "Failed to read '{}': {source}", path.display())
            },
            Self::CreateDir { path, source } => {
                write!(f, "Failed to create directory '{}': {source}", path.display())
            },
            Self::Write { path, source } => {
                write!(f, "Failed to write '{}': {source}", path.display())
            },
            Self::Walk { path, source } => {
                write!(f, "Failed to list '{}': {source}", path.display())
            },
            Self::NoInputs => write!(f, "No input file or directory given."),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::CreateDir { source, .. } | Self::Write { source, .. } => {
                Some(source)
            },
            Self::Walk { source, .. } => Some(source),
            Self::NoInputs => None,
        }
    }
}
