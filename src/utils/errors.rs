use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

pub type ResultWithError<T> = Result<T, GenError>;
pub type EmptyResult = ResultWithError<()>;

/// Everything that can stop a generation run.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("{0}")]
    Usage(String),

    #[error("No {} file", .0.display())]
    MissingTemplate(PathBuf),

    #[error("Output directory does not exist: {} (use --create-dirs to create it)", .0.display())]
    MissingOutputDir(PathBuf),

    #[error("Invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Could not read template {}: {source}", path.display())]
    ReadTemplate { path: PathBuf, source: io::Error },

    #[error("Could not write {}: {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error("Could not create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
}

impl GenError {
    pub fn is_usage(&self) -> bool {
        matches!(self, GenError::Usage(_))
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_usage() { 2 } else { 1 }
    }
}

/// Attaches the offending path to raw I/O failures.
pub trait ResultTrait<T> {
    fn read_err(self, path: &Path) -> ResultWithError<T>;
    fn write_err(self, path: &Path) -> ResultWithError<T>;
    fn create_dir_err(self, path: &Path) -> ResultWithError<T>;
}

impl<T> ResultTrait<T> for Result<T, io::Error> {
    fn read_err(self, path: &Path) -> ResultWithError<T> {
        self.map_err(|source| GenError::ReadTemplate {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_err(self, path: &Path) -> ResultWithError<T> {
        self.map_err(|source| GenError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
    }

    fn create_dir_err(self, path: &Path) -> ResultWithError<T> {
        self.map_err(|source| GenError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
    }
}
