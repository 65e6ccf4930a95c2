use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{infra::error::AppError, usecases::contracts::DeliveryLog};

/// Appends delivery lines to a text file, creating it on first use.
///
/// The file is reopened in append mode for every batch. There is no
/// locking: one writer per file is assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDeliveryLog {
    path: PathBuf,
}

impl FileDeliveryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> AppError {
        AppError::DeliveryLogWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl DeliveryLog for FileDeliveryLog {
    fn append(&self, lines: &[String]) -> Result<(), AppError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.write_error(source))?;

        for line in lines {
            writeln!(file, "{line}").map_err(|source| self.write_error(source))?;
        }

        file.flush().map_err(|source| self.write_error(source))
    }
}
