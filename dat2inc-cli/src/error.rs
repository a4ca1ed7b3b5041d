use std::path::PathBuf;

use thiserror::Error;

use dat2inc_dat::DatError;

/// Errors that end a CLI run with a non-zero status.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Reading the DAT or writing the table failed
    #[error("{0}")]
    Dat(#[from] DatError),

    /// The output file could not be created
    #[error("Cannot create {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub(crate) fn create_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateOutput {
            path: path.into(),
            source,
        }
    }
}
