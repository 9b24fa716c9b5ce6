use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents all the ways the export pipeline can fail.
///
/// Every failure is terminal and a deterministic function of the input:
/// nothing here is transient, so callers should report rather than retry.
#[derive(Error, Debug)]
pub enum Error {
    /// The export file does not exist.
    #[error("export file not found: {path}")]
    SourceNotFound {
        /// The path that was opened.
        path: PathBuf,
    },
    /// The export file exists but reading it failed.
    #[error("unable to read export file {path}")]
    SourceRead {
        /// The path that was read.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file was read but its bytes do not conform to the export schema.
    ///
    /// Reported distinctly from read failures so callers can say "corrupt
    /// or wrong-format file" rather than "file missing or unreadable".
    #[error("not a valid workflow export: {path}")]
    Decode {
        /// The path the bytes came from.
        path: PathBuf,
        #[source]
        source: prost::DecodeError,
    },
    /// The export decoded successfully but contains no workflow history.
    #[error("export contains no workflow history")]
    EmptyExport,
    /// The export contains more than one workflow history.
    ///
    /// One history per invocation is a policy of this tool, not a limit of
    /// the container format.
    #[error("export contains {0} workflow histories; provide exactly one")]
    MultipleHistories(usize),
}
