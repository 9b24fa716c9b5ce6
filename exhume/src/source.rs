//! Byte-source loading for export files.
use std::path::Path;
use std::{fs, io};

use crate::Error;

/// Reads the entire source into memory.
///
/// The export format is not designed for streaming: decode always sees the
/// full buffer, so the single read here is the only I/O the pipeline
/// performs. A missing file is reported distinctly from every other read
/// failure.
pub(crate) fn read_source(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::SourceRead {
            path: path.to_path_buf(),
            source,
        },
    })
}
