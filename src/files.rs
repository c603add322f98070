//! Reading and writing documents as newline-terminated lines.
//!
//! Files are treated as raw bytes. On read, each line loses its trailing
//! `\n` and any `\r` before it; on write, every line gets a `\n`, so a
//! saved file always ends with a newline.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::editor::Line;

/// File access failure, naming the file involved.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read `path` into lines.
///
/// Returns `Ok(None)` if the file does not exist. An empty file yields no
/// lines.
///
/// # Errors
///
/// Returns [`FileError::Read`] for any other I/O failure.
pub fn read_lines(path: &Path) -> Result<Option<Vec<Line>>, FileError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(FileError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    Ok(Some(split_lines(&bytes)))
}

/// Split raw file contents into lines, dropping line terminators.
pub fn split_lines(bytes: &[u8]) -> Vec<Line> {
    bytes
        .split_inclusive(|&b| b == b'\n')
        .map(|chunk| {
            let end = chunk
                .iter()
                .rposition(|&b| b != b'\n' && b != b'\r')
                .map_or(0, |i| i + 1);
            Line::from_bytes(&chunk[..end])
        })
        .collect()
}

/// Write each line followed by `\n`, replacing `path`.
///
/// # Errors
///
/// Returns [`FileError::Write`] if the file cannot be created or written.
pub fn write_lines<'a>(
    path: &Path,
    lines: impl IntoIterator<Item = &'a [u8]>,
) -> Result<(), FileError> {
    let wrap = |source| FileError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(wrap)?);
    for line in lines {
        out.write_all(line).map_err(wrap)?;
        out.write_all(b"\n").map_err(wrap)?;
    }
    out.flush().map_err(wrap)
}
