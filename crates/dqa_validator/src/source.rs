//! Line-oriented dataset sources.
//!
//! A source can be opened any number of times; the reference pre-pass and
//! the validation pass each read it from the start.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A newline-delimited dataset that can be read from the beginning.
pub trait LineSource {
    /// Display name used in logs and in orphan-reference messages.
    fn name(&self) -> String;

    /// Opens a fresh reader positioned at the first line.
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>>;
}

/// Splits a reader into raw lines.
///
/// Lines are bytes, not strings, so undecodable content reaches the
/// validators as an ordinary line. The `\n` terminator and a trailing `\r`
/// are removed. Only I/O failures surface as errors.
pub fn split_lines(reader: impl BufRead) -> impl Iterator<Item = io::Result<Vec<u8>>> {
    reader.split(b'\n').map(|line| {
        line.map(|mut bytes| {
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            bytes
        })
    })
}

/// A dataset stored in a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(BufReader::new(File::open(&self.path)?)))
    }
}

/// A dataset held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    content: String,
}

impl MemorySource {
    /// Creates an in-memory source.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Builds a source from individual lines.
    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let content = lines
            .into_iter()
            .map(|line| format!("{}\n", line.as_ref()))
            .collect::<String>();
        Self::new(name, content)
    }
}

impl LineSource for MemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(self.content.as_bytes()))
    }
}
