//! Sequence sources that hold an external resource.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::Sequence;

/// Open `path` and return a sequence over its lines, without line
/// terminators.
///
/// The file is closed as soon as the lines are exhausted, after the first
/// read error, or when the sequence is dropped, whichever comes first.
pub fn lines(path: impl AsRef<Path>) -> io::Result<Sequence<Lines>> {
    let path = path.as_ref().to_path_buf();
    let file = File::open(&path)?;
    trace!(path = %path.display(), "opened");
    Ok(Sequence::new(Lines::new(path, BufReader::new(file))))
}

/// The lines of a file. See [`lines`].
pub struct Lines<R = BufReader<File>> {
    path: PathBuf,
    lines: Option<io::Lines<R>>,
}

impl<R> Lines<R> {
    fn new(path: PathBuf, reader: R) -> Self
    where
        R: BufRead,
    {
        Self {
            path,
            lines: Some(reader.lines()),
        }
    }

    /// Is the file still open?
    pub fn is_open(&self) -> bool {
        self.lines.is_some()
    }

    fn close(&mut self) {
        if self.lines.take().is_some() {
            trace!(path = %self.path.display(), "closed");
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.lines.as_mut()?.next();
        match next {
            Some(Ok(line)) => Some(Ok(line)),
            Some(Err(e)) => {
                self.close();
                Some(Err(e))
            }
            None => {
                self.close();
                None
            }
        }
    }
}

impl<R> Drop for Lines<R> {
    fn drop(&mut self) {
        self.close();
    }
}
