//! Test-only helpers: problems files, scripted stdin, captured stdout.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

/// Write `contents` to `problems.csv` under `dir` and return its path.
pub fn write_problems(dir: &Path, contents: &str) -> Result<PathBuf> {
    let path = dir.join("problems.csv");
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Input that delivers each chunk only after its delay has elapsed.
///
/// Simulates a user who types slowly. Reaches EOF after the last chunk.
pub struct ScriptedInput {
    chunks: VecDeque<(Duration, Vec<u8>)>,
    current: Vec<u8>,
    pos: usize,
}

impl ScriptedInput {
    pub fn new(chunks: Vec<(Duration, &str)>) -> Self {
        Self {
            chunks: chunks
                .into_iter()
                .map(|(delay, text)| (delay, text.as_bytes().to_vec()))
                .collect(),
            current: Vec::new(),
            pos: 0,
        }
    }
}

impl Read for ScriptedInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for ScriptedInput {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        while self.pos >= self.current.len() {
            match self.chunks.pop_front() {
                Some((delay, bytes)) => {
                    thread::sleep(delay);
                    self.current = bytes;
                    self.pos = 0;
                }
                None => return Ok(&[]),
            }
        }
        Ok(&self.current[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.current.len());
    }
}

/// Cloneable in-memory writer whose contents stay readable after the
/// session that wrote to it has returned.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        let bytes = match self.bytes.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .bytes
            .lock()
            .map_err(|_| io::Error::other("buffer lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
