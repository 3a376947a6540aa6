//! Line-oriented answer input with one reader thread per question.
//!
//! Each call to [`AnswerReader::spawn_answer`] creates a fresh single-use
//! channel. The session owns the only receiver; once it stops waiting and
//! drops the receiver, whatever the reader thread produces later is discarded
//! and cannot reach the session.

use std::io::BufRead;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

use tracing::{debug, warn};

/// Shared handle to the user's input stream.
pub struct AnswerReader<R> {
    input: Arc<Mutex<R>>,
    discarded: Arc<AtomicUsize>,
}

impl<R: BufRead + Send + 'static> AnswerReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: Arc::new(Mutex::new(input)),
            discarded: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Block for one line and ignore its content.
    ///
    /// EOF and read errors are tolerated; the quiz starts regardless.
    pub fn read_start_signal(&self) {
        match read_line(&*self.input) {
            Some(_) => debug!("start signal received"),
            None => warn!("input closed before start signal"),
        }
    }

    /// Start reading one answer on a dedicated thread.
    ///
    /// The answer is the first whitespace-delimited token of the next line,
    /// or an empty string for a blank line. On EOF or a read error the sender
    /// is dropped without sending, which the receiver sees as a disconnect.
    pub fn spawn_answer(&self) -> Receiver<String> {
        let (tx, rx) = mpsc::channel();
        let input = Arc::clone(&self.input);
        let discarded = Arc::clone(&self.discarded);
        thread::spawn(move || {
            let Some(line) = read_line(&*input) else {
                return;
            };
            let answer = first_token(&line).to_string();
            if tx.send(answer).is_err() {
                discarded.fetch_add(1, Ordering::SeqCst);
                debug!("answer arrived after its question was abandoned; discarded");
            }
        });
        rx
    }

    /// Number of answers that arrived after their question was abandoned.
    pub fn discarded(&self) -> usize {
        self.discarded.load(Ordering::SeqCst)
    }
}

fn read_line<R: BufRead>(input: &Mutex<R>) -> Option<String> {
    let mut guard = match input.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    let mut line = String::new();
    match guard.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(err) => {
            warn!(err = %err, "failed to read input");
            None
        }
    }
}

fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}
