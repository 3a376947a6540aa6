//! Timed quiz session: presents questions and races each answer against one
//! session-wide deadline.
//!
//! The deadline is fixed when the user signals readiness and is never reset
//! between questions. Each question gets its own answer channel; when the
//! deadline wins the race the receiver is dropped, so a late answer has
//! nowhere to go and cannot touch the tally.

use std::io::{BufRead, Write};
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, instrument, warn};

use crate::core::question::QuestionStore;
use crate::core::score::{Tally, format_score};
use crate::io::input::AnswerReader;

pub const START_PROMPT: &str = "Press enter to start quiz";

/// Terminal state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every question in the order was answered before the deadline.
    Completed,
    /// The deadline fired (or input closed) before the order was exhausted.
    TimedOut,
}

/// Final tally of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub end: SessionEnd,
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

impl SessionOutcome {
    fn new(end: SessionEnd, tally: &Tally) -> Self {
        Self {
            end,
            correct: tally.correct(),
            answered: tally.answered(),
            total: tally.total(),
        }
    }

    pub fn score_line(&self) -> String {
        format_score(self.correct, self.total)
    }
}

/// How a single question's race resolved.
enum Race {
    Answered(String),
    DeadlinePassed,
    InputClosed,
}

/// Run one quiz session and write the score line to `out`.
///
/// `order` must be a permutation of the store's indices. The deadline starts
/// after the start signal has been read, and `time_limit` covers the whole
/// session.
#[instrument(skip_all, fields(questions = store.len(), time_limit_secs = time_limit.as_secs()))]
pub fn run_session<R, W>(
    store: &QuestionStore,
    order: &[usize],
    time_limit: Duration,
    reader: &AnswerReader<R>,
    out: &mut W,
) -> Result<SessionOutcome>
where
    R: BufRead + Send + 'static,
    W: Write,
{
    let mut tally = Tally::new(store.len());

    write!(out, "{START_PROMPT}").context("write start prompt")?;
    out.flush().context("flush stdout")?;
    reader.read_start_signal();

    let deadline = Instant::now()
        .checked_add(time_limit)
        .ok_or_else(|| anyhow!("time limit of {}s is too large", time_limit.as_secs()))?;
    info!("quiz started");

    let mut end = SessionEnd::Completed;
    for (position, &index) in order.iter().enumerate() {
        let question = store
            .get(index)
            .ok_or_else(|| anyhow!("question index {index} out of range"))?;

        write!(out, "Question #{}: {} = ", position + 1, question.prompt())
            .context("write question")?;
        out.flush().context("flush stdout")?;

        match race_answer(reader, deadline) {
            Race::Answered(answer) => {
                let correct = question.is_correct(&answer);
                tally.record(correct);
                debug!(position, correct, "answer received");
            }
            Race::DeadlinePassed => {
                info!(answered = tally.answered(), "time limit reached");
                end = SessionEnd::TimedOut;
                break;
            }
            Race::InputClosed => {
                warn!(answered = tally.answered(), "input closed; ending quiz");
                end = SessionEnd::TimedOut;
                break;
            }
        }
    }

    if end == SessionEnd::TimedOut {
        writeln!(out).context("write newline")?;
    }

    let outcome = SessionOutcome::new(end, &tally);
    writeln!(out, "{}", outcome.score_line()).context("write score")?;
    out.flush().context("flush stdout")?;
    info!(
        end = ?outcome.end,
        correct = outcome.correct,
        total = outcome.total,
        "quiz finished"
    );
    Ok(outcome)
}

/// Wait for the next answer or the deadline, whichever comes first.
///
/// No read is started once the deadline has passed.
fn race_answer<R: BufRead + Send + 'static>(reader: &AnswerReader<R>, deadline: Instant) -> Race {
    let remaining = deadline.saturating_duration_since(Instant::now());
    if remaining.is_zero() {
        return Race::DeadlinePassed;
    }
    let reply = reader.spawn_answer();
    match reply.recv_timeout(remaining) {
        Ok(answer) => Race::Answered(answer),
        Err(RecvTimeoutError::Timeout) => Race::DeadlinePassed,
        Err(RecvTimeoutError::Disconnected) => Race::InputClosed,
    }
}
