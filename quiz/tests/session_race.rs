//! Timing tests for the answer-versus-deadline race.
//!
//! Answers are delivered by a scripted input that sleeps before each chunk,
//! standing in for a user who types slower (or faster) than the time limit.

use std::thread;
use std::time::{Duration, Instant};

use quiz::core::question::{Question, QuestionStore};
use quiz::io::input::AnswerReader;
use quiz::session::{SessionEnd, run_session};
use quiz::test_support::{ScriptedInput, SharedBuffer};

const NOW: Duration = Duration::ZERO;

fn two_questions() -> QuestionStore {
    [
        Question::new("2+2", "4"),
        Question::new("Capital of France", "Paris"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn slow_answer_times_out_with_zero_score() {
    let store: QuestionStore = [Question::new("2+2", "4")].into_iter().collect();
    let reader = AnswerReader::new(ScriptedInput::new(vec![
        (NOW, "\n"),
        (Duration::from_millis(1500), "4\n"),
    ]));
    let mut out = SharedBuffer::default();

    let started = Instant::now();
    let outcome = run_session(
        &store,
        &[0],
        Duration::from_millis(200),
        &reader,
        &mut out,
    )
    .expect("run");

    assert!(started.elapsed() < Duration::from_millis(1200));
    assert_eq!(outcome.end, SessionEnd::TimedOut);
    assert_eq!((outcome.correct, outcome.total), (0, 1));
    assert!(out.contents().ends_with("Question #1: 2+2 = \nYou scored 0 out of 1\n"));
}

#[test]
fn late_answer_never_reaches_finished_session() {
    let store: QuestionStore = [Question::new("2+2", "4")].into_iter().collect();
    let reader = AnswerReader::new(ScriptedInput::new(vec![
        (NOW, "\n"),
        (Duration::from_millis(400), "4\n"),
    ]));
    let mut out = SharedBuffer::default();

    let outcome = run_session(
        &store,
        &[0],
        Duration::from_millis(100),
        &reader,
        &mut out,
    )
    .expect("run");
    let printed = out.contents();

    // Let the abandoned read finish well after the session has ended.
    thread::sleep(Duration::from_millis(1000));

    assert_eq!(outcome.correct, 0);
    assert_eq!(reader.discarded(), 1);
    assert_eq!(out.contents(), printed);
}

#[test]
fn deadline_spans_the_whole_session() {
    // Each answer alone fits in the limit; together they do not.
    let reader = AnswerReader::new(ScriptedInput::new(vec![
        (NOW, "\n"),
        (Duration::from_millis(300), "4\n"),
        (Duration::from_millis(300), "Paris\n"),
    ]));
    let mut out = SharedBuffer::default();

    let outcome = run_session(
        &two_questions(),
        &[0, 1],
        Duration::from_millis(450),
        &reader,
        &mut out,
    )
    .expect("run");

    assert_eq!(outcome.end, SessionEnd::TimedOut);
    assert_eq!((outcome.correct, outcome.answered, outcome.total), (1, 1, 2));
    assert!(out.contents().ends_with("You scored 1 out of 2\n"));
}

#[test]
fn deadline_starts_after_start_signal() {
    // The user waits before pressing enter; that wait is not charged.
    let reader = AnswerReader::new(ScriptedInput::new(vec![
        (Duration::from_millis(400), "\n"),
        (NOW, "4\n"),
        (NOW, "Paris\n"),
    ]));
    let mut out = SharedBuffer::default();

    let outcome = run_session(
        &two_questions(),
        &[0, 1],
        Duration::from_millis(300),
        &reader,
        &mut out,
    )
    .expect("run");

    assert_eq!(outcome.end, SessionEnd::Completed);
    assert_eq!(outcome.correct, 2);
}

#[test]
fn answers_within_limit_complete_with_partial_credit() {
    let reader = AnswerReader::new(ScriptedInput::new(vec![
        (NOW, "\n"),
        (Duration::from_millis(20), "5\n"),
        (Duration::from_millis(20), "PaRiS\n"),
    ]));
    let mut out = SharedBuffer::default();

    let outcome = run_session(
        &two_questions(),
        &[0, 1],
        Duration::from_secs(10),
        &reader,
        &mut out,
    )
    .expect("run");

    assert_eq!(outcome.end, SessionEnd::Completed);
    assert_eq!((outcome.correct, outcome.answered, outcome.total), (1, 2, 2));
    assert!(outcome.correct <= outcome.answered && outcome.answered <= outcome.total);
    assert!(out.contents().ends_with("You scored 1 out of 2\n"));
}
