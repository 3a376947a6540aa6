//! Timed command-line quiz.
//!
//! Questions are loaded from a CSV file, presented one at a time, and scored
//! against a single countdown that starts when the user presses enter. The
//! crate keeps a strict separation:
//!
//! - **[`core`]**: Pure logic (question store, presentation order, tally).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting collaborators (config file, problems file,
//!   answer input).
//!
//! [`session`] coordinates the two and owns the answer-versus-deadline race.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
