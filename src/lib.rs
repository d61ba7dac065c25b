//! # Introduction
//!
//! calctty is a pocket-style chain calculator for the terminal: a display and
//! a keypad, driven by keyboard or mouse, built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Data flow
//!
//! ```text
//! Key/Click → Dispatcher → Input → State transition → Formatter → Display
//! ```
//!
//! 1. [`dispatch`] — maps key presses and labeled buttons onto a typed
//!    [`dispatch::Input`].
//! 2. [`calculator`] — the immutable [`calculator::CalculatorState`] and its
//!    pure transitions; operators chain left to right with no precedence.
//! 3. [`formatter`] — rounds to 12 significant digits and shapes numbers
//!    into at most 12 display characters.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! [`config`] and [`logging`] hold the command-line options and the optional
//! file-backed `tracing` subscriber.

pub mod calculator;
pub mod config;
pub mod dispatch;
pub mod formatter;
pub mod logging;
pub mod ui;
