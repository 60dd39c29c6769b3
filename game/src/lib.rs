//! Game screen state for the sketch-and-guess mockup.
//!
//! Everything here runs on virtual time: the host calls
//! [`shell::GameShell::advance`] with elapsed milliseconds and renders the
//! returned events. No threads, no wall clock.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`shell`] | [`shell::GameShell`]: round lifecycle, toolbar, chat |
//! | [`round`] | Round status, countdown and the simulated guess script |
//! | [`scheduler`] | Round-keyed virtual-time timers |
//! | [`feed`] | The guess/chat feed with optional cap and display order |
//! | [`roster`] | Players and session scores |
//! | [`words`] | Target words and scripted wrong guesses |
//! | [`config`] | Env-driven timing and feed settings |

pub mod config;
pub mod feed;
pub mod roster;
pub mod round;
pub mod scheduler;
pub mod shell;
pub mod words;
