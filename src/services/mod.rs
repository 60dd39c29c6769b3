//! Services behind the terminal driver.
//!
//! ARCHITECTURE
//! ============
//! `driver` owns the event loop. The other modules are synchronous helpers
//! it calls: input parsing, the scripted pen and the canvas preview.

pub mod autodraw;
pub mod command;
pub mod driver;
pub mod preview;
