//! UI command adapters.
//!
//! Each command owns its own re-query signal; there is no process-wide
//! broadcast channel. The presentation layer re-queries exactly the commands
//! whose guards may have been affected by a state change.

pub mod relay_command;
