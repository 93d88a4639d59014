//! UI abstraction layer
//!
//! Business logic (menu, commands, paginator) only depends on the
//! [`UserInput`] and [`OutputWriter`] traits:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   menu / commands / pager               │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │   UserInput, OutputWriter               │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ Console       │  │ Test doubles      │
//! │ - Dialoguer   │  │ - ScriptedInput   │
//! │ - LineInput   │  │ - BufferWriter    │
//! │ - Stdout      │  │                   │
//! └───────────────┘  └───────────────────┘
//! ```

pub mod input;
pub mod mock;
pub mod output;

pub use input::{DialoguerInput, InputError, LineInput, UserInput};
pub use mock::ScriptedInput;
pub use output::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};

use std::io::IsTerminal;

/// Pick the console input backend
///
/// Interactive prompts when stdin is a terminal, plain line reading otherwise.
///
/// # Errors
///
/// Returns `InputError::Io` if the Ctrl+C handler for line input cannot be
/// installed.
pub fn console_input() -> Result<Box<dyn UserInput>, InputError> {
    if std::io::stdin().is_terminal() {
        Ok(Box::new(DialoguerInput::new()))
    } else {
        Ok(Box::new(LineInput::with_interrupt_handler()?))
    }
}
