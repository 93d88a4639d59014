//! User input abstraction layer
//!
//! Commands and the paginator only talk to [`UserInput`], so a terminal
//! session, a piped stdin and a scripted test all drive the same code.
//!
//! An interrupt (Ctrl+C at a prompt) or closed input is not an error: the
//! prompt methods return `Ok(None)` and the caller backs out.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// Set by the SIGINT handler while [`LineInput`] is in use
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use toolfinder::ui::input::{UserInput, DialoguerInput};
///
/// let input = DialoguerInput::new();
///
/// if let Some(term) = input.prompt_text("Enter the type to search for").unwrap() {
///     println!("Searching for {term}");
/// }
///
/// if let Some(true) = input.prompt_confirm("Search for another type?").unwrap() {
///     println!("Again!");
/// }
/// ```
pub trait UserInput: Send + Sync {
    /// Prompt user for a line of text
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - User entered text (possibly empty)
    /// * `Ok(None)` - User interrupted or input was closed
    /// * `Err(_)` - Input operation failed
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>>;

    /// Prompt user for confirmation (yes/no), defaulting to no
    ///
    /// # Returns
    ///
    /// * `Ok(Some(bool))` - `true` only for an affirmative answer
    /// * `Ok(None)` - User interrupted or input was closed
    /// * `Err(_)` - Input operation failed
    fn prompt_confirm(&self, prompt: &str) -> Result<Option<bool>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Whether an answer counts as "yes"
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// CLI-based user input using dialoguer
///
/// Used when stdin is a terminal.
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a Ctrl+C reported by the terminal into a cancelled prompt
fn interrupted_as_none<T>(result: dialoguer::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            let dialoguer::Error::IO(err) = e;
            if err.kind() == io::ErrorKind::Interrupted {
                Ok(None)
            } else {
                Err(InputError::Io(err))
            }
        }
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>> {
        use dialoguer::Input;

        interrupted_as_none(
            Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text(),
        )
    }

    fn prompt_confirm(&self, prompt: &str) -> Result<Option<bool>> {
        use dialoguer::Confirm;

        interrupted_as_none(
            Confirm::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(false)
                .interact(),
        )
    }
}

/// Print `prompt` and read one line, without the line terminator
///
/// Returns `Ok(None)` at end of input, or when `interrupted` was raised while
/// waiting; the flag is cleared on the way out and the line read is discarded.
///
/// # Errors
///
/// Returns `InputError::Io` if writing the prompt or reading fails.
pub fn read_prompted_line<R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    interrupted: &AtomicBool,
) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    let read = reader.read_line(&mut line)?;

    if interrupted.swap(false, Ordering::SeqCst) || read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Like [`read_prompted_line`], answering `true` only for an affirmative
///
/// # Errors
///
/// Returns `InputError::Io` if writing the prompt or reading fails.
pub fn read_confirmation<R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    interrupted: &AtomicBool,
) -> Result<Option<bool>>
where
    R: BufRead,
    W: Write,
{
    Ok(read_prompted_line(reader, writer, &format!("{prompt} (y/n): "), interrupted)?
        .map(|answer| is_affirmative(&answer)))
}

/// Line-based input on stdin
///
/// Used when stdin is piped, so sessions can be scripted. End of input and
/// Ctrl+C are both reported as a cancelled prompt.
#[derive(Debug, Default)]
pub struct LineInput;

impl LineInput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Install the SIGINT handler that turns Ctrl+C into a cancelled prompt
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if a handler cannot be registered.
    pub fn with_interrupt_handler() -> Result<Self> {
        ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst))
            .map_err(|e| InputError::Io(io::Error::other(e)))?;
        Ok(Self)
    }
}

impl UserInput for LineInput {
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>> {
        read_prompted_line(
            &mut io::stdin().lock(),
            &mut io::stdout(),
            &format!("{prompt}: "),
            &INTERRUPTED,
        )
    }

    fn prompt_confirm(&self, prompt: &str) -> Result<Option<bool>> {
        read_confirmation(&mut io::stdin().lock(), &mut io::stdout(), prompt, &INTERRUPTED)
    }
}
