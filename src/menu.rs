//! Main menu controller
//!
//! Two states: the main menu is shown until the user exits. Each choice
//! hands the session to a command, which runs its own sub-loop and returns
//! here.

use crate::{
    FinderError,
    commands::{self, SearchKind, Session},
};

type Result<T> = std::result::Result<T, FinderError>;

pub const MENU_PROMPT: &str = "Please enter your choice (1-5)";
pub const FAREWELL: &str = "Happy producing! Goodbye.";
pub const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 5.";

const MENU: &str = "\
===== Music Production Tool Finder =====
1. Search by Type (e.g., EQ, Synth)
2. Find FREE Plugins
3. Find Tools by Tag (e.g., 'vintage')
4. Smart Search (Search all details)
5. Exit";

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SearchByType,
    FreePlugins,
    SearchByTag,
    SmartSearch,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::SearchByType),
            "2" => Some(Self::FreePlugins),
            "3" => Some(Self::SearchByTag),
            "4" => Some(Self::SmartSearch),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    MainMenu,
    Terminated,
}

/// Run the menu loop until the user exits
///
/// Interrupting or closing input at the menu prompt exits like choice 5.
///
/// # Errors
///
/// Returns `FinderError` if reading user input fails.
pub fn run(session: &Session<'_>) -> Result<()> {
    let mut state = MenuState::MainMenu;

    while state == MenuState::MainMenu {
        state = step(session)?;
    }

    session.output.success(FAREWELL);
    Ok(())
}

fn step(session: &Session<'_>) -> Result<MenuState> {
    session.output.write(MENU);

    let Some(answer) = session.input.prompt_text(MENU_PROMPT)? else {
        return Ok(MenuState::Terminated);
    };

    let Some(choice) = MenuChoice::parse(&answer) else {
        session.output.error(INVALID_CHOICE);
        return Ok(MenuState::MainMenu);
    };

    tracing::debug!(?choice, "menu selection");
    match choice {
        MenuChoice::SearchByType => commands::search::execute(session, SearchKind::Type)?,
        MenuChoice::FreePlugins => commands::free(session)?,
        MenuChoice::SearchByTag => commands::search::execute(session, SearchKind::Tag)?,
        MenuChoice::SmartSearch => commands::search::execute(session, SearchKind::Smart)?,
        MenuChoice::Exit => return Ok(MenuState::Terminated),
    }

    Ok(MenuState::MainMenu)
}
