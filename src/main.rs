//! Toolfinder CLI application entry point
//!
//! Loads the tool database and runs the interactive menu.
//!
//! # Usage
//!
//! ```bash
//! toolfinder
//! toolfinder --database plugins.txt
//! printf '2\n\n5\n' | toolfinder   # scripted: list free tools, then exit
//! ```
//!
//! # Configuration
//!
//! Optional settings live in the user's config directory
//! (`~/.config/toolfinder/config.toml` on Linux).

use toolfinder::{
    FinderError,
    catalog::{self, CatalogError},
    cli::Cli,
    commands::Session,
    config::FinderConfig,
    menu,
    ui::{self, OutputWriter, StdoutWriter},
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, FinderError>;

/// Install the stderr log subscriber; `RUST_LOG` takes precedence over `-v`
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(&cli);

    let config = cli.apply(FinderConfig::load()?).validate()?;
    if !config.color {
        colored::control::set_override(false);
    }

    let output = StdoutWriter::new();

    let catalog = match catalog::load(&config.database) {
        Ok(catalog) => catalog,
        Err(CatalogError::NotFound(path)) => {
            output.error(&format!("Error: The file '{}' was not found.", path.display()));
            output.info("Please make sure the database file is in the current directory, or pass --database <PATH>.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if catalog.is_empty() {
        output.warning(&format!(
            "No valid tools found in '{}'.",
            config.database.display()
        ));
        return Ok(());
    }
    tracing::info!(tools = catalog.len(), path = %config.database.display(), "catalog ready");

    let input = ui::console_input()?;
    let session = Session::new(&catalog, input.as_ref(), &output).with_page_size(config.page_size);
    menu::run(&session)
}
