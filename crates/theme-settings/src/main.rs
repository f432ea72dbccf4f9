//! `theme-settings` command-line entry point.
//!
//! Drives the settings store against file storage, so the same settings a
//! front-end would persist can be inspected and changed from a shell:
//!
//! ```text
//! theme-settings show
//! theme-settings set color-scheme ocean
//! theme-settings toggle-mode
//! theme-settings css > theme.css
//! ```
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load AppConfig (TOML)      -- storage dir, log level, font preload
//!  └─ AppState::new(FileStorage) -- persistence, styles, fonts, store
//!  └─ activate()                 -- links the active font stylesheet
//!  └─ one ui_bridge command      -- printed as JSON or CSS
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use theme_settings::infrastructure::storage::backend::FileStorage;
use theme_settings::infrastructure::storage::config::{
    config_dir, load_config_from, AppConfig, AppConfigError,
};
use theme_settings::infrastructure::ui_bridge::{self, AppState, CommandResult};

#[derive(Parser)]
#[command(name = "theme-settings")]
#[command(about = "Inspect and change persisted appearance settings")]
#[command(version)]
struct Cli {
    /// Directory holding the settings files (overrides `[storage] dir`).
    #[arg(long, env = "THEME_SETTINGS_DIR", value_name = "DIR")]
    storage_dir: Option<PathBuf>,

    /// Config file to read instead of the platform default.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the current settings as JSON (default).
    Show,
    /// Print the CSS the current settings produce.
    Css,
    /// List the valid ids for every field.
    Options,
    /// Set one field by id.
    Set {
        #[arg(value_enum)]
        field: Field,
        id: String,
    },
    /// Switch between light and dark mode.
    ToggleMode,
    /// Collapse or expand the sidebar.
    ToggleSidebar,
    /// Restore every field to its default.
    Reset,
    /// Remove every stored settings key.
    Clear,
}

#[derive(Clone, Copy, ValueEnum)]
enum Field {
    Mode,
    ColorScheme,
    Font,
    NavPosition,
    LayoutType,
    LoginLayout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (app_config, config_base) = load_app_config(cli.config.as_deref())?;

    // Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&app_config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let storage_dir = match (cli.storage_dir, config_base) {
        (Some(dir), _) => dir,
        (None, Some(base)) => app_config.storage_dir(&base),
        (None, None) => bail!("no storage directory: pass --storage-dir or set XDG_CONFIG_HOME"),
    };
    info!("using settings storage at {}", storage_dir.display());

    let state = AppState::new(Arc::new(FileStorage::new(storage_dir)), None);
    if app_config.fonts.preload {
        state.store.activate().await;
    }

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => print_json(ui_bridge::get_settings(state.clone()).await)?,
        Command::Css => {
            let css = into_result(ui_bridge::get_css(state.clone()).await)?;
            print!("{css}");
        }
        Command::Options => print_json(ui_bridge::get_appearance_options(state.clone()).await)?,
        Command::Set { field, id } => {
            let state = state.clone();
            let result = match field {
                Field::Mode => ui_bridge::set_mode(state, id).await,
                Field::ColorScheme => ui_bridge::set_color_scheme(state, id).await,
                Field::Font => ui_bridge::set_font(state, id).await,
                Field::NavPosition => ui_bridge::set_nav_position(state, id).await,
                Field::LayoutType => ui_bridge::set_layout_type(state, id).await,
                Field::LoginLayout => ui_bridge::set_login_layout(state, id).await,
            };
            print_json(result)?;
        }
        Command::ToggleMode => print_json(ui_bridge::toggle_mode(state.clone()).await)?,
        Command::ToggleSidebar => print_json(ui_bridge::toggle_sidebar(state.clone()).await)?,
        Command::Reset => print_json(ui_bridge::reset_settings(state.clone()).await)?,
        Command::Clear => {
            into_result(ui_bridge::clear_settings(state.clone()).await)?;
            info!("stored settings cleared");
        }
    }

    if let Ok(state) = Arc::try_unwrap(state) {
        let last = state.store.dispose();
        debug!("final settings: {last:?}");
    }
    Ok(())
}

/// Reads the app config and returns it with the directory it is relative to.
fn load_app_config(explicit: Option<&Path>) -> anyhow::Result<(AppConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = load_config_from(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        return Ok((cfg, path.parent().map(Path::to_path_buf)));
    }

    match config_dir() {
        Ok(dir) => {
            let cfg = load_config_from(&dir.join("config.toml")).context("reading app config")?;
            Ok((cfg, Some(dir)))
        }
        Err(AppConfigError::NoPlatformConfigDir) => Ok((AppConfig::default(), None)),
        Err(e) => Err(e.into()),
    }
}

fn into_result<T: Serialize>(result: CommandResult<T>) -> anyhow::Result<T> {
    match (result.success, result.data) {
        (true, Some(data)) => Ok(data),
        _ => bail!(result.error.unwrap_or_else(|| "command failed".to_string())),
    }
}

fn print_json<T: Serialize>(result: CommandResult<T>) -> anyhow::Result<()> {
    let data = into_result(result)?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
