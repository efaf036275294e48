use color_eyre::eyre::eyre;
use dotenv::dotenv;
use menu_core::MenuConfig;
use std::env;
use std::path::PathBuf;

use crate::cli::CliArgs;

/// Builds the session configuration.
///
/// Starts from the built-in menu settings and applies `--api-base` and
/// `--sheet-id`, falling back to `MENU_API_BASE` and `MENU_SHEET_ID` from
/// the environment or a `.env` file.
pub fn init_menu_config(args: &CliArgs) -> color_eyre::eyre::Result<MenuConfig> {
    dotenv().ok();

    let config = apply_overrides(
        MenuConfig::default(),
        flag_or_env(args.api_base.as_deref(), "MENU_API_BASE"),
        flag_or_env(args.sheet_id.as_deref(), "MENU_SHEET_ID"),
    );

    config
        .validate()
        .map_err(|e| eyre!("Invalid menu configuration: {e}"))?;

    Ok(config)
}

fn apply_overrides(
    mut config: MenuConfig,
    api_base: Option<String>,
    sheet_id: Option<String>,
) -> MenuConfig {
    if let Some(api_base) = api_base.filter(|value| !value.trim().is_empty()) {
        config.api_base = api_base;
    }
    if let Some(sheet_id) = sheet_id {
        config.sheet_id = sheet_id;
    }
    config
}

fn flag_or_env(flag: Option<&str>, key: &str) -> Option<String> {
    flag.map(ToString::to_string).or_else(|| env::var(key).ok())
}

/// Tab requested on start, if any
pub fn get_start_tab(args: &CliArgs) -> Option<String> {
    flag_or_env(args.tab.as_deref(), "MENU_TAB")
}

/// Gets the directory the log file is written to
pub fn get_log_dir() -> PathBuf {
    env::var("MENU_LOG_DIR").map_or_else(|_| PathBuf::from("./logs"), PathBuf::from)
}

pub fn debug_enabled(args: &CliArgs) -> bool {
    args.debug || env::var("DEBUG").is_ok_and(|value| value != "0")
}
