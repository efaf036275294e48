mod app;
mod cli;
mod config;
mod event;
mod logging;
mod sheets;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use sheets::HttpSheets;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();

    let menu_config = config::init_menu_config(&args)?;
    let debug = config::debug_enabled(&args);

    let mut app = App::new(menu_config.clone());
    if let Some(tab) = config::get_start_tab(&args) {
        app.preselect(&tab);
    }
    let sheets = HttpSheets::new(menu_config);

    // Piped output gets the plain listing
    if args.headless || !is_terminal() {
        logging::init_stderr_logger(debug)?;
        return event::run_headless(&mut app, sheets, args.json).await;
    }

    let _guard = logging::init_file_logger(&config::get_log_dir(), debug)?;
    info!(tab = app.board.active_tab(), "starting menu board");

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app, sheets).await;
    terminal::cleanup(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
