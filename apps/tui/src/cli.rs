use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "menu-board", version, about = "Restaurant menu board")]
pub struct CliArgs {
    /// Print the menu for one tab and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Tab to open on start (defaults to the first tab)
    #[arg(long, value_name = "NAME")]
    pub tab: Option<String>,

    /// Override the sheet API base url
    #[arg(long = "api-base", value_name = "URL")]
    pub api_base: Option<String>,

    /// Override the spreadsheet id
    #[arg(long = "sheet-id", value_name = "ID")]
    pub sheet_id: Option<String>,
}
