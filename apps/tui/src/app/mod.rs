// App module for the menu board
// Holds session state and turns key presses into tab commands

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, SheetEvent};
