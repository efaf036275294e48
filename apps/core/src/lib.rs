//! Menu board core: configuration, sheet rows, and the state behind the
//! tab strip, menu list, splash screen and ads ticker.
//!
//! Nothing here touches the network or a clock. Front ends run fetches
//! through a [`sheets::SheetSource`] and feed results and elapsed time into
//! a [`board::MenuBoard`].

pub mod board;
pub mod config;
pub mod domain;
pub mod grouping;
pub mod loader;
pub mod sheets;
pub mod splash;
pub mod tabs;
pub mod ticker;
pub mod view;

pub use board::MenuBoard;
pub use config::{ConfigError, MenuConfig};
pub use domain::{AdRow, MenuRow, Price};
pub use loader::{FetchTicket, LoadState};
pub use sheets::{SheetError, SheetSource};
