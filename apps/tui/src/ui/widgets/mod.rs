pub mod popup;
pub mod ticker;
