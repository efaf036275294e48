pub mod menu;
pub mod splash;
