pub mod config;
pub mod modal;
pub mod shutdown;
pub mod store;
pub mod ui;
