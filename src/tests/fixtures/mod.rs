pub mod app_state;
pub mod commands;
pub mod entries;
