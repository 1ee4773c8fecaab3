pub mod config_io;
pub mod fetcher;
pub mod github;
pub mod prefs_io;
