pub mod config_io;
pub mod list_io;
pub mod state;
pub mod watcher;
