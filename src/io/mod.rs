pub mod backend;
pub mod config_io;
pub mod journal;
