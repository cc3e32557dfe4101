pub mod args;
pub mod config;
pub mod entry;
pub mod gen_state;
pub mod placeholders;
