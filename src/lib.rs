pub mod cli;
pub mod config;
pub mod dates;
pub mod extract;
pub mod fetch;
pub mod mock;
pub mod output;
