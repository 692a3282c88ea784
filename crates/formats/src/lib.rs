pub mod boundary;
pub mod config;

pub use boundary::*;
pub use config::*;
