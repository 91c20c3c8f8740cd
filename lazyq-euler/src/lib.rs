mod cli;
mod error;
mod filter;
mod numbers;
mod outcome;
mod problems;
mod renderer;
mod runner;

pub use cli::cli;
pub use error::{Error, Result};
