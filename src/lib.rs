pub mod catalog;
pub mod cli;
pub mod error;
pub mod settings;

pub use error::{CisaVulnError, Result};
