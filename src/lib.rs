pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::case_file::{CaseFile, CheckKind};
pub use core::batch::{BatchReport, BatchRunner};
pub use core::validators::{check_hours, check_name, hours_attended, is_valid_name, Rejection};
pub use domain::model::InputValue;
pub use utils::error::{CheckError, Result};
