pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::SortingPolicy;
pub use crate::core::{classify, classify_with, normalize, normalize_with, sort, Sorter};
pub use domain::{Category, Field, Package, RawValue};
pub use utils::error::{ConfigError, ErrorKind, PackageError, Result};
