pub mod classifier;
pub mod normalizer;
pub mod sorter;

pub use crate::domain::model::{Category, Field, Package, RawValue};
pub use crate::utils::error::Result;
pub use classifier::{classify, classify_with};
pub use normalizer::{normalize, normalize_with};
pub use sorter::{sort, Sorter};
