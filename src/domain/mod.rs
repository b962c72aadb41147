// Domain layer: package model and value types. No classification rules live here.

pub mod model;

pub use model::{Category, Field, Package, ParseCategoryError, RawValue};
