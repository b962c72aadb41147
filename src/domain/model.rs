use crate::config::SortingPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Handling stack a package is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Standard,
    Special,
    Rejected,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STANDARD" => Ok(Category::Standard),
            "SPECIAL" => Ok(Category::Special),
            "REJECTED" => Ok(Category::Rejected),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// The four measured inputs, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Width,
    Height,
    Length,
    Mass,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Width, Field::Height, Field::Length, Field::Mass];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Length => "length",
            Field::Mass => "mass",
        }
    }

    pub fn is_dimension(&self) -> bool {
        !matches!(self, Field::Mass)
    }

    pub fn unit(&self) -> &'static str {
        if self.is_dimension() {
            "cm"
        } else {
            "kg"
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied value before normalization, tagged by its runtime shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
    Sequence,
    Mapping,
}

impl RawValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Number(_) => "number",
            RawValue::Text(_) => "text",
            RawValue::Bool(_) => "bool",
            RawValue::Null => "null",
            RawValue::Sequence => "sequence",
            RawValue::Mapping => "mapping",
        }
    }
}

macro_rules! raw_number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawValue {
                fn from(value: $t) -> Self {
                    RawValue::Number(value as f64)
                }
            }
        )*
    };
}

raw_number_from!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<&String> for RawValue {
    fn from(value: &String) -> Self {
        RawValue::Text(value.clone())
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawValue::Null,
            serde_json::Value::Bool(b) => RawValue::Bool(b),
            // serde_json numbers are always representable as f64
            serde_json::Value::Number(n) => n.as_f64().map_or(RawValue::Null, RawValue::Number),
            serde_json::Value::String(s) => RawValue::Text(s),
            serde_json::Value::Array(_) => RawValue::Sequence,
            serde_json::Value::Object(_) => RawValue::Mapping,
        }
    }
}

/// A validated package. Only built through [`crate::core::sorter`], so every
/// measurement already satisfies the policy bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Package {
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
    #[serde(skip)]
    policy: SortingPolicy,
}

impl Package {
    pub(crate) fn from_validated(
        width: f64,
        height: f64,
        length: f64,
        mass: f64,
        policy: SortingPolicy,
    ) -> Self {
        Self {
            width,
            height,
            length,
            mass,
            policy,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    pub fn max_dimension(&self) -> f64 {
        self.width.max(self.height).max(self.length)
    }

    pub fn is_bulky(&self) -> bool {
        crate::core::classifier::is_bulky(&self.policy, self.width, self.height, self.length)
    }

    pub fn is_heavy(&self) -> bool {
        crate::core::classifier::is_heavy(&self.policy, self.mass)
    }

    pub fn category(&self) -> Category {
        crate::core::classifier::classify_with(
            &self.policy,
            self.width,
            self.height,
            self.length,
            self.mass,
        )
    }

    pub fn policy(&self) -> &SortingPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_display() {
        for category in [Category::Standard, Category::Special, Category::Rejected] {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
        assert_eq!(" special ".parse::<Category>(), Ok(Category::Special));
        assert!("BULKY".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_names() {
        assert_eq!(
            serde_json::to_string(&Category::Rejected).unwrap(),
            "\"REJECTED\""
        );
        let parsed: Category = serde_json::from_str("\"STANDARD\"").unwrap();
        assert_eq!(parsed, Category::Standard);
    }

    #[test]
    fn test_raw_value_conversions() {
        assert_eq!(RawValue::from(10), RawValue::Number(10.0));
        assert_eq!(RawValue::from(2.5f32), RawValue::Number(2.5));
        assert_eq!(RawValue::from(" 1 "), RawValue::Text(" 1 ".to_string()));
        assert_eq!(RawValue::from(None::<f64>), RawValue::Null);
        assert_eq!(RawValue::from(Some("3")), RawValue::Text("3".to_string()));
        assert_eq!(RawValue::from(true), RawValue::Bool(true));
    }

    #[test]
    fn test_raw_value_from_json() {
        use serde_json::json;
        assert_eq!(RawValue::from(json!(12)), RawValue::Number(12.0));
        assert_eq!(RawValue::from(json!("12")), RawValue::Text("12".into()));
        assert_eq!(RawValue::from(json!([])), RawValue::Sequence);
        assert_eq!(RawValue::from(json!({})), RawValue::Mapping);
        assert_eq!(RawValue::from(json!(null)), RawValue::Null);
        assert_eq!(RawValue::from(json!(false)).type_name(), "bool");
    }

    #[test]
    fn test_package_derived_values() {
        let package = Package::from_validated(100.0, 20.0, 50.0, 3.0, SortingPolicy::default());
        assert_eq!(package.volume(), 100_000.0);
        assert_eq!(package.max_dimension(), 100.0);
        assert!(!package.is_bulky());
        assert!(!package.is_heavy());
        assert_eq!(package.category(), Category::Standard);
    }
}
