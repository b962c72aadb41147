use crate::config::SortingPolicy;
use crate::core::normalizer::normalize_with;
use crate::domain::{Category, Field, Package, RawValue};
use crate::utils::error::{ConfigError, Result};
use crate::utils::validation::Validate;

/// Normalizes the four raw measurements and classifies the package.
///
/// Validation runs width, height, length, mass and stops at the first failure.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sorter {
    policy: SortingPolicy,
}

impl Sorter {
    /// Build a sorter for `policy`, rejecting policies that fail validation.
    pub fn new(policy: SortingPolicy) -> std::result::Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &SortingPolicy {
        &self.policy
    }

    pub fn package(
        &self,
        width: impl Into<RawValue>,
        height: impl Into<RawValue>,
        length: impl Into<RawValue>,
        mass: impl Into<RawValue>,
    ) -> Result<Package> {
        let raw: [RawValue; 4] = [width.into(), height.into(), length.into(), mass.into()];
        let mut values = [0.0; 4];
        for ((slot, field), raw) in values.iter_mut().zip(Field::ALL).zip(&raw) {
            *slot = normalize_with(raw, field, &self.policy)?;
        }

        let [width, height, length, mass] = values;
        Ok(Package::from_validated(width, height, length, mass, self.policy))
    }

    pub fn sort(
        &self,
        width: impl Into<RawValue>,
        height: impl Into<RawValue>,
        length: impl Into<RawValue>,
        mass: impl Into<RawValue>,
    ) -> Result<Category> {
        let package = self.package(width, height, length, mass)?;
        let category = package.category();
        tracing::debug!(
            width = package.width(),
            height = package.height(),
            length = package.length(),
            mass = package.mass(),
            %category,
            "sorted package"
        );
        Ok(category)
    }
}

impl Package {
    /// Validate raw measurements against the default policy.
    pub fn new(
        width: impl Into<RawValue>,
        height: impl Into<RawValue>,
        length: impl Into<RawValue>,
        mass: impl Into<RawValue>,
    ) -> Result<Self> {
        Sorter::default().package(width, height, length, mass)
    }
}

/// Sort a package with the default policy.
pub fn sort(
    width: impl Into<RawValue>,
    height: impl Into<RawValue>,
    length: impl Into<RawValue>,
    mass: impl Into<RawValue>,
) -> Result<Category> {
    Sorter::default().sort(width, height, length, mass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_first_failure_wins() {
        let err = sort("abc", 0, f64::NAN, 5000).unwrap_err();
        assert_eq!(err.field, "width");
        assert_eq!(err.kind, ErrorKind::InvalidFormat);

        let err = sort(10, 10, f64::NAN, 5000).unwrap_err();
        assert_eq!(err.field, "length");
        assert_eq!(err.kind, ErrorKind::NonFinite);

        let err = sort(10, 10, 10, 5000).unwrap_err();
        assert_eq!(err.field, "mass");
        assert_eq!(err.kind, ErrorKind::OutOfBounds);
    }

    #[test]
    fn test_package_new_exposes_measurements() {
        let package = Package::new("100", 100, " 100 ", 19).unwrap();
        assert_eq!(package.volume(), 1_000_000.0);
        assert_eq!(package.max_dimension(), 100.0);
        assert!(package.is_bulky());
        assert!(!package.is_heavy());
        assert_eq!(package.category(), Category::Special);
        assert_eq!(package.policy(), &SortingPolicy::default());
    }

    #[test]
    fn test_sorter_uses_its_policy() {
        let sorter = Sorter::new(SortingPolicy {
            heavy_mass: 10.0,
            ..SortingPolicy::default()
        })
        .unwrap();
        assert_eq!(sorter.sort(10, 10, 10, 10).unwrap(), Category::Special);
        assert_eq!(sort(10, 10, 10, 10).unwrap(), Category::Standard);
        assert_eq!(sorter.policy().heavy_mass, 10.0);
    }

    #[test]
    fn test_measurements_are_read_through_getters() {
        let package = Package::new(10, 20, 30, 4).unwrap();
        assert_eq!(
            (package.width(), package.height(), package.length(), package.mass()),
            (10.0, 20.0, 30.0, 4.0)
        );

        let copy = package;
        assert_eq!(copy, package);
        assert_eq!(copy.category(), Category::Standard);
    }

    #[test]
    fn test_new_rejects_invalid_policy() {
        let err = Sorter::new(SortingPolicy {
            min_value: -1.0,
            ..SortingPolicy::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "policy.min_value"));

        let err = Sorter::new(SortingPolicy {
            max_dimension: f64::NAN,
            ..SortingPolicy::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "policy.max_dimension"));
    }

    #[test]
    fn test_fields_validated_in_declared_order() {
        let fields: Vec<String> = Field::ALL
            .iter()
            .map(|&field| {
                let mut raw: [RawValue; 4] = [1.into(), 1.into(), 1.into(), 1.into()];
                raw[field as usize] = "bad".into();
                let [w, h, l, m] = raw;
                sort(w, h, l, m).unwrap_err().field
            })
            .collect();
        assert_eq!(fields, ["width", "height", "length", "mass"]);
    }
}
