use crate::utils::error::ConfigError;

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

pub fn validate_positive_finite(field_name: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than zero".to_string(),
        });
    }

    Ok(())
}

pub fn validate_below<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    limit_name: &str,
    limit: T,
) -> Result<(), ConfigError> {
    if value >= limit {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be below {} ({})", limit_name, limit),
        });
    }
    Ok(())
}
