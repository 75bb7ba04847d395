use crate::utils::error::{Result, RosterError};

pub const MAX_PLAUSIBLE_AGE: u32 = 150;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_ordered_bounds<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    lower: T,
    upper: T,
) -> Result<()> {
    if lower > upper {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..={}", lower, upper),
            reason: "Lower bound must not exceed upper bound".to_string(),
        });
    }
    Ok(())
}

pub fn validate_age(field_name: &str, age: u32) -> Result<()> {
    validate_range(field_name, age, 0, MAX_PLAUSIBLE_AGE)
}
