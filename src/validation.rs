use crate::error::{GrievanceError, Result};

const MAX_NAME_LEN: usize = 100;
const MAX_CITY_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 5000;
const ID_LEN: usize = 8;

/// Validation utilities for submission input
#[derive(Debug, Copy, Clone)]
pub struct InputValidator;

impl InputValidator {
    /// Validate the required city field
    pub fn validate_city(city: &str) -> Result<()> {
        let city = city.trim();
        if city.is_empty() {
            return Err(GrievanceError::Validation(
                "City & description are required to submit a grievance".to_string(),
            ));
        }

        if city.chars().count() > MAX_CITY_LEN {
            return Err(GrievanceError::Validation(format!(
                "City too long (max {MAX_CITY_LEN} characters)"
            )));
        }

        if city.chars().any(char::is_control) {
            return Err(GrievanceError::Validation(
                "City contains invalid characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate the required description field. Line breaks are allowed.
    pub fn validate_description(description: &str) -> Result<()> {
        let description = description.trim();
        if description.is_empty() {
            return Err(GrievanceError::Validation(
                "City & description are required to submit a grievance".to_string(),
            ));
        }

        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(GrievanceError::Validation(format!(
                "Description too long (max {MAX_DESCRIPTION_LEN} characters)"
            )));
        }

        if description.contains('\0') {
            return Err(GrievanceError::Validation(
                "Description contains invalid characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate the optional submitter name. Blank is fine.
    pub fn validate_name(name: &str) -> Result<()> {
        let name = name.trim();

        if name.chars().count() > MAX_NAME_LEN {
            return Err(GrievanceError::Validation(format!(
                "Name too long (max {MAX_NAME_LEN} characters)"
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(GrievanceError::Validation(
                "Name contains invalid characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate a grievance id: eight lowercase hex digits
    pub fn validate_grievance_id(id: &str) -> Result<()> {
        let well_formed = id.len() == ID_LEN
            && id
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));

        if well_formed {
            Ok(())
        } else {
            Err(GrievanceError::Validation(format!(
                "Invalid grievance id '{id}': expected {ID_LEN} lowercase hex characters"
            )))
        }
    }
}
