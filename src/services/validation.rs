use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::models::flat::FlatFilter;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_REGEX.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDates {
    pub email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Email first, then dates. Only the first failing rule is reported and the date
/// order is not checked.
pub fn validate_contact_and_dates(
    email: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<ValidatedDates, ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    let (Some(start_date), Some(end_date)) = (start_date, end_date) else {
        return Err(ValidationError::MissingDates);
    };

    Ok(ValidatedDates {
        email: email.to_string(),
        start_date,
        end_date,
    })
}

pub fn validate_booking(
    email: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    flat_id: Option<i64>,
) -> Result<(ValidatedDates, i64), ValidationError> {
    let dates = validate_contact_and_dates(email, start_date, end_date)?;
    let flat_id = flat_id.ok_or(ValidationError::MissingFlatId)?;
    Ok((dates, flat_id))
}

pub fn validate_reservation(
    email: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    office_id: Option<i64>,
) -> Result<(ValidatedDates, i64), ValidationError> {
    let dates = validate_contact_and_dates(email, start_date, end_date)?;
    let office_id = office_id.ok_or(ValidationError::MissingOfficeId)?;
    Ok((dates, office_id))
}

/// Raw text of the filter inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub location: String,
    pub min_price: String,
    pub max_price: String,
    pub room_number: String,
    pub max_distance: String,
}

fn parse_optional<T: FromStr>(
    field: &'static str,
    text: &str,
) -> Result<Option<T>, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| ValidationError::InvalidNumber(field))
}

/// Like `parse_optional`, but `inf` and `NaN` are not numbers here.
fn parse_finite(field: &'static str, text: &str) -> Result<Option<f64>, ValidationError> {
    match parse_optional::<f64>(field, text)? {
        Some(value) if !value.is_finite() => Err(ValidationError::InvalidNumber(field)),
        value => Ok(value),
    }
}

pub fn parse_filter_inputs(inputs: &FilterInputs) -> Result<FlatFilter, ValidationError> {
    let location = inputs.location.trim();
    Ok(FlatFilter {
        location: (!location.is_empty()).then(|| location.to_string()),
        min_price: parse_finite("Min Price", &inputs.min_price)?,
        max_price: parse_finite("Max Price", &inputs.max_price)?,
        room_number: parse_optional("Room Number", &inputs.room_number)?,
        max_distance: parse_finite("Max Distance", &inputs.max_distance)?,
    })
}
