//! Field validation shared by the customer, employee and animal forms.
//!
//! Validation is all-or-nothing per submitted record: rules run in a fixed
//! order (name, email, phone, national ID, postal code, "other" free text,
//! then uniqueness) and the first failure aborts the whole mutation with the
//! store untouched. Uniqueness checks exclude the record being edited so a
//! record may keep its own name and ID.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{Gender, Person, PersonFields, Species};

static LETTERS_AND_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\s]+$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").unwrap());
static ELEVEN_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{11}$").unwrap());
static EIGHT_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8}$").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must have at least {min} letters, letters and spaces only")]
    InvalidName { min: usize },

    #[error("invalid email address")]
    InvalidEmail,

    #[error("phone must be exactly 11 digits")]
    InvalidPhone,

    #[error("national ID must be exactly 11 digits")]
    InvalidNationalId,

    #[error("postal code must be exactly 8 digits")]
    InvalidPostalCode,

    #[error("free-form {0} needs at least 2 letters, letters and spaces only")]
    InvalidOtherText(&'static str),

    #[error("name already registered: {0}")]
    DuplicateName(String),

    #[error("national ID already registered: {0}")]
    DuplicateNationalId(String),

    #[error("sex must be male or female")]
    InvalidSex,

    #[error("invalid date, expected dd/mm/yyyy")]
    InvalidDate,

    #[error("invalid time, expected HH:MM")]
    InvalidTime,

    #[error("appointment details must not be empty")]
    EmptyDetails,

    #[error("animals with owners cannot be marked ownerless")]
    OwnerlessWithOwners,
}

/// Case-insensitive equality, Unicode-aware. Used for every uniqueness check.
pub fn eq_ci(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn valid_letters(text: &str, min: usize) -> bool {
    text.chars().count() >= min && LETTERS_AND_SPACES.is_match(text)
}

/// Validates a person field set against a collection (customers or
/// employees). Pass `editing` when the fields replace an existing record.
pub fn person(
    fields: &PersonFields,
    collection: &[Person],
    editing: Option<Uuid>,
) -> Result<(), ValidationError> {
    if !valid_letters(&fields.name, 3) {
        return Err(ValidationError::InvalidName { min: 3 });
    }
    if let Some(email) = &fields.email {
        if !EMAIL.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }
    }
    if let Some(phone) = &fields.phone {
        if !ELEVEN_DIGITS.is_match(phone) {
            return Err(ValidationError::InvalidPhone);
        }
    }
    if let Some(id) = &fields.national_id {
        if !ELEVEN_DIGITS.is_match(id) {
            return Err(ValidationError::InvalidNationalId);
        }
    }
    if let Some(postal) = &fields.postal_code {
        if !EIGHT_DIGITS.is_match(postal) {
            return Err(ValidationError::InvalidPostalCode);
        }
    }
    if let Gender::Other(text) = &fields.gender {
        if !valid_letters(text, 2) {
            return Err(ValidationError::InvalidOtherText("gender"));
        }
    }

    let mut others = collection.iter().filter(|p| Some(p.id) != editing);
    if others.any(|p| eq_ci(&p.name, &fields.name)) {
        return Err(ValidationError::DuplicateName(fields.name.clone()));
    }
    if let Some(id) = &fields.national_id {
        let mut others = collection.iter().filter(|p| Some(p.id) != editing);
        if others.any(|p| p.national_id.as_deref().is_some_and(|other| eq_ci(other, id))) {
            return Err(ValidationError::DuplicateNationalId(id.clone()));
        }
    }
    Ok(())
}

/// Validates an animal's name and species text. Owner-related rules live with
/// the commands that know the current owner list.
pub fn animal(name: &str, species: &Species) -> Result<(), ValidationError> {
    if !valid_letters(name, 2) {
        return Err(ValidationError::InvalidName { min: 2 });
    }
    if let Species::Other(text) = species {
        if !valid_letters(text, 2) {
            return Err(ValidationError::InvalidOtherText("species"));
        }
    }
    Ok(())
}
