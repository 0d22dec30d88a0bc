//! Local-only form drafts for new items and store registration.
//!
//! Nothing here is sent anywhere: a valid submission is logged and the
//! owning modal closes.
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::records::parse_tags;

static PRICE_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormField {
    Name,
    Price,
    Tags,
    Description,
    ImageUrl,
    Address,
    Hours,
    Story,
}

impl FormField {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Price => "Price",
            Self::Tags => "Tags",
            Self::Description => "Description",
            Self::ImageUrl => "Image URL",
            Self::Address => "Address",
            Self::Hours => "Hours",
            Self::Story => "Story",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: FormField },
    #[error("Price must be a number with at most two decimals")]
    InvalidPrice,
}

impl FormError {
    #[must_use]
    pub const fn field(&self) -> FormField {
        match self {
            Self::Required { field } => *field,
            Self::InvalidPrice => FormField::Price,
        }
    }
}

/// Errors for one submission, looked up by field when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(Vec<FormError>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn for_field(&self, field: FormField) -> Option<&FormError> {
        self.0.iter().find(|err| err.field() == field)
    }

    #[must_use]
    pub fn all(&self) -> &[FormError] {
        &self.0
    }

    fn push(&mut self, err: FormError) {
        self.0.push(err);
    }
}

/// `true` for whole numbers or numbers with one or two decimals.
#[must_use]
pub fn is_valid_price(raw: &str) -> bool {
    PRICE_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(raw.trim()))
}

/// Parse a validated price string into cents.
#[must_use]
pub fn parse_price_cents(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if !is_valid_price(raw) {
        return None;
    }
    let (whole, fraction) = raw.split_once('.').unwrap_or((raw, ""));
    let whole: u64 = whole.parse().ok()?;
    let fraction: u64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(fraction)
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn require(value: &str, field: FormField, errors: &mut FieldErrors) {
    if value.trim().is_empty() {
        errors.push(FormError::Required { field });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewItemDraft {
    pub name: String,
    pub price: String,
    pub tags: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewItemSubmission {
    pub name: String,
    pub price_cents: u64,
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl NewItemDraft {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Price => self.price = value,
            FormField::Tags => self.tags = value,
            FormField::Description => self.description = value,
            FormField::ImageUrl => self.image_url = value,
            other => log::warn!("New item form has no {other} field"),
        }
    }

    /// # Errors
    ///
    /// Returns every field problem found: missing name, missing price, or a
    /// price that is not a plain decimal amount.
    pub fn validate(&self) -> Result<NewItemSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();
        require(&self.name, FormField::Name, &mut errors);
        require(&self.price, FormField::Price, &mut errors);
        let price_cents = if self.price.trim().is_empty() {
            None
        } else {
            let parsed = parse_price_cents(&self.price);
            if parsed.is_none() {
                errors.push(FormError::InvalidPrice);
            }
            parsed
        };
        match price_cents {
            Some(price_cents) if errors.is_empty() => Ok(NewItemSubmission {
                name: self.name.trim().to_string(),
                price_cents,
                tags: parse_tags(&self.tags),
                description: optional(&self.description),
                image_url: optional(&self.image_url),
            }),
            _ => Err(errors),
        }
    }

    /// Validate, log the submission and reset the draft on success.
    ///
    /// # Errors
    ///
    /// Returns the field errors and leaves the draft untouched when invalid.
    pub fn submit(&mut self) -> Result<NewItemSubmission, FieldErrors> {
        let submission = self.validate()?;
        log::info!("New item submitted locally: {submission:?}");
        *self = Self::default();
        Ok(submission)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreRegistrationDraft {
    pub name: String,
    pub address: String,
    pub hours: String,
    pub description: String,
    pub story: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreRegistration {
    pub name: String,
    pub address: String,
    pub hours: Option<String>,
    pub description: Option<String>,
    pub story: Option<String>,
}

impl StoreRegistrationDraft {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Address => self.address = value,
            FormField::Hours => self.hours = value,
            FormField::Description => self.description = value,
            FormField::Story => self.story = value,
            other => log::warn!("Store registration form has no {other} field"),
        }
    }

    /// # Errors
    ///
    /// Returns the missing required fields (name, address).
    pub fn validate(&self) -> Result<StoreRegistration, FieldErrors> {
        let mut errors = FieldErrors::default();
        require(&self.name, FormField::Name, &mut errors);
        require(&self.address, FormField::Address, &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(StoreRegistration {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            hours: optional(&self.hours),
            description: optional(&self.description),
            story: optional(&self.story),
        })
    }

    /// # Errors
    ///
    /// Returns the field errors when the draft is incomplete.
    pub fn submit(&mut self) -> Result<StoreRegistration, FieldErrors> {
        let registration = self.validate()?;
        log::info!("Store registration submitted locally: {registration:?}");
        *self = Self::default();
        Ok(registration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_pattern() {
        for ok in ["0", "12", "12.5", "12.50", " 3.99 "] {
            assert!(is_valid_price(ok), "{ok} should be valid");
        }
        for bad in ["", "12.", ".5", "1.234", "-2", "abc", "1,50"] {
            assert!(!is_valid_price(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn price_cents_parsing() {
        assert_eq!(parse_price_cents("12.5"), Some(1250));
        assert_eq!(parse_price_cents("12.05"), Some(1205));
        assert_eq!(parse_price_cents("7"), Some(700));
        assert_eq!(parse_price_cents("7.123"), None);
    }

    #[test]
    fn new_item_requires_name_and_price() {
        let errors = NewItemDraft::default().validate().unwrap_err();
        assert_eq!(
            errors.for_field(FormField::Name),
            Some(&FormError::Required {
                field: FormField::Name
            })
        );
        assert_eq!(
            errors.for_field(FormField::Price),
            Some(&FormError::Required {
                field: FormField::Price
            })
        );
        assert_eq!(errors.all().len(), 2);
    }

    #[test]
    fn new_item_rejects_bad_price() {
        let mut draft = NewItemDraft::default();
        draft.set(FormField::Name, "Denim Jacket".into());
        draft.set(FormField::Price, "ten".into());
        let errors = draft.submit().unwrap_err();
        assert_eq!(errors.all(), &[FormError::InvalidPrice]);
        assert_eq!(draft.name, "Denim Jacket");
    }

    #[test]
    fn new_item_submit_resets_draft() {
        let mut draft = NewItemDraft::default();
        draft.set(FormField::Name, " Denim Jacket ".into());
        draft.set(FormField::Price, "29.99".into());
        draft.set(FormField::Tags, "denim, vintage,".into());
        let submission = draft.submit().unwrap();
        assert_eq!(submission.name, "Denim Jacket");
        assert_eq!(submission.price_cents, 2999);
        assert_eq!(submission.tags, vec!["denim", "vintage"]);
        assert_eq!(submission.description, None);
        assert_eq!(draft, NewItemDraft::default());
    }

    #[test]
    fn store_registration_requires_name_and_address() {
        let mut draft = StoreRegistrationDraft::default();
        draft.set(FormField::Name, "Second Act".into());
        let errors = draft.validate().unwrap_err();
        assert!(errors.for_field(FormField::Address).is_some());
        assert!(errors.for_field(FormField::Name).is_none());

        draft.set(FormField::Address, "22 Oak Ave".into());
        draft.set(FormField::Story, "Family run since 1987".into());
        let registration = draft.submit().unwrap();
        assert_eq!(registration.address, "22 Oak Ave");
        assert_eq!(registration.story.as_deref(), Some("Family run since 1987"));
        assert_eq!(draft, StoreRegistrationDraft::default());
    }
}
