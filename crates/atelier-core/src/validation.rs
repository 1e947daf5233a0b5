//! # Validation Module
//!
//! Input validation for catalog entries and checkout forms.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Frontend form                                                │
//! │  └── Immediate feedback (required markers, input masks)                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: storefront command (submit_checkout)                         │
//! │  └── THIS MODULE: field rules, Luhn check, expiry format               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: payment simulator                                            │
//! │  └── Refuses an empty cart                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart store has no validation layer of its own: its operations are
//! total and treat unknown identifiers as no-ops.
//!
//! ## Usage
//! ```rust
//! use atelier_core::validation::{validate_card_number, validate_email};
//!
//! assert!(validate_email("ada@example.com").is_ok());
//! assert!(validate_card_number("4242 4242 4242 4242").is_ok());
//! assert!(validate_card_number("4242 4242 4242 4241").is_err());
//! ```

use crate::checkout::{BillingInfo, ShippingInfo};
use crate::error::ValidationError;
use crate::types::Product;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 200;
const MAX_FIELD_LEN: usize = 100;

// =============================================================================
// Helpers
// =============================================================================

fn required<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value)
}

fn max_len(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

fn invalid(field: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Required, trimmed, at most [`MAX_FIELD_LEN`] characters.
fn validate_text_field(field: &str, value: &str) -> ValidationResult<()> {
    let value = required(field, value)?;
    max_len(field, value, MAX_FIELD_LEN)
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = required("name", name)?;
    max_len("name", name, MAX_NAME_LEN)
}

/// Validates a catalog product before it enters the catalog.
///
/// ## Rules
/// - `id` must not be empty and must not contain whitespace
/// - `name` per [`validate_product_name`]
/// - `price` must not be negative (zero is allowed for giveaways)
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    let id = required("product id", &product.id)?;
    if id.len() != product.id.len() || id.chars().any(char::is_whitespace) {
        return Err(invalid("product id", "must not contain whitespace"));
    }

    validate_product_name(&product.name)?;

    if product.price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a requested cart line quantity.
///
/// ## Rules
/// - Must not exceed [`MAX_ITEM_QUANTITY`] (999)
/// - Zero and negative values are allowed: they mean "remove the line"
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Contact Validators
// =============================================================================

/// Validates an email address.
///
/// ## Rules
/// - Exactly one `@`
/// - Non-empty local part
/// - Domain contains a dot that is neither first nor last
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = required("email", email)?;
    max_len("email", email, MAX_FIELD_LEN)?;

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("email", "must contain '@'"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("email", "must be of the form name@domain"));
    }

    let dotted = domain
        .find('.')
        .map(|i| i > 0 && !domain.ends_with('.'))
        .unwrap_or(false);
    if !dotted || email.chars().any(char::is_whitespace) {
        return Err(invalid("email", "domain must look like example.com"));
    }

    Ok(())
}

/// Validates a postal code.
///
/// ## Rules
/// - 3 to 10 characters
/// - Letters, digits, spaces and hyphens only (covers US, UK and EU formats)
pub fn validate_zip_code(zip: &str) -> ValidationResult<()> {
    let zip = required("zip code", zip)?;

    let len = zip.chars().count();
    if !(3..=10).contains(&len) {
        return Err(ValidationError::OutOfRange {
            field: "zip code length".to_string(),
            min: 3,
            max: 10,
        });
    }

    if !zip
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
    {
        return Err(invalid(
            "zip code",
            "must contain only letters, digits, spaces and hyphens",
        ));
    }

    Ok(())
}

// =============================================================================
// Card Validators
// =============================================================================

/// Validates a card number.
///
/// ## Rules
/// - Spaces and hyphens are ignored
/// - 13 to 19 digits remain
/// - Passes the Luhn checksum
///
/// ```text
/// 4 2 4 2  4 2 4 2  4 2 4 2  4 2 4 2
/// ↑   ↑    ↑   ↑    ...              every second digit from the right
/// doubled (minus 9 when > 9), all digits summed, total % 10 == 0
/// ```
pub fn validate_card_number(card_number: &str) -> ValidationResult<()> {
    let card_number = required("card number", card_number)?;

    let mut digits = Vec::with_capacity(19);
    for c in card_number.chars() {
        match c {
            ' ' | '-' => continue,
            d if d.is_ascii_digit() => digits.push(d as u32 - '0' as u32),
            _ => return Err(invalid("card number", "must contain only digits")),
        }
    }

    if !(13..=19).contains(&digits.len()) {
        return Err(ValidationError::OutOfRange {
            field: "card number length".to_string(),
            min: 13,
            max: 19,
        });
    }

    let checksum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    if checksum % 10 != 0 {
        return Err(invalid("card number", "checksum does not match"));
    }

    Ok(())
}

/// Validates a card expiry in `MM/YY` form.
///
/// Only the shape is checked (month 01-12, two-digit year); whether the card
/// has lapsed is the payment processor's call.
pub fn validate_expiry(expiry: &str) -> ValidationResult<()> {
    let expiry = required("expiry date", expiry)?;

    let (month, year) = expiry
        .split_once('/')
        .ok_or_else(|| invalid("expiry date", "must be MM/YY"))?;

    let two_digits = |s: &str| s.len() == 2 && s.chars().all(|c| c.is_ascii_digit());
    if !two_digits(month) || !two_digits(year) {
        return Err(invalid("expiry date", "must be MM/YY"));
    }

    let month: i64 = month
        .parse()
        .map_err(|_| invalid("expiry date", "must be MM/YY"))?;
    if !(1..=12).contains(&month) {
        return Err(ValidationError::OutOfRange {
            field: "expiry month".to_string(),
            min: 1,
            max: 12,
        });
    }

    Ok(())
}

/// Validates a card security code: 3 or 4 digits.
pub fn validate_cvv(cvv: &str) -> ValidationResult<()> {
    let cvv = required("cvv", cvv)?;
    if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("cvv", "must be 3 or 4 digits"));
    }
    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates every field of the shipping form, stopping at the first error.
pub fn validate_shipping(info: &ShippingInfo) -> ValidationResult<()> {
    validate_text_field("first name", &info.first_name)?;
    validate_text_field("last name", &info.last_name)?;
    validate_email(&info.email)?;
    validate_text_field("address", &info.address)?;
    validate_text_field("city", &info.city)?;
    validate_zip_code(&info.zip_code)
}

/// Validates every field of the billing form, stopping at the first error.
pub fn validate_billing(info: &BillingInfo) -> ValidationResult<()> {
    validate_card_number(&info.card_number)?;
    validate_expiry(&info.expiry_date)?;
    validate_cvv(&info.cvv)?;
    validate_text_field("name on card", &info.name_on_card)
}

// =============================================================================
// Unit Tests
// =============================================================================
