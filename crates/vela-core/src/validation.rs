//! # Validation Module
//!
//! Input validation for the forms the client submits.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen (form library)                                        │
//! │  ├── Inline field hints while typing                                   │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command (Rust)                                               │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: checked before any order or request is made          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Remote services                                              │
//! │  ├── Auth provider (email in use, weak password)                       │
//! │  └── Catalog API (bad filter values)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vela_core::validation::{validate_email, validate_search_query};
//!
//! assert!(validate_email("ada@example.com").is_ok());
//! assert_eq!(validate_search_query("  shoes ").unwrap(), "shoes");
//! ```

use crate::auth::{Credentials, SignUpForm};
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::ShippingAddress;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Minimum password length accepted by the sign-in and sign-up forms.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum search query length, counted after trimming.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Fails with `Required` when the trimmed value is empty.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one `@` with a non-empty local part
/// - Domain contains a dot that is neither first nor last
/// - No whitespace
///
/// ## Example
/// ```rust
/// use vela_core::validation::validate_email;
///
/// assert!(validate_email("ada@example.com").is_ok());
/// assert!(validate_email("ada@example").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    validate_required("email", email)?;

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must be a valid email address".to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    match domain.rfind('.') {
        Some(dot) if dot > 0 && dot < domain.len() - 1 => Ok(()),
        _ => Err(invalid()),
    }
}

/// Validates a password: required, at least six characters.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (the search screen then shows nothing)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LENGTH {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LENGTH,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the shipping step of checkout.
///
/// Every field is required except `state`. Fields are checked in form order
/// and the first failure is returned.
pub fn validate_shipping_address(address: &ShippingAddress) -> ValidationResult<()> {
    validate_required("firstName", &address.first_name)?;
    validate_required("lastName", &address.last_name)?;
    validate_required("country", &address.country)?;
    validate_required("street", &address.street)?;
    validate_required("city", &address.city)?;
    validate_required("zipCode", &address.zip_code)?;
    validate_required("phone", &address.phone)?;
    Ok(())
}

/// Validates the sign-in form.
pub fn validate_credentials(credentials: &Credentials) -> ValidationResult<()> {
    validate_email(&credentials.email)?;
    validate_password(&credentials.password)
}

/// Validates the sign-up form.
///
/// ## Rules
/// - Name required
/// - Valid email
/// - Password of at least six characters
/// - Confirmation identical to the password
pub fn validate_sign_up(form: &SignUpForm) -> ValidationResult<()> {
    validate_required("name", &form.name)?;
    validate_email(&form.email)?;
    validate_password(&form.password)?;

    if form.password != form.confirm_password {
        return Err(ValidationError::Mismatch {
            field: "confirmPassword".to_string(),
            other: "password".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price filter value.
///
/// Zero is allowed; negative amounts are not.
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates the price filters of a product search.
///
/// ## Rules
/// - Every present price is non-negative
/// - `price_min ≤ price_max` when both are present
pub fn validate_price_filters(
    price: Option<Money>,
    price_min: Option<Money>,
    price_max: Option<Money>,
) -> ValidationResult<()> {
    if let Some(price) = price {
        validate_price("price", price)?;
    }
    if let Some(min) = price_min {
        validate_price("price_min", min)?;
    }
    if let Some(max) = price_max {
        validate_price("price_max", max)?;
    }

    if let (Some(min), Some(max)) = (price_min, price_max) {
        if min > max {
            return Err(ValidationError::InvalidRange {
                min_field: "price_min".to_string(),
                max_field: "price_max".to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
