//! Input validation helpers
//!
//! Form checks for the UI layer. The identity service remains the authority
//! on field validity; nothing in the gateway calls these.

use regex::Regex;
use shared::RegisterRequest;
use std::sync::LazyLock;
use thiserror::Error;

// ── Upload limits ───────────────────────────────────────────────────

/// Maximum upload size (10 MiB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];
pub const ALLOWED_VIDEO_TYPES: &[&str] = &["video/mp4", "video/mov", "video/avi"];
pub const ALLOWED_AUDIO_TYPES: &[&str] = &["audio/mp3", "audio/wav", "audio/m4a"];

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-\+\(\)]+$").expect("valid phone pattern"));
static NATIONAL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{8,12}$").expect("valid national id pattern"));

/// Minimum number of digits in a phone number
const MIN_PHONE_DIGITS: usize = 10;

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Digits, spaces and `-+()` only, with at least ten digits
pub fn validate_phone_number(phone: &str) -> bool {
    PHONE_RE.is_match(phone) && phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// 8 to 12 digits
pub fn validate_national_id(id: &str) -> bool {
    NATIONAL_ID_RE.is_match(id)
}

pub fn validate_file_size(size: u64, max_size: u64) -> bool {
    size <= max_size
}

pub fn validate_file_type(mime: &str, allowed: &[&str]) -> bool {
    allowed.contains(&mime)
}

/// First problem found in a registration form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} is invalid")]
    Invalid(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Local pre-check of a registration form
pub fn validate_registration(form: &RegisterRequest) -> Result<(), FormError> {
    let required = [
        ("username", &form.username),
        ("email", &form.email),
        ("phone_number", &form.phone_number),
        ("national_id", &form.national_id),
        ("first_name", &form.first_name),
        ("last_name", &form.last_name),
        ("password", &form.password),
        ("password_confirm", &form.password_confirm),
    ];
    if let Some((field, _)) = required.into_iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(FormError::Required(field));
    }
    if !validate_email(&form.email) {
        return Err(FormError::Invalid("email"));
    }
    if !validate_phone_number(&form.phone_number) {
        return Err(FormError::Invalid("phone_number"));
    }
    if !validate_national_id(&form.national_id) {
        return Err(FormError::Invalid("national_id"));
    }
    if form.password != form.password_confirm {
        return Err(FormError::PasswordMismatch);
    }
    Ok(())
}
