use rocket::serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email)]
    pub email: String,
}

/// Second step of a password reset: the emailed code plus the new password.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "validate_reset_code"))]
    pub code: String,
    #[validate(custom(function = "validate_new_password"))]
    pub new_password: String,
    #[validate(must_match(other = "new_password"))]
    pub confirm_new_password: String,
}

fn validate_reset_code(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("reset_code"));
    }
    Ok(())
}

const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

// At least 8 characters from letters, digits and PASSWORD_SYMBOLS, with one digit and one symbol.
fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    let allowed = password.chars().all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c));
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if password.chars().count() < 8 || !allowed || !has_digit || !has_symbol {
        return Err(ValidationError::new("password_strength"));
    }
    Ok(())
}

/// A password-recovery form: where it posts and where the flow continues.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PasswordStepView {
    pub action: String,
    pub next: String,
}

/// Where the login form posts and what it links to.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    pub action: String,
    pub forgot_password: String,
    pub reset_password: String,
}
