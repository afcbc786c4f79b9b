use crate::api::{ApiError, LoginRequest, RegisterRequest};

pub const MIN_PASSWORD_LEN: usize = 6;

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Please enter your email"));
    }
    if !looks_like_email(email.trim()) {
        return Err(ApiError::validation("Please enter a valid email address"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter your password"));
    }
    Ok(())
}

pub fn validate_login(request: &LoginRequest) -> Result<(), ApiError> {
    validate_credentials(&request.email, &request.password)
}

pub fn validate_register(request: &RegisterRequest) -> Result<(), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("Please enter your name"));
    }
    validate_credentials(&request.email, &request.password)?;
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}
