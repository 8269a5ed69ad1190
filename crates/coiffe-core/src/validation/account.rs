//! Registration and login form rules.

use super::{ValidationErrors, non_blank};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("email pattern is valid")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[0-9]{10,13}$").expect("phone pattern is valid"));

const MIN_PASSWORD_LEN: usize = 6;
const MIN_FULL_NAME_LEN: usize = 2;

/// Input of the sign-up form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub phone_number: String,
}

impl RegistrationForm {
    /// Validates every field and returns the trimmed form.
    pub fn validate(&self) -> Result<RegistrationForm, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let email = self.email.trim();
        let password = self.password.trim();
        let confirm = self.confirm_password.trim();
        let full_name = self.full_name.trim();
        let phone = self.phone_number.trim();

        check_email(email, &mut errors);

        if password.is_empty() {
            errors.add("password", "Password is required");
        } else if password.chars().count() < MIN_PASSWORD_LEN {
            errors.add("password", "Password must be at least 6 characters");
        } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
            errors.add(
                "password",
                "Password must contain at least one uppercase letter",
            );
        } else if !password.chars().any(|c| c.is_ascii_lowercase()) {
            errors.add(
                "password",
                "Password must contain at least one lowercase letter",
            );
        } else if !password.chars().any(|c| c.is_ascii_digit()) {
            errors.add("password", "Password must contain at least one number");
        }

        if confirm.is_empty() {
            errors.add("confirm_password", "Please confirm your password");
        } else if confirm != password {
            errors.add("confirm_password", "Passwords do not match");
        }

        if full_name.is_empty() {
            errors.add("full_name", "Full name is required");
        } else if full_name.chars().count() < MIN_FULL_NAME_LEN {
            errors.add("full_name", "Full name must be at least 2 characters");
        }

        match non_blank(phone) {
            None => errors.add("phone_number", "Phone number is required"),
            Some(p) if !PHONE_PATTERN.is_match(p) => {
                errors.add("phone_number", "Please enter a valid phone number")
            }
            Some(_) => {}
        }

        errors.into_result(RegistrationForm {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            full_name: full_name.to_string(),
            phone_number: phone.to_string(),
        })
    }
}

/// Input of the sign-in form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Validates both fields and returns the trimmed form.
    pub fn validate(&self) -> Result<LoginForm, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let email = self.email.trim();
        let password = self.password.trim();

        check_email(email, &mut errors);

        if password.is_empty() {
            errors.add("password", "Password is required");
        } else if password.chars().count() < MIN_PASSWORD_LEN {
            errors.add("password", "Password must be at least 6 characters");
        }

        errors.into_result(LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

fn check_email(email: &str, errors: &mut ValidationErrors) {
    if email.is_empty() {
        errors.add("email", "Email is required");
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.add("email", "Please enter a valid email address");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> RegistrationForm {
        RegistrationForm {
            email: " an.nguyen@example.com ".into(),
            password: "Secret1".into(),
            confirm_password: "Secret1".into(),
            full_name: "An Nguyen".into(),
            phone_number: "+84901234567".into(),
        }
    }

    #[test]
    fn test_accepts_valid_registration_and_trims() {
        let form = valid_registration().validate().expect("form should be valid");
        assert_eq!(form.email, "an.nguyen@example.com");
    }

    #[test]
    fn test_reports_first_failing_password_rule() {
        let cases = [
            ("", "Password is required"),
            ("Ab1", "Password must be at least 6 characters"),
            ("secret1", "Password must contain at least one uppercase letter"),
            ("SECRET1", "Password must contain at least one lowercase letter"),
            ("Secrets", "Password must contain at least one number"),
        ];
        for (password, expected) in cases {
            let mut form = valid_registration();
            form.password = password.into();
            form.confirm_password = password.into();
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.message_for("password"), Some(expected), "{password}");
        }
    }

    #[test]
    fn test_rejects_mismatched_confirmation() {
        let mut form = valid_registration();
        form.confirm_password = "Secret2".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.message_for("confirm_password"),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_phone_number_format() {
        for ok in ["0901234567", "+840901234567", "1234567890123"] {
            let mut form = valid_registration();
            form.phone_number = ok.into();
            assert!(form.validate().is_ok(), "{ok} should be accepted");
        }
        for bad in ["12345", "09012345678901", "090-123-4567", "++0901234567"] {
            let mut form = valid_registration();
            form.phone_number = bad.into();
            let errors = form.validate().unwrap_err();
            assert_eq!(
                errors.message_for("phone_number"),
                Some("Please enter a valid phone number"),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_short_full_name_is_rejected() {
        let mut form = valid_registration();
        form.full_name = "A".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message_for("full_name"),
            Some("Full name must be at least 2 characters")
        );
    }

    #[test]
    fn test_login_requires_valid_email_and_password_length() {
        let errors = LoginForm {
            email: "not-an-email".into(),
            password: "12345".into(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            errors.message_for("email"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            errors.message_for("password"),
            Some("Password must be at least 6 characters")
        );

        let ok = LoginForm {
            email: "user@example.com".into(),
            password: "whatever".into(),
        }
        .validate();
        assert!(ok.is_ok());
    }
}
