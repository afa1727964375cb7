use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern is valid")
});

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// Newsletter sign-up: a single address, trimmed.
pub fn subscriber_email(value: &str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(value.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Budget,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter your email")]
    EmailRequired,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please select a service")]
    MissingService,
    #[error("Please select a budget")]
    MissingBudget,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameTooShort => Field::Name,
            FieldError::EmailRequired | FieldError::InvalidEmail => Field::Email,
            FieldError::MissingService => Field::Service,
            FieldError::MissingBudget => Field::Budget,
            FieldError::MessageTooShort => Field::Message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|err| err.field() == field)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub budget: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Service => &mut self.service,
            Field::Budget => &mut self.budget,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Checks every field and reports all failures at once, in form order.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = Vec::new();
        if self.name.trim().chars().count() < NAME_MIN_CHARS {
            errors.push(FieldError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.service.trim().is_empty() {
            errors.push(FieldError::MissingService);
        }
        if self.budget.trim().is_empty() {
            errors.push(FieldError::MissingBudget);
        }
        if self.message.trim().chars().count() < MESSAGE_MIN_CHARS {
            errors.push(FieldError::MessageTooShort);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormErrors(errors))
        }
    }
}

#[cfg(test)]
impl FormErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Jane Smith".into(),
            email: "jane@company.com".into(),
            phone: String::new(),
            service: "SEO Optimization".into(),
            budget: "$1,000 - $2,500/mo".into(),
            message: "We need help with our launch.".into(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn set_writes_the_named_field() {
        let mut form = ContactForm::default();
        form.set(Field::Budget, "$5,000+/mo".into());
        form.set(Field::Phone, "555".into());
        assert_eq!(form.budget, "$5,000+/mo");
        assert_eq!(form.phone, "555");
        assert!(form.name.is_empty());
    }

    #[test]
    fn phone_is_optional() {
        let mut form = filled();
        form.phone = "+1 (555) 000-0000".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(Field::Name), Some(&FieldError::NameTooShort));
        assert_eq!(errors.get(Field::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(errors.get(Field::Service), Some(&FieldError::MissingService));
        assert_eq!(errors.get(Field::Budget), Some(&FieldError::MissingBudget));
        assert_eq!(errors.get(Field::Message), Some(&FieldError::MessageTooShort));
        assert_eq!(errors.get(Field::Phone), None);
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let mut form = filled();
        form.name = "É".into();
        assert_eq!(
            form.validate().unwrap_err().get(Field::Name),
            Some(&FieldError::NameTooShort)
        );
        form.name = "Éa".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn short_message_is_rejected_with_its_message() {
        let mut form = filled();
        form.message = "hi there".into();
        let errors = form.validate().unwrap_err();
        let err = errors.get(Field::Message).unwrap();
        assert_eq!(err.to_string(), "Message must be at least 10 characters");
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("hello@janedoe.com"));
        assert!(is_valid_email("  a.b+c@sub.example.co  "));
        assert!(!is_valid_email("hello@janedoe"));
        assert!(!is_valid_email("hello janedoe.com"));
        assert!(!is_valid_email("@janedoe.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn newsletter_needs_a_real_address() {
        assert_eq!(subscriber_email("   "), Err(FieldError::EmailRequired));
        assert_eq!(subscriber_email("reader@"), Err(FieldError::InvalidEmail));
        assert_eq!(subscriber_email(" reader@mail.com "), Ok("reader@mail.com".to_string()));
    }
}
