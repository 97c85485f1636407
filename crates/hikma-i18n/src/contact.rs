//! Vocabulary and state of the contact modal.
//!
//! Each call to action on the site opens the same modal with one of four
//! form types; the type picks the translated title and subtitle.

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator as _};
use thiserror::Error;

#[derive(
    AsRefStr, Clone, Copy, Debug, Default, Display, EnumIter, EnumString, Eq, Hash, PartialEq,
)]
#[strum(serialize_all = "lowercase")]
pub enum FormType {
    #[default]
    General,
    Assessment,
    Partnership,
    Licensing,
}

impl FormType {
    pub fn title_key(self) -> &'static str {
        match self {
            Self::General => "form.general",
            Self::Assessment => "form.assessment",
            Self::Partnership => "form.partnership",
            Self::Licensing => "form.licensing",
        }
    }

    pub fn subtitle_key(self) -> &'static str {
        match self {
            Self::General => "form-subtitle.general",
            Self::Assessment => "form-subtitle.assessment",
            Self::Partnership => "form-subtitle.partnership",
            Self::Licensing => "form-subtitle.licensing",
        }
    }
}

/// Values typed into the modal.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub interest: String,
    pub message: String,
}

/// Fields that must be filled in before the form can be submitted.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum RequiredField {
    Name,
    Email,
    Message,
}

impl RequiredField {
    fn value(self, fields: &ContactFields) -> &str {
        match self {
            Self::Name => &fields.name,
            Self::Email => &fields.email,
            Self::Message => &fields.message,
        }
    }
}

/// A validated inquiry handed over on submit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContactRequest {
    pub form_type: FormType,
    pub fields: ContactFields,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ContactFormError {
    #[error("The contact form is not open")]
    NotOpen,
    #[error("Required field '{0}' is empty")]
    MissingField(RequiredField),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

impl ContactFormError {
    /// Translation key of the message shown next to the form.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::NotOpen => "form-error.not-open",
            Self::MissingField(RequiredField::Name) => "form-error.name",
            Self::MissingField(RequiredField::Email) => "form-error.email",
            Self::MissingField(RequiredField::Message) => "form-error.message",
            Self::InvalidEmail(_) => "form-error.email-invalid",
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !email.contains(char::is_whitespace)
}

/// Open/closed state of the contact modal and its current input.
#[derive(Clone, Debug, Default)]
pub struct ContactFormModal {
    form_type: Option<FormType>,
    fields: ContactFields,
}

impl ContactFormModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the modal for `form_type` with empty fields.
    pub fn open(&mut self, form_type: FormType) {
        self.form_type = Some(form_type);
        self.fields = ContactFields::default();
    }

    /// Closes the modal and discards any input.
    pub fn close(&mut self) {
        self.form_type = None;
        self.fields = ContactFields::default();
    }

    pub fn is_open(&self) -> bool {
        self.form_type.is_some()
    }

    pub fn form_type(&self) -> Option<FormType> {
        self.form_type
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactFields {
        &mut self.fields
    }

    /// Validates the input and, on success, returns it and resets the modal.
    ///
    /// On failure the modal stays open with its input intact.
    pub fn submit(&mut self) -> Result<ContactRequest, ContactFormError> {
        let form_type = self.form_type.ok_or(ContactFormError::NotOpen)?;

        if let Some(field) =
            RequiredField::iter().find(|field| field.value(&self.fields).trim().is_empty())
        {
            return Err(ContactFormError::MissingField(field));
        }

        let email = self.fields.email.trim();
        if !is_plausible_email(email) {
            return Err(ContactFormError::InvalidEmail(email.to_string()));
        }

        let fields = std::mem::take(&mut self.fields);
        self.form_type = None;
        tracing::debug!("Contact form '{}' submitted", form_type);

        Ok(ContactRequest { form_type, fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator as _;

    fn filled(modal: &mut ContactFormModal) {
        let fields = modal.fields_mut();
        fields.name = "Fatima Al Mansoori".to_string();
        fields.email = "fatima@example.ae".to_string();
        fields.message = "We run three cafés in Jumeirah.".to_string();
    }

    #[test]
    fn form_types_are_a_closed_set() {
        let codes: Vec<String> = FormType::iter().map(|t| t.to_string()).collect();
        assert_eq!(codes, ["general", "assessment", "partnership", "licensing"]);
        assert!("newsletter".parse::<FormType>().is_err());
    }

    #[test]
    fn keys_follow_form_type() {
        for form_type in FormType::iter() {
            assert_eq!(form_type.title_key(), format!("form.{}", form_type));
            assert_eq!(form_type.subtitle_key(), format!("form-subtitle.{}", form_type));
        }
    }

    #[test]
    fn submit_returns_request_and_resets() {
        let mut modal = ContactFormModal::new();
        modal.open(FormType::Assessment);
        filled(&mut modal);

        let request = modal.submit().unwrap();

        assert_eq!(request.form_type, FormType::Assessment);
        assert_eq!(request.fields.name, "Fatima Al Mansoori");
        assert!(!modal.is_open());
        assert_eq!(modal.fields(), &ContactFields::default());
    }

    #[test]
    fn submit_requires_open_modal() {
        let mut modal = ContactFormModal::new();
        assert_eq!(modal.submit(), Err(ContactFormError::NotOpen));
    }

    #[rstest]
    #[case(RequiredField::Name, "form-error.name")]
    #[case(RequiredField::Email, "form-error.email")]
    #[case(RequiredField::Message, "form-error.message")]
    fn submit_reports_first_missing_field(#[case] field: RequiredField, #[case] key: &str) {
        let mut modal = ContactFormModal::new();
        modal.open(FormType::General);
        filled(&mut modal);
        let fields = modal.fields_mut();
        match field {
            RequiredField::Name => fields.name = "  ".to_string(),
            RequiredField::Email => fields.email.clear(),
            RequiredField::Message => fields.message.clear(),
        }

        let error = modal.submit().unwrap_err();

        assert_eq!(error, ContactFormError::MissingField(field));
        assert_eq!(error.message_key(), key);
        assert!(modal.is_open());
    }

    #[rstest]
    #[case("fatima")]
    #[case("fatima@")]
    #[case("@example.ae")]
    #[case("fatima@example")]
    #[case("fa tima@example.ae")]
    fn submit_rejects_malformed_email(#[case] email: &str) {
        let mut modal = ContactFormModal::new();
        modal.open(FormType::Partnership);
        filled(&mut modal);
        modal.fields_mut().email = email.to_string();

        let error = modal.submit().unwrap_err();

        assert_eq!(error, ContactFormError::InvalidEmail(email.to_string()));
        assert_eq!(error.message_key(), "form-error.email-invalid");
        assert_eq!(modal.fields().email, email);
    }

    #[test]
    fn missing_field_names_the_field() {
        let error = ContactFormError::MissingField(RequiredField::Email);
        assert_eq!(error.to_string(), "Required field 'email' is empty");
    }

    #[test]
    fn reopening_discards_previous_input() {
        let mut modal = ContactFormModal::new();
        modal.open(FormType::General);
        filled(&mut modal);

        modal.open(FormType::Licensing);

        assert_eq!(modal.form_type(), Some(FormType::Licensing));
        assert!(modal.fields().name.is_empty());
    }

    #[test]
    fn close_discards_input() {
        let mut modal = ContactFormModal::new();
        modal.open(FormType::General);
        filled(&mut modal);

        modal.close();

        assert!(!modal.is_open());
        assert_eq!(modal.fields(), &ContactFields::default());
    }
}
