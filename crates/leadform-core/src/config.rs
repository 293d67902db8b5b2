//! User-facing text for the contact dialog.
//!
//! The Russian copy is the product's own wording and is the default.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, SubmitError};
use crate::form::FormField;

/// Language of the dialog text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    /// Dialog text in this language
    pub fn copy(&self) -> FormCopy {
        match self {
            Locale::Ru => FormCopy::russian(),
            Locale::En => FormCopy::english(),
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" | "ru-ru" => Ok(Locale::Ru),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(ConfigError::UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Label and placeholder of one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCopy {
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// All text shown by the contact dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCopy {
    pub title: &'static str,
    pub description: &'static str,
    pub company: FieldCopy,
    pub name: FieldCopy,
    pub email: FieldCopy,
    pub phone: FieldCopy,
    pub budget: FieldCopy,
    pub message: FieldCopy,
    pub submit: &'static str,
    pub cancel: &'static str,
    pub consent: &'static str,
    /// Shown once the submission has been reported
    pub thanks: &'static str,
    /// Inline error when the request could not be delivered
    pub delivery_failed: &'static str,
    /// Inline error prefix when required fields are empty
    pub fill_required: &'static str,
    /// Caption of the button that opens the dialog
    pub open_dialog: &'static str,
}

impl FormCopy {
    pub fn russian() -> Self {
        Self {
            title: "Подключение к платформе",
            description: "Оставьте заявку, и наш менеджер свяжется с вами для настройки доступа",
            company: FieldCopy {
                label: "Компания",
                placeholder: "Название вашей компании",
            },
            name: FieldCopy {
                label: "Имя",
                placeholder: "Ваше имя",
            },
            email: FieldCopy {
                label: "Email",
                placeholder: "email@company.com",
            },
            phone: FieldCopy {
                label: "Телефон",
                placeholder: "+7 (999) 123-45-67",
            },
            budget: FieldCopy {
                label: "Месячный бюджет",
                placeholder: "Например: от 500 000 ₽",
            },
            message: FieldCopy {
                label: "Комментарий",
                placeholder: "Расскажите о ваших задачах и целях...",
            },
            submit: "Отправить заявку",
            cancel: "Отмена",
            consent: "Нажимая \"Отправить заявку\", вы соглашаетесь с обработкой персональных данных",
            thanks: "Спасибо! Мы свяжемся с вами в ближайшее время.",
            delivery_failed: "Не удалось отправить заявку. Попробуйте ещё раз.",
            fill_required: "Заполните обязательные поля",
            open_dialog: "Подключиться",
        }
    }

    pub fn english() -> Self {
        Self {
            title: "Connect to the platform",
            description: "Leave a request and our manager will contact you to set up access",
            company: FieldCopy {
                label: "Company",
                placeholder: "Your company name",
            },
            name: FieldCopy {
                label: "Name",
                placeholder: "Your name",
            },
            email: FieldCopy {
                label: "Email",
                placeholder: "email@company.com",
            },
            phone: FieldCopy {
                label: "Phone",
                placeholder: "+1 (555) 123-4567",
            },
            budget: FieldCopy {
                label: "Monthly budget",
                placeholder: "For example: from $5,000",
            },
            message: FieldCopy {
                label: "Comment",
                placeholder: "Tell us about your goals...",
            },
            submit: "Send request",
            cancel: "Cancel",
            consent: "By clicking \"Send request\" you agree to the processing of personal data",
            thanks: "Thank you! We will be in touch shortly.",
            delivery_failed: "Could not send the request. Please try again.",
            fill_required: "Please fill in the required fields",
            open_dialog: "Get access",
        }
    }

    /// Label and placeholder for a field
    pub fn field(&self, field: FormField) -> &FieldCopy {
        match field {
            FormField::Company => &self.company,
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Budget => &self.budget,
            FormField::Message => &self.message,
        }
    }

    /// Inline text for a failed submit.
    ///
    /// Transport failures get a retry hint; empty required fields are
    /// listed by their labels.
    pub fn submit_error(&self, err: &SubmitError) -> String {
        match err {
            SubmitError::Incomplete { missing } => {
                let labels: Vec<_> = missing.iter().map(|f| self.field(*f).label).collect();
                format!("{}: {}", self.fill_required, labels.join(", "))
            }
            SubmitError::Sink(_) => self.delivery_failed.to_string(),
        }
    }
}

impl Default for FormCopy {
    fn default() -> Self {
        Locale::default().copy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SinkError;

    #[test]
    fn parses_locale_tags() {
        assert_eq!("ru".parse::<Locale>(), Ok(Locale::Ru));
        assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("en-GB".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(
            "de".parse::<Locale>(),
            Err(ConfigError::UnknownLocale("de".to_string()))
        );
    }

    #[test]
    fn default_copy_is_russian() {
        assert_eq!(FormCopy::default(), FormCopy::russian());
        assert_eq!(Locale::default().tag(), "ru");
    }

    #[test]
    fn incomplete_error_lists_localized_labels() {
        let err = SubmitError::Incomplete {
            missing: vec![FormField::Company, FormField::Email],
        };
        assert_eq!(
            FormCopy::russian().submit_error(&err),
            "Заполните обязательные поля: Компания, Email"
        );
        assert_eq!(
            FormCopy::english().submit_error(&err),
            "Please fill in the required fields: Company, Email"
        );
    }

    #[test]
    fn transport_error_uses_delivery_text() {
        let err = SubmitError::Sink(SinkError::Closed);
        let copy = FormCopy::russian();
        let text = copy.submit_error(&err);
        assert_eq!(text, copy.delivery_failed);
        assert!(!text.contains("Lead sink"));
        assert_ne!(text, copy.submit_error(&SubmitError::Incomplete {
            missing: vec![FormField::Name],
        }));
    }

    #[test]
    fn every_field_has_label_and_placeholder() {
        for locale in [Locale::Ru, Locale::En] {
            let copy = locale.copy();
            for field in FormField::ALL {
                let text = copy.field(field);
                assert!(!text.label.is_empty(), "{} {} label", locale, field);
                assert!(!text.placeholder.is_empty(), "{} {} placeholder", locale, field);
            }
        }
    }
}
