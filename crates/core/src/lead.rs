//! Lead model for the contact form
//!
//! A [`Lead`] can only be built through [`Lead::from_fields`], so holding one
//! means the required fields were present when the form was submitted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LeadError;

/// Form fields that must be non-empty for a lead to be accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Name,
    Email,
    Message,
}

impl RequiredField {
    /// Every required field, in form order
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values read from the lead form, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interested_sport: String,
    pub message: String,
}

impl LeadFields {
    /// Creates field values with the required fields set and the optional ones empty
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Builder pattern: set phone
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Builder pattern: set interested sport
    #[must_use]
    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.interested_sport = sport.into();
        self
    }

    /// Required fields whose value is empty, in form order
    ///
    /// Whitespace counts as a value; only truly empty fields are reported.
    #[must_use]
    pub fn missing_required(&self) -> Vec<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }

    fn value(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::Name => &self.name,
            RequiredField::Email => &self.email,
            RequiredField::Message => &self.message,
        }
    }
}

/// A validated lead, ready to hand to a [`crate::LeadSubmitter`]
///
/// Serializes to the payload shape the backend expects:
/// `{name, email, phone, interested_sport, message, created_at}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    name: String,
    email: String,
    phone: String,
    interested_sport: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl Lead {
    /// Validates form fields and stamps the lead with its creation time
    ///
    /// # Errors
    ///
    /// Returns `LeadError::MissingRequired` listing every empty required field.
    pub fn from_fields(fields: LeadFields, created_at: DateTime<Utc>) -> Result<Self, LeadError> {
        let missing = fields.missing_required();
        if !missing.is_empty() {
            return Err(LeadError::MissingRequired(missing));
        }

        let LeadFields {
            name,
            email,
            phone,
            interested_sport,
            message,
        } = fields;

        Ok(Self {
            name,
            email,
            phone,
            interested_sport,
            message,
            created_at,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Phone number, if one was given
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        Some(self.phone.as_str()).filter(|phone| !phone.is_empty())
    }

    /// Sport picked from the form's option list, if any
    #[must_use]
    pub fn interested_sport(&self) -> Option<&str> {
        Some(self.interested_sport.as_str()).filter(|sport| !sport.is_empty())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
