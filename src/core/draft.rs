//! Signup draft types and required-field validation.
//!
//! A [`FormValues`] snapshot is what the form hands over on submit: raw
//! strings, with an empty string standing for a field the visitor left
//! blank. [`FormValues::finish`] is the pure validation step that either
//! produces a complete [`SignupDraft`] or names the gap.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while turning raw form values into a [`SignupDraft`].
///
/// None of these surface to the visitor; an incomplete submission simply
/// refuses to transition and the form's native prompts take over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Required field '{field}' is empty")]
    MissingField { field: &'static str },

    #[error("Unknown role value '{0}'")]
    UnknownRole(String),

    #[error("Unknown team size value '{0}'")]
    UnknownTeamSize(String),
}

/// The visitor's role, as offered by the signup form.
///
/// Wire values match the form's option values exactly.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "eng_manager")]
    EngManager,
    #[serde(rename = "scrum_master")]
    ScrumMaster,
    #[serde(rename = "cto")]
    Cto,
    #[serde(rename = "pm")]
    Pm,
    #[serde(rename = "dev")]
    Dev,
}

impl Role {
    /// The value transmitted to the analytics collector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EngManager => "eng_manager",
            Self::ScrumMaster => "scrum_master",
            Self::Cto => "cto",
            Self::Pm => "pm",
            Self::Dev => "dev",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eng_manager" => Ok(Self::EngManager),
            "scrum_master" => Ok(Self::ScrumMaster),
            "cto" => Ok(Self::Cto),
            "pm" => Ok(Self::Pm),
            "dev" => Ok(Self::Dev),
            other => Err(DraftError::UnknownRole(other.to_string())),
        }
    }
}

/// Engineering team size bracket, as offered by the signup form.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TeamSize {
    #[serde(rename = "1-10")]
    OneToTen,
    #[serde(rename = "11-50")]
    ElevenToFifty,
    #[serde(rename = "51-200")]
    FiftyOneToTwoHundred,
    #[serde(rename = "200+")]
    TwoHundredPlus,
}

impl TeamSize {
    /// The value transmitted to the analytics collector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToTen => "1-10",
            Self::ElevenToFifty => "11-50",
            Self::FiftyOneToTwoHundred => "51-200",
            Self::TwoHundredPlus => "200+",
        }
    }
}

impl fmt::Display for TeamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamSize {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-10" => Ok(Self::OneToTen),
            "11-50" => Ok(Self::ElevenToFifty),
            "51-200" => Ok(Self::FiftyOneToTwoHundred),
            "200+" => Ok(Self::TwoHundredPlus),
            other => Err(DraftError::UnknownTeamSize(other.to_string())),
        }
    }
}

/// A complete, validated waitlist signup.
///
/// Serializes with the transmitted field names (`email`, `role`,
/// `teamSize`).
///
/// # Example
///
/// ```rust
/// use ovel_waitlist::core::{Role, SignupDraft, TeamSize};
///
/// let draft = SignupDraft {
///     email: "sarah@techflow.io".to_string(),
///     role: Role::EngManager,
///     team_size: TeamSize::ElevenToFifty,
/// };
///
/// let json = serde_json::to_string(&draft).unwrap();
/// assert!(json.contains("\"teamSize\":\"11-50\""));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupDraft {
    pub email: String,
    pub role: Role,
    pub team_size: TeamSize,
}

/// Raw form snapshot, exactly as the form posts it.
///
/// Every field is present as a string; an empty string means the visitor
/// left the field blank (an unselected option posts `""`).
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FormValues {
    pub email: String,
    pub role: String,
    pub team_size: String,
}

impl FormValues {
    pub fn new(
        email: impl Into<String>,
        role: impl Into<String>,
        team_size: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            role: role.into(),
            team_size: team_size.into(),
        }
    }

    /// Validate the snapshot into a [`SignupDraft`].
    ///
    /// Pure; checks presence first (the form's own `required` semantics),
    /// then parses the select values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ovel_waitlist::core::{DraftError, FormValues};
    ///
    /// let complete = FormValues::new("a@b.com", "dev", "1-10");
    /// assert!(complete.finish().is_ok());
    ///
    /// let blank_size = FormValues::new("a@b.com", "dev", "");
    /// assert_eq!(
    ///     blank_size.finish(),
    ///     Err(DraftError::MissingField { field: "teamSize" })
    /// );
    /// ```
    pub fn finish(&self) -> Result<SignupDraft, DraftError> {
        if self.email.is_empty() {
            return Err(DraftError::MissingField { field: "email" });
        }
        if self.role.is_empty() {
            return Err(DraftError::MissingField { field: "role" });
        }
        if self.team_size.is_empty() {
            return Err(DraftError::MissingField { field: "teamSize" });
        }

        Ok(SignupDraft {
            email: self.email.clone(),
            role: self.role.parse()?,
            team_size: self.team_size.parse()?,
        })
    }
}
