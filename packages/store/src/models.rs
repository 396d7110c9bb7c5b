//! # Domain models for directory records
//!
//! Defines the data structures that flow between the [`crate::RecordStore`], the
//! directory controller and the UI. These types are `Serialize + Deserialize`
//! so they can be persisted or sent across a process boundary unchanged.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`RecordId`] | The opaque, store-assigned identifier of a record. Never reused. |
//! | [`Profile`] | The editable attribute set of a user. Both drafts (new and edit) are profiles. |
//! | [`Record`] | A persisted profile together with its identifier. |
//! | [`Gender`] | One of `male`, `female`, `other`, or unspecified (stored as `""`). |
//! | [`Field`] | Names a single attribute, used for form binding and search. |
//!
//! ## Field binding
//!
//! Forms edit a profile one input at a time through [`Profile::set`], which takes
//! the raw text of the input. [`Profile::get`] is its inverse and is also what the
//! search filter matches against.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Format used for birthdates, both in forms and in the store.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Store-assigned record identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Self-reported gender of a user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl Gender {
    /// All choices, in the order a select input lists them.
    pub const ALL: [Gender; 4] = [
        Gender::Unspecified,
        Gender::Male,
        Gender::Female,
        Gender::Other,
    ];

    /// Stored form. Unspecified is the empty string.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::Unspecified => "",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::Unspecified => "Select Gender",
        }
    }

    /// Parse the stored or submitted form. Matching ignores case and
    /// surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "unspecified" => Ok(Gender::Unspecified),
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(ValidationError::InvalidGender(value.to_string())),
        }
    }
}

/// A single attribute of a [`Profile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Gender,
    Job,
    Address,
    Birthdate,
    Education,
}

impl Field {
    /// Every field, in table column order.
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Gender,
        Field::Job,
        Field::Address,
        Field::Birthdate,
        Field::Education,
    ];

    /// Attribute key used by the store.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Gender => "gender",
            Field::Job => "job",
            Field::Address => "address",
            Field::Birthdate => "birthdate",
            Field::Education => "education",
        }
    }

    /// Column header and input placeholder.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Gender => "Gender",
            Field::Job => "Job",
            Field::Address => "Address",
            Field::Birthdate => "Birthdate",
            Field::Education => "Education",
        }
    }
}

/// Editable attributes of a user. Empty strings mean "not provided".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub education: String,
}

impl Profile {
    /// Shorthand for a profile with only the required fields filled in.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Check the two required fields. Both must be non-empty after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(ValidationError::MissingRequired);
        }
        Ok(())
    }

    /// Text form of a field, as shown in a form input or table cell.
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Email => self.email.clone(),
            Field::Phone => self.phone.clone(),
            Field::Gender => self.gender.as_str().to_string(),
            Field::Job => self.job.clone(),
            Field::Address => self.address.clone(),
            Field::Birthdate => self
                .birthdate
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            Field::Education => self.education.clone(),
        }
    }

    /// Assign a field from the raw text of its input.
    ///
    /// On error the profile is left unchanged.
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), ValidationError> {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Phone => self.phone = value.to_string(),
            Field::Gender => self.gender = Gender::parse(value)?,
            Field::Job => self.job = value.to_string(),
            Field::Address => self.address = value.to_string(),
            Field::Birthdate => self.birthdate = parse_birthdate(value)?,
            Field::Education => self.education = value.to_string(),
        }
        Ok(())
    }
}

/// Parse an ISO 8601 calendar date. Blank input clears the date.
pub fn parse_birthdate(value: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// A user record as held by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub profile: Profile,
}

impl Record {
    pub fn new(id: RecordId, profile: Profile) -> Self {
        Self { id, profile }
    }

    /// Every searchable value of the record, identifier included.
    pub fn search_values(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.id.to_string())
            .chain(Field::ALL.into_iter().map(|field| self.profile.get(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_trimmed_name_and_email() {
        assert!(Profile::new("Ana", "a@x.com").validate().is_ok());
        assert_eq!(
            Profile::new("   ", "a@x.com").validate(),
            Err(ValidationError::MissingRequired)
        );
        assert_eq!(
            Profile::new("Ana", "\t\n").validate(),
            Err(ValidationError::MissingRequired)
        );
        assert_eq!(
            Profile::default().validate(),
            Err(ValidationError::MissingRequired)
        );
    }

    #[test]
    fn test_set_binds_text_fields() {
        let mut profile = Profile::default();
        profile.set(Field::Name, "Ana").unwrap();
        profile.set(Field::Job, "Engineer").unwrap();
        profile.set(Field::Address, "1 Main St\nSpringfield").unwrap();

        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.job, "Engineer");
        assert_eq!(profile.get(Field::Address), "1 Main St\nSpringfield");
    }

    #[test]
    fn test_set_gender() {
        let mut profile = Profile::default();
        profile.set(Field::Gender, "Female").unwrap();
        assert_eq!(profile.gender, Gender::Female);

        profile.set(Field::Gender, "").unwrap();
        assert_eq!(profile.gender, Gender::Unspecified);

        let err = profile.set(Field::Gender, "robot").unwrap_err();
        assert_eq!(err, ValidationError::InvalidGender("robot".to_string()));
        assert_eq!(profile.gender, Gender::Unspecified);
    }

    #[test]
    fn test_set_birthdate() {
        let mut profile = Profile::default();
        profile.set(Field::Birthdate, "1990-04-12").unwrap();
        assert_eq!(profile.birthdate, NaiveDate::from_ymd_opt(1990, 4, 12));
        assert_eq!(profile.get(Field::Birthdate), "1990-04-12");

        assert!(profile.set(Field::Birthdate, "12/04/1990").is_err());
        assert_eq!(profile.get(Field::Birthdate), "1990-04-12");

        profile.set(Field::Birthdate, " ").unwrap();
        assert!(profile.birthdate.is_none());
        assert_eq!(profile.get(Field::Birthdate), "");
    }

    #[test]
    fn test_search_values_include_id_and_every_field() {
        let mut profile = Profile::new("Ana", "a@x.com");
        profile.gender = Gender::Other;
        let record = Record::new(RecordId::new("abc123"), profile);

        let values: Vec<String> = record.search_values().collect();
        assert_eq!(values.len(), 1 + Field::ALL.len());
        assert_eq!(values[0], "abc123");
        assert!(values.contains(&"other".to_string()));
    }

    #[test]
    fn test_record_serializes_flat() {
        let mut profile = Profile::new("Ana", "a@x.com");
        profile.birthdate = NaiveDate::from_ymd_opt(1990, 4, 12);
        let record = Record::new(RecordId::new("id1"), profile);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "id1");
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["gender"], "");
        assert_eq!(json["birthdate"], "1990-04-12");
        assert!(json.get("profile").is_none());

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
