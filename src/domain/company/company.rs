use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{Email, PhoneNumber};
use crate::domain::errors::{CrmError, CrmResult};
use crate::domain::patch::{nullable, required, storable, storable_opt};

/// Company document
///
/// Represents an organization whose communications are tracked.
///
/// # Invariants
/// - Name and location are non-empty
/// - Every email matches `local@domain.tld`, every phone number is ten digits
/// - `last_communications` is append-only through [`Company::record_communication`]
///   and is oldest first. Entries may dangle once a communication is deleted.
///
/// # Example
/// ```
/// use rolodex_api::domain::company::{Company, NewCompany};
///
/// let company = Company::new(NewCompany {
///     name: Some("Acme".to_string()),
///     location: Some("NY".to_string()),
///     ..Default::default()
/// })
/// .expect("valid company");
///
/// assert_eq!(company.name, "Acme");
/// assert!(company.last_communications.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub location: String,
    #[serde(rename = "linkedInProfile")]
    pub linkedin_profile: Option<String>,
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub comments: Option<String>,
    pub communication_periodicity: Option<String>,
    pub last_communications: Vec<Uuid>,
    pub next_communication: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a company
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "linkedInProfile")]
    pub linkedin_profile: Option<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    pub comments: Option<String>,
    pub communication_periodicity: Option<String>,
    pub next_communication: Option<String>,
}

/// Partial company update
///
/// Absent fields are left alone; explicit `null` clears an optional field and
/// fails validation for a required one. `lastCommunications` is not patchable.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUpdate {
    #[serde(default, deserialize_with = "nullable")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub location: Option<Option<String>>,
    #[serde(default, rename = "linkedInProfile", deserialize_with = "nullable")]
    pub linkedin_profile: Option<Option<String>>,
    pub emails: Option<Vec<String>>,
    pub phone_numbers: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub comments: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub communication_periodicity: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub next_communication: Option<Option<String>>,
}

impl Company {
    /// Creates a new Company document
    ///
    /// # Returns
    /// * `Ok(Company)` - Validated company with a fresh id and empty history
    /// * `Err(CrmError::Validation)` - If a required field is missing or a
    ///   contact entry is malformed
    pub fn new(input: NewCompany) -> CrmResult<Self> {
        let name = required("name", input.name).map_err(CrmError::Validation)?;
        let location = required("location", input.location).map_err(CrmError::Validation)?;

        let company = Self {
            id: Uuid::new_v4(),
            name,
            location,
            linkedin_profile: input.linkedin_profile,
            emails: input.emails,
            phone_numbers: input.phone_numbers,
            comments: input.comments,
            communication_periodicity: input.communication_periodicity,
            last_communications: Vec::new(),
            next_communication: input.next_communication,
            // Postgres keeps microseconds
            created_at: Utc::now().trunc_subsecs(6),
        };
        company.validate()?;

        Ok(company)
    }

    /// Applies a partial update and re-runs full validation
    ///
    /// The company is left untouched when the merged document is invalid.
    pub fn apply(&mut self, update: CompanyUpdate) -> CrmResult<()> {
        let mut candidate = self.clone();

        if let Some(name) = update.name {
            candidate.name = required("name", name).map_err(CrmError::Validation)?;
        }
        if let Some(location) = update.location {
            candidate.location = required("location", location).map_err(CrmError::Validation)?;
        }
        if let Some(linkedin_profile) = update.linkedin_profile {
            candidate.linkedin_profile = linkedin_profile;
        }
        if let Some(emails) = update.emails {
            candidate.emails = emails;
        }
        if let Some(phone_numbers) = update.phone_numbers {
            candidate.phone_numbers = phone_numbers;
        }
        if let Some(comments) = update.comments {
            candidate.comments = comments;
        }
        if let Some(periodicity) = update.communication_periodicity {
            candidate.communication_periodicity = periodicity;
        }
        if let Some(next) = update.next_communication {
            candidate.next_communication = next;
        }

        candidate.validate()?;
        *self = candidate;

        Ok(())
    }

    /// Appends a logged communication and overwrites the cached next step
    ///
    /// `next` replaces any previous value; an empty string is stored as null.
    pub fn record_communication(&mut self, communication_id: Uuid, next: Option<String>) {
        self.last_communications.push(communication_id);
        self.next_communication = next.filter(|n| !n.is_empty());
    }

    fn validate(&self) -> CrmResult<()> {
        if self.name.is_empty() {
            return Err(CrmError::validation("name is required"));
        }
        if self.location.is_empty() {
            return Err(CrmError::validation("location is required"));
        }
        storable("name", &self.name).map_err(CrmError::Validation)?;
        storable("location", &self.location).map_err(CrmError::Validation)?;
        storable_opt("linkedInProfile", &self.linkedin_profile).map_err(CrmError::Validation)?;
        storable_opt("comments", &self.comments).map_err(CrmError::Validation)?;
        storable_opt("communicationPeriodicity", &self.communication_periodicity)
            .map_err(CrmError::Validation)?;
        storable_opt("nextCommunication", &self.next_communication)
            .map_err(CrmError::Validation)?;
        for email in &self.emails {
            storable("emails", email).map_err(CrmError::Validation)?;
            Email::new(email.as_str()).map_err(CrmError::Validation)?;
        }
        for phone in &self.phone_numbers {
            PhoneNumber::new(phone.as_str()).map_err(CrmError::Validation)?;
        }

        Ok(())
    }
}
