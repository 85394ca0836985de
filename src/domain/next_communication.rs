use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{CrmError, CrmResult};
use crate::domain::patch::{nullable, required};

/// A planned future contact with a company
///
/// `is_completed` starts false and only changes through an explicit update.
/// The company reference is not checked for existence.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct NextCommunication {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub company_id: Uuid,
    pub communication_type: String,
    pub scheduled_date: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Request body for scheduling a next communication
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNextCommunication {
    pub company_id: Option<Uuid>,
    pub communication_type: Option<String>,
    pub scheduled_date: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

/// Partial next-communication update
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextCommunicationUpdate {
    #[serde(default, deserialize_with = "nullable")]
    pub company_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "nullable")]
    pub communication_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub scheduled_date: Option<Option<String>>,
    pub is_completed: Option<bool>,
}

impl NextCommunication {
    pub fn new(input: NewNextCommunication) -> CrmResult<Self> {
        let company_id = input
            .company_id
            .ok_or_else(|| CrmError::validation("companyId is required"))?;
        let communication_type = required("communicationType", input.communication_type)
            .map_err(CrmError::Validation)?;
        let scheduled_date =
            required("scheduledDate", input.scheduled_date).map_err(CrmError::Validation)?;

        Ok(Self {
            id: Uuid::new_v4(),
            company_id,
            communication_type,
            scheduled_date,
            is_completed: input.is_completed,
            created_at: Utc::now().trunc_subsecs(6),
        })
    }

    /// Applies a partial update; the record is unchanged if validation fails
    pub fn apply(&mut self, update: NextCommunicationUpdate) -> CrmResult<()> {
        let mut candidate = self.clone();

        if let Some(company_id) = update.company_id {
            candidate.company_id =
                company_id.ok_or_else(|| CrmError::validation("companyId is required"))?;
        }
        if let Some(communication_type) = update.communication_type {
            candidate.communication_type =
                required("communicationType", communication_type).map_err(CrmError::Validation)?;
        }
        if let Some(scheduled_date) = update.scheduled_date {
            candidate.scheduled_date =
                required("scheduledDate", scheduled_date).map_err(CrmError::Validation)?;
        }
        if let Some(is_completed) = update.is_completed {
            candidate.is_completed = is_completed;
        }

        *self = candidate;
        Ok(())
    }
}
