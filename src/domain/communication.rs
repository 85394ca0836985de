use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{CrmError, CrmResult};
use crate::domain::patch::{required, storable_opt};

/// Historical record of a contact event with a company
///
/// Created only by logging (see [`crate::domain::services::log_communication`]).
/// `communication_date` is free-form text and is never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Communication {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub company_id: Uuid,
    pub communication_type: String,
    pub communication_date: String,
    pub notes: Option<String>,
    pub next_communication: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for logging a communication
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommunication {
    pub company_id: Option<Uuid>,
    pub communication_type: Option<String>,
    pub communication_date: Option<String>,
    pub notes: Option<String>,
    pub next_communication: Option<String>,
}

impl Communication {
    /// Builds a communication for an already-resolved company
    pub fn new(company_id: Uuid, input: NewCommunication) -> CrmResult<Self> {
        let communication_type = required("communicationType", input.communication_type)
            .map_err(CrmError::Validation)?;
        let communication_date = required("communicationDate", input.communication_date)
            .map_err(CrmError::Validation)?;
        storable_opt("notes", &input.notes).map_err(CrmError::Validation)?;
        storable_opt("nextCommunication", &input.next_communication)
            .map_err(CrmError::Validation)?;

        Ok(Self {
            id: Uuid::new_v4(),
            company_id,
            communication_type,
            communication_date,
            notes: input.notes,
            next_communication: input.next_communication,
            created_at: Utc::now().trunc_subsecs(6),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call() -> NewCommunication {
        NewCommunication {
            company_id: None,
            communication_type: Some("call".into()),
            communication_date: Some("2024-01-01".into()),
            notes: Some("intro".into()),
            next_communication: Some("follow up".into()),
        }
    }

    #[test]
    fn create_communication_success() {
        let company_id = Uuid::new_v4();
        let comm = Communication::new(company_id, call()).unwrap();

        assert_eq!(comm.company_id, company_id);
        assert_eq!(comm.communication_type, "call");
        assert_eq!(comm.notes.as_deref(), Some("intro"));
        assert_eq!(comm.next_communication.as_deref(), Some("follow up"));
    }

    #[test]
    fn date_is_not_parsed() {
        let comm = Communication::new(
            Uuid::new_v4(),
            NewCommunication {
                communication_date: Some("next tuesday-ish".into()),
                ..call()
            },
        )
        .unwrap();
        assert_eq!(comm.communication_date, "next tuesday-ish");
    }

    #[test]
    fn nul_in_notes_fails() {
        let result = Communication::new(
            Uuid::new_v4(),
            NewCommunication {
                notes: Some("line\u{0}break".into()),
                ..call()
            },
        );
        assert!(matches!(result, Err(CrmError::Validation(msg)) if msg.contains("notes")));
    }

    #[test]
    fn created_at_has_microsecond_precision() {
        let comm = Communication::new(Uuid::new_v4(), call()).unwrap();
        assert_eq!(comm.created_at.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn missing_type_fails() {
        let result = Communication::new(
            Uuid::new_v4(),
            NewCommunication {
                communication_type: None,
                ..call()
            },
        );
        assert!(matches!(result, Err(CrmError::Validation(_))));
    }

    #[test]
    fn missing_date_fails() {
        let result = Communication::new(
            Uuid::new_v4(),
            NewCommunication {
                communication_date: Some(String::new()),
                ..call()
            },
        );
        assert!(matches!(result, Err(CrmError::Validation(_))));
    }
}
