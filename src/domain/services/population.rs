use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::communication::Communication;
use crate::domain::company::Company;
use crate::domain::errors::CrmResult;
use crate::domain::repositories::{CommunicationRepository, CompanyRepository};

/// A company with its `lastCommunications` resolved to full documents
///
/// Dangling ids (deleted communications) are left out; the stored id list
/// itself is never rewritten.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedCompany {
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
    pub last_communications: Vec<Communication>,
    pub next_communication: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PopulatedCompany {
    fn resolve(company: Company, by_id: &HashMap<Uuid, Communication>) -> Self {
        let last_communications = company
            .last_communications
            .iter()
            .filter_map(|id| by_id.get(id).cloned())
            .collect();

        Self {
            id: company.id,
            name: company.name,
            location: company.location,
            linkedin_profile: company.linkedin_profile,
            emails: company.emails,
            phone_numbers: company.phone_numbers,
            comments: company.comments,
            communication_periodicity: company.communication_periodicity,
            last_communications,
            next_communication: company.next_communication,
            created_at: company.created_at,
        }
    }
}

/// A communication with `companyId` resolved to the owning company
///
/// Serialized as `null` when the company has been deleted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedCommunication {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "companyId")]
    pub company: Option<Company>,
    pub communication_type: String,
    pub communication_date: String,
    pub notes: Option<String>,
    pub next_communication: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Resolves each company's communication history with a single batch lookup
pub async fn populate_companies(
    communications: &dyn CommunicationRepository,
    companies: Vec<Company>,
) -> CrmResult<Vec<PopulatedCompany>> {
    let mut ids: Vec<Uuid> = companies
        .iter()
        .flat_map(|c| c.last_communications.iter().copied())
        .collect();
    ids.sort_unstable();
    ids.dedup();

    let by_id: HashMap<Uuid, Communication> = if ids.is_empty() {
        HashMap::new()
    } else {
        communications
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect()
    };

    Ok(companies
        .into_iter()
        .map(|company| PopulatedCompany::resolve(company, &by_id))
        .collect())
}

/// Resolves a single company's communication history
pub async fn populate_company(
    communications: &dyn CommunicationRepository,
    company: Company,
) -> CrmResult<PopulatedCompany> {
    let mut populated = populate_companies(communications, vec![company]).await?;
    // populate_companies maps one-to-one
    Ok(populated.remove(0))
}

/// Resolves the owning company of each communication
pub async fn populate_communications(
    companies: &dyn CompanyRepository,
    communications: Vec<Communication>,
) -> CrmResult<Vec<PopulatedCommunication>> {
    let mut ids: Vec<Uuid> = communications.iter().map(|c| c.company_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let by_id: HashMap<Uuid, Company> = if ids.is_empty() {
        HashMap::new()
    } else {
        companies
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect()
    };

    Ok(communications
        .into_iter()
        .map(|c| PopulatedCommunication {
            id: c.id,
            company: by_id.get(&c.company_id).cloned(),
            communication_type: c.communication_type,
            communication_date: c.communication_date,
            notes: c.notes,
            next_communication: c.next_communication,
            created_at: c.created_at,
        })
        .collect())
}
