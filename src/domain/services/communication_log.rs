use tracing::{info, warn};

use crate::domain::communication::{Communication, NewCommunication};
use crate::domain::company::Company;
use crate::domain::errors::{CrmError, CrmResult};
use crate::domain::repositories::{CommunicationRepository, CompanyRepository};

/// Outcome of logging a communication
#[derive(Debug, Clone)]
pub struct LoggedCommunication {
    /// The company after its history and next step were updated
    pub company: Company,
    /// The stored communication
    pub communication: Communication,
}

/// Logs a communication and folds it into the owning company
///
/// Writes happen in order: the communication is stored first, then the
/// company's `last_communications` gains its id and `next_communication` is
/// overwritten with `next_communication` from the input (null when absent).
///
/// # Failure states
/// - Unknown company: `NotFound`, nothing is written
/// - Invalid or unsaved communication: the company is not touched
/// - Company write fails: the communication stays stored but unreferenced.
///   There is no rollback.
pub async fn log_communication(
    companies: &dyn CompanyRepository,
    communications: &dyn CommunicationRepository,
    input: NewCommunication,
) -> CrmResult<LoggedCommunication> {
    let company_id = input
        .company_id
        .ok_or_else(|| CrmError::validation("companyId is required"))?;

    let mut company = companies
        .find_by_id(company_id)
        .await?
        .ok_or(CrmError::NotFound("Company"))?;

    let next = input.next_communication.clone();
    let communication = Communication::new(company.id, input)?;
    communications.insert(&communication).await?;

    company.record_communication(communication.id, next);
    if let Err(e) = companies.update(&company).await {
        warn!(
            communication_id = %communication.id,
            company_id = %company.id,
            error = %e,
            "Communication stored but company history update failed"
        );
        return Err(e);
    }

    info!(
        communication_id = %communication.id,
        company_id = %company.id,
        history_len = company.last_communications.len(),
        "Communication logged"
    );

    Ok(LoggedCommunication {
        company,
        communication,
    })
}
