// Repository contracts (ports)
// Infrastructure provides the adapters

pub mod communication_repository;
pub mod company_repository;
pub mod next_communication_repository;

pub use communication_repository::CommunicationRepository;
pub use company_repository::CompanyRepository;
pub use next_communication_repository::NextCommunicationRepository;
