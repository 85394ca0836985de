// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_communication_repository;
pub mod postgres_company_repository;
pub mod postgres_next_communication_repository;

pub use postgres_communication_repository::PostgresCommunicationRepository;
pub use postgres_company_repository::PostgresCompanyRepository;
pub use postgres_next_communication_repository::PostgresNextCommunicationRepository;
