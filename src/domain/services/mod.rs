// Domain services
// Logic spanning more than one collection

pub mod communication_log;
pub mod population;

pub use communication_log::{log_communication, LoggedCommunication};
pub use population::{
    populate_communications, populate_companies, populate_company, PopulatedCommunication,
    PopulatedCompany,
};
