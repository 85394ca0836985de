// Domain layer module exports
// Entities, validation rules and the repository contracts they persist through.
// Domain is independent of infrastructure concerns

pub mod communication;
pub mod company;
pub mod errors;
pub mod next_communication;
pub mod patch;
pub mod repositories;
pub mod services;

pub use errors::{CrmError, CrmResult};
