// Company domain module
// Contains the company document, its update patch, and contact value objects

#![allow(clippy::module_inception)]

pub mod company;
pub mod value_objects;

// Re-export main types for convenience
pub use company::{Company, CompanyUpdate, NewCompany};
pub use value_objects::{Email, PhoneNumber};
