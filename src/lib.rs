//! Rolodex API Library
//!
//! Relationship-management backend: companies, the communications logged
//! against them, and scheduled next communications, served over REST/JSON.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
