pub mod communications;
pub mod companies;
pub mod health;
pub mod next_communications;
