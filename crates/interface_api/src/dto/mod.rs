//! Request and response bodies

pub mod persons;
pub mod contracts;
pub mod billing;
pub mod claims;
