//! API route handlers

pub mod dcim;
pub mod health;
