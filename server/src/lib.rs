//! RackView server: filtered, read-only listings over a DCIM inventory

pub mod api;
mod app;
pub mod core;
pub mod data;
pub mod utils;
