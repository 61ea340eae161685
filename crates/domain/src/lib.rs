//! # tankview-domain
//!
//! Pure domain model for the tankview water-tank dashboard.
//!
//! ## Responsibilities
//! - Define **TankReading** (the point-in-time payload one fetch yields) and
//!   its lenient, defaulting JSON extraction
//! - Define **TankStatus** (the fill-status label lookup: icon, label, class)
//! - Define **ConnectionState** (the last-fetch-outcome indicator)
//! - Define the **access gate** (literal credential comparison and session marker)
//! - Timestamp helpers and display formatting
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! It must never import anything from the dashboard crate or any web/IO crate.

pub mod auth;
pub mod connection;
pub mod reading;
pub mod status;
pub mod time;
