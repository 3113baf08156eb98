//! Driving route server.
//!
//! Accepts an ordered list of place identifiers, asks the Google Directions
//! API for a route that visits them in that order, and hands back either the
//! provider's payload or a classified error.

pub mod config;
pub mod directions;
pub mod domain;
pub mod translator;
pub mod web;
