//! toolshed - Personal utility suite
//!
//! A daily journal kept in two tiers (an expiring cache for recent days and
//! one durable file per day) with calendar-grid export, plus a shared
//! clipboard held in the cache.

pub mod api;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
