//! Holiday engine for New Zealand.
//!
//! This crate computes the public, regional and school holidays observed in
//! New Zealand for any year, projects them onto a month grid and a region
//! highlight set, and serves them over HTTP together with activity
//! suggestions for a selected holiday.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod projection;
pub mod suggestions;
