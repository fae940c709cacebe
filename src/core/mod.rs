//! Core domain logic for cardvalid
//!
//! This module contains pure logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`CandidateNumber`, `CardType`, `Validity`, `Analysis`)
//! - `services/` - Classification, checksum and verdict formatting

pub mod models;
pub mod services;
