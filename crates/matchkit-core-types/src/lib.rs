//! Core types shared across matchkit facilities
//!
//! This crate provides foundational types used by both error handling
//! and logging facilities:
//!
//! - **Schema constants**: Canonical field keys, operation names and event names

pub mod schema;
