//! Roster API Library
//!
//! This library provides team provisioning for the Roster API: the domain
//! workflow that creates a team and attaches its initial members, the
//! storage adapters it runs against, and the HTTP layer in front of it.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
