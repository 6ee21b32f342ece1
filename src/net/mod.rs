//! Networking modules for the external auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` issues the login/signup calls and classifies their responses;
//! `types` defines the JSON wire schema shared by both calls.

pub mod auth;
pub mod types;
