//! Page modules for the two screens.
//!
//! ARCHITECTURE
//! ============
//! Pages render state and forward user intent through callbacks; all
//! transitions happen in `state::controller`.

pub mod dashboard;
pub mod login;
