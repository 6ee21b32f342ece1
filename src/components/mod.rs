//! Reusable UI components shared by the pages.

pub mod advisory_row;
pub mod toasts;
