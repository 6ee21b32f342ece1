//! # kheti
//!
//! Leptos + WASM client for the Kheti crop advisory screen.
//!
//! A visitor first sees a login/signup form backed by an external auth
//! service. Once a session token is stored, the screen switches to a
//! dashboard showing a crop advisory record.
//!
//! The crate is split into `net` (auth HTTP calls and wire types), `state`
//! (session storage, advisory provider, view state machine), and the Leptos
//! presentation layer in `pages`, `components` and `app`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
