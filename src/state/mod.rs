//! Client-side state and the collaborators behind the screen.
//!
//! DESIGN
//! ======
//! `session`, `advisory` and the auth client are injected into
//! `controller` behind small traits so each can be swapped in tests. `view`
//! holds the plain data the controller publishes to the UI.

pub mod advisory;
pub mod controller;
pub mod session;
pub mod view;
