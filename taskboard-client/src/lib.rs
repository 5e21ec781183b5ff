//! # Taskboard Client Store
//!
//! Client-side state container mirroring the server's entities for a UI.
//!
//! The [`Store`] holds three independent slices — auth, boards, and
//! notifications — each reduced by a pure function over tagged actions.
//! Every request follows pending → fulfilled | rejected: the driver methods
//! on [`Store`] dispatch `Pending`, perform the HTTP call through
//! [`ApiClient`], and then dispatch the authoritative result (or the
//! server's error message verbatim). There is no ambient singleton; the
//! composition root owns the store and passes it by reference.
//!
//! The boards slice is normalized: one entity table keyed by board id, with
//! the board list and the current selection computed from it, so a mutation
//! is merged in exactly one place.

pub mod api;
pub mod slices;
pub mod store;

pub use api::{ApiClient, ApiClientError};
pub use store::Store;
