//! View controller for the customer management UI.
//!
//! # Overview
//! Pairs the deterministic `crm-core` client with an HTTP executor and a
//! pure HTML renderer. `CustomerApp` owns the in-memory customer list, the
//! current view selector, and the selected customer; every user action maps
//! to one method that dispatches a CRUD call, refreshes the full list, and
//! leaves a transient banner behind.
//!
//! # Design
//! - The core builds requests and parses responses; this crate executes the
//!   round-trips through the `HttpExecutor` seam (`ureq` in production,
//!   scripted responses in tests).
//! - Rendering is a pure function of state: `render()` returns the complete
//!   page as a `String`, chosen by a flat match on the current view.
//! - All failures collapse into a single generic error banner; the failed
//!   action is terminal and the user retries manually.

pub mod controller;
pub mod transport;
pub mod view;

pub use controller::{CustomerApp, CustomerForm};
pub use transport::{HttpExecutor, TransportError, UreqExecutor};
pub use view::{Banner, BannerKind, View};
