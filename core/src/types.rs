//! Domain DTOs for the customer API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the client surface stays decoupled from Axum internals. Integration
//! tests catch any schema drift between the two crates.
//!
//! `notes` is optional everywhere: omitted from request JSON when absent and
//! tolerated as `null` or missing on input. Updates are full replacements —
//! the edit form always submits every field — so `CustomerUpdate` mirrors
//! `CustomerCreate` instead of using per-field options.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single customer record returned by the API.
///
/// `id` is assigned by the server on creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request payload for creating a new customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request payload for replacing an existing customer's fields. The server
/// keeps the `id` and takes everything else from this payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
