use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct CustomerUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub notes: Option<String>,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Customer>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// `name`, `email`, and `phone` must be non-empty after trimming.
fn has_blank_required_field(name: &str, email: &str, phone: &str) -> bool {
    name.trim().is_empty() || email.trim().is_empty() || phone.trim().is_empty()
}

async fn list_customers(State(db): State<Db>) -> Json<Vec<Customer>> {
    let customers = db.read().await;
    Json(customers.values().cloned().collect())
}

async fn create_customer(
    State(db): State<Db>,
    Json(input): Json<CustomerCreate>,
) -> Result<(StatusCode, Json<Customer>), StatusCode> {
    if has_blank_required_field(&input.name, &input.email, &input.phone) {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let customer = Customer {
        id: Uuid::new_v4(),
        name: input.name,
        email: input.email,
        phone: input.phone,
        notes: input.notes,
    };
    db.write().await.insert(customer.id, customer.clone());
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn get_customer(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Customer>, StatusCode> {
    let customers = db.read().await;
    customers.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_customer(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<CustomerUpdate>,
) -> Result<Json<Customer>, StatusCode> {
    if has_blank_required_field(&input.name, &input.email, &input.phone) {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let mut customers = db.write().await;
    let customer = customers.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    customer.name = input.name;
    customer.email = input.email;
    customer.phone = input.phone;
    customer.notes = input.notes;
    Ok(Json(customer.clone()))
}

async fn delete_customer(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut customers = db.write().await;
    customers.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_serializes_to_json() {
        let customer = Customer {
            id: Uuid::nil(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            phone: "123".to_string(),
            notes: None,
        };
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["phone"], "123");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn customer_roundtrips_through_json() {
        let customer = Customer {
            id: Uuid::new_v4(),
            name: "Bob".to_string(),
            email: "b@x.com".to_string(),
            phone: "555-0100".to_string(),
            notes: Some("prefers email".to_string()),
        };
        let json = serde_json::to_string(&customer).unwrap();
        let back: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, customer.id);
        assert_eq!(back.name, customer.name);
        assert_eq!(back.notes, customer.notes);
    }

    #[test]
    fn customer_create_defaults_notes_to_none() {
        let input: CustomerCreate =
            serde_json::from_str(r#"{"name":"Alice","email":"a@x.com","phone":"123"}"#).unwrap();
        assert_eq!(input.name, "Alice");
        assert!(input.notes.is_none());
    }

    #[test]
    fn customer_create_accepts_explicit_notes() {
        let input: CustomerCreate = serde_json::from_str(
            r#"{"name":"Alice","email":"a@x.com","phone":"123","notes":"VIP"}"#,
        )
        .unwrap();
        assert_eq!(input.notes.as_deref(), Some("VIP"));
    }

    #[test]
    fn customer_create_rejects_missing_name() {
        let result: Result<CustomerCreate, _> =
            serde_json::from_str(r#"{"email":"a@x.com","phone":"123"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn customer_update_requires_all_contact_fields() {
        let result: Result<CustomerUpdate, _> = serde_json::from_str(r#"{"name":"Alice"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn blank_required_field_detection() {
        assert!(has_blank_required_field("", "a@x.com", "123"));
        assert!(has_blank_required_field("Alice", "  ", "123"));
        assert!(has_blank_required_field("Alice", "a@x.com", ""));
        assert!(!has_blank_required_field("Alice", "a@x.com", "123"));
    }
}
