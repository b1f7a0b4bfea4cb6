//! The view controller: in-memory state plus CRUD dispatch.
//!
//! # Design
//! `CustomerApp` holds a cache of server state (`customers`), the current
//! view selector, and the selected customer. Every mutation refreshes the
//! full list from the server — no incremental patching, no optimistic
//! update. Each user action is one sequential blocking round-trip; there is
//! no retry, timeout, or in-flight guarding.
//!
//! Failures of any kind (transport, status, decode) collapse into one
//! generic error banner and leave prior state untouched.

use uuid::Uuid;

use crm_core::{ApiError, Customer, CustomerClient, CustomerCreate, CustomerUpdate};

use crate::transport::{HttpExecutor, TransportError};
use crate::view::{self, Banner, View};

/// Raw text read from the four form fields. Blank `notes` means "no notes".
#[derive(Debug, Clone, Default)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl CustomerForm {
    /// `None` when a required field is blank after trimming.
    fn normalized(self) -> Option<(String, String, String, Option<String>)> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.phone.trim().is_empty()
        {
            return None;
        }
        let notes = if self.notes.trim().is_empty() {
            None
        } else {
            Some(self.notes)
        };
        Some((self.name, self.email, self.phone, notes))
    }

    fn into_create(self) -> Option<CustomerCreate> {
        let (name, email, phone, notes) = self.normalized()?;
        Some(CustomerCreate {
            name,
            email,
            phone,
            notes,
        })
    }

    fn into_update(self) -> Option<CustomerUpdate> {
        let (name, email, phone, notes) = self.normalized()?;
        Some(CustomerUpdate {
            name,
            email,
            phone,
            notes,
        })
    }
}

/// Anything that can go wrong during one round-trip. Never shown to the
/// user directly — the controller folds it into a generic banner.
#[derive(Debug)]
enum RequestError {
    Transport(TransportError),
    Api(ApiError),
}

impl From<TransportError> for RequestError {
    fn from(e: TransportError) -> Self {
        RequestError::Transport(e)
    }
}

impl From<ApiError> for RequestError {
    fn from(e: ApiError) -> Self {
        RequestError::Api(e)
    }
}

/// The customer management UI: state, transitions, and CRUD dispatch.
pub struct CustomerApp<E: HttpExecutor> {
    client: CustomerClient,
    executor: E,
    customers: Vec<Customer>,
    current_view: View,
    selected_customer: Option<Customer>,
    banner: Option<Banner>,
}

impl<E: HttpExecutor> CustomerApp<E> {
    pub fn new(base_url: &str, executor: E) -> Self {
        Self {
            client: CustomerClient::new(base_url),
            executor,
            customers: Vec::new(),
            current_view: View::List,
            selected_customer: None,
            banner: None,
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn selected_customer(&self) -> Option<&Customer> {
        self.selected_customer.as_ref()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Fetch the full list and replace the cache. On failure the cache and
    /// view are left untouched and an error banner is shown.
    pub fn load_customers(&mut self) {
        match self.fetch_customers() {
            Ok(customers) => {
                self.customers = customers;
                self.current_view = View::List;
            }
            Err(_) => {
                self.banner = Some(Banner::error("Failed to load customers"));
            }
        }
    }

    pub fn show_list(&mut self) {
        self.current_view = View::List;
    }

    pub fn show_create_form(&mut self) {
        self.current_view = View::Create;
    }

    /// No-op when the id is not in the cache.
    pub fn show_edit_form(&mut self, id: Uuid) {
        if let Some(customer) = self.find(id) {
            self.selected_customer = Some(customer);
            self.current_view = View::Edit;
        }
    }

    /// No-op when the id is not in the cache.
    pub fn show_customer_detail(&mut self, id: Uuid) {
        if let Some(customer) = self.find(id) {
            self.selected_customer = Some(customer);
            self.current_view = View::Detail;
        }
    }

    pub fn handle_create_customer(&mut self, form: CustomerForm) {
        let Some(input) = form.into_create() else {
            self.banner = Some(Banner::error("Name, email and phone are required"));
            return;
        };
        match self.request_create(&input) {
            Ok(_) => {
                self.load_customers();
                self.banner = Some(Banner::success("Customer created successfully!"));
            }
            Err(_) => {
                self.banner = Some(Banner::error("Failed to create customer"));
            }
        }
    }

    /// No-op without a selected customer (the edit form is only reachable
    /// through `show_edit_form`).
    pub fn handle_update_customer(&mut self, form: CustomerForm) {
        let Some(id) = self.selected_customer.as_ref().map(|c| c.id) else {
            return;
        };
        let Some(input) = form.into_update() else {
            self.banner = Some(Banner::error("Name, email and phone are required"));
            return;
        };
        match self.request_update(id, &input) {
            Ok(_) => {
                self.load_customers();
                self.banner = Some(Banner::success("Customer updated successfully!"));
            }
            Err(_) => {
                self.banner = Some(Banner::error("Failed to update customer"));
            }
        }
    }

    /// Asks `confirm` before deleting; a declined confirm issues no request.
    /// No-op when the id is not in the cache.
    pub fn delete_customer(&mut self, id: Uuid, confirm: impl FnOnce(&Customer) -> bool) {
        let Some(customer) = self.find(id) else {
            return;
        };
        if !confirm(&customer) {
            return;
        }
        match self.request_delete(id) {
            Ok(()) => {
                self.load_customers();
                self.banner = Some(Banner::success("Customer deleted successfully!"));
            }
            Err(_) => {
                self.banner = Some(Banner::error("Failed to delete customer"));
            }
        }
    }

    /// Render the complete page for the current state.
    pub fn render(&self) -> String {
        let content = match (self.current_view, &self.selected_customer) {
            (View::List, _) => view::render_list(&self.customers),
            (View::Create, _) => view::render_create_form(),
            (View::Edit, Some(customer)) => view::render_edit_form(customer),
            (View::Detail, Some(customer)) => view::render_detail(customer),
            // Edit/Detail are only entered with a selection; fall back to
            // the list body otherwise.
            (View::Edit | View::Detail, None) => view::render_list(&self.customers),
        };
        view::render_page(self.banner.as_ref(), &content)
    }

    fn find(&self, id: Uuid) -> Option<Customer> {
        self.customers.iter().find(|c| c.id == id).cloned()
    }

    fn fetch_customers(&self) -> Result<Vec<Customer>, RequestError> {
        let request = self.client.build_list_customers();
        let response = self.executor.execute(request)?;
        Ok(self.client.parse_list_customers(response)?)
    }

    fn request_create(&self, input: &CustomerCreate) -> Result<Customer, RequestError> {
        let request = self.client.build_create_customer(input)?;
        let response = self.executor.execute(request)?;
        Ok(self.client.parse_create_customer(response)?)
    }

    fn request_update(&self, id: Uuid, input: &CustomerUpdate) -> Result<Customer, RequestError> {
        let request = self.client.build_update_customer(id, input)?;
        let response = self.executor.execute(request)?;
        Ok(self.client.parse_update_customer(response)?)
    }

    fn request_delete(&self, id: Uuid) -> Result<(), RequestError> {
        let request = self.client.build_delete_customer(id);
        let response = self.executor.execute(request)?;
        Ok(self.client.parse_delete_customer(response)?)
    }
}
