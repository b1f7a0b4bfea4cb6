//! Pure HTML rendering for the four UI views.
//!
//! Every function here maps state to a `String` with no I/O, so rendering is
//! testable by plain string inspection. All customer-supplied text passes
//! through `escape_html` before it reaches the markup.

use crm_core::Customer;

/// The four UI modes. A flat selector: any view may jump to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Create,
    Edit,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Transient success/error message shown in the page header. Each new
/// message replaces the previous one.
#[derive(Debug, Clone)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }
}

/// Escape `& < > " '` for safe interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap view content in the fixed page chrome: title, the "Add New Customer"
/// affordance, and the banner when one is set.
pub(crate) fn render_page(banner: Option<&Banner>, content: &str) -> String {
    let banner_html = match banner {
        Some(b) => {
            let class = match b.kind {
                BannerKind::Success => "message message-success",
                BannerKind::Error => "message message-error",
            };
            format!(r#"<div class="{class}">{}</div>"#, escape_html(&b.text))
        }
        None => String::new(),
    };

    format!(
        r#"<div class="customer-app">
<header>
<h1>Customer Management System</h1>
<button id="create-customer-btn" class="btn btn-primary">Add New Customer</button>
{banner_html}
</header>
<main id="main-content">
{content}
</main>
</div>"#
    )
}

pub(crate) fn render_list(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return r#"<div class="empty-state">
<h2>No customers found</h2>
<p>Start by adding your first customer!</p>
</div>"#
            .to_string();
    }

    let cards: String = customers.iter().map(render_card).collect();
    format!(
        r#"<div class="customer-list">
<h2>Customers ({count})</h2>
<div class="customer-grid">
{cards}</div>
</div>"#,
        count = customers.len()
    )
}

fn render_card(customer: &Customer) -> String {
    let notes_html = match &customer.notes {
        Some(notes) => format!("<p><strong>Notes:</strong> {}</p>\n", escape_html(notes)),
        None => String::new(),
    };
    format!(
        r#"<div class="customer-card" data-id="{id}">
<h3>{name}</h3>
<p><strong>Email:</strong> {email}</p>
<p><strong>Phone:</strong> {phone}</p>
{notes_html}<div class="customer-actions">
<button class="btn btn-secondary" data-action="detail" data-id="{id}">View</button>
<button class="btn btn-primary" data-action="edit" data-id="{id}">Edit</button>
<button class="btn btn-danger" data-action="delete" data-id="{id}">Delete</button>
</div>
</div>
"#,
        id = customer.id,
        name = escape_html(&customer.name),
        email = escape_html(&customer.email),
        phone = escape_html(&customer.phone),
    )
}

pub(crate) fn render_create_form() -> String {
    render_form("Add New Customer", "Create Customer", "", "", "", "")
}

pub(crate) fn render_edit_form(customer: &Customer) -> String {
    render_form(
        "Edit Customer",
        "Update Customer",
        &escape_html(&customer.name),
        &escape_html(&customer.email),
        &escape_html(&customer.phone),
        &escape_html(customer.notes.as_deref().unwrap_or("")),
    )
}

fn render_form(
    title: &str,
    submit_label: &str,
    name: &str,
    email: &str,
    phone: &str,
    notes: &str,
) -> String {
    format!(
        r#"<div class="customer-form">
<h2>{title}</h2>
<form id="customer-form">
<div class="form-group">
<label for="name">Name *</label>
<input type="text" id="name" name="name" value="{name}" required>
</div>
<div class="form-group">
<label for="email">Email *</label>
<input type="email" id="email" name="email" value="{email}" required>
</div>
<div class="form-group">
<label for="phone">Phone *</label>
<input type="tel" id="phone" name="phone" value="{phone}" required>
</div>
<div class="form-group">
<label for="notes">Notes</label>
<textarea id="notes" name="notes" rows="4">{notes}</textarea>
</div>
<div class="form-actions">
<button type="button" class="btn btn-secondary" data-action="list">Cancel</button>
<button type="submit" class="btn btn-primary">{submit_label}</button>
</div>
</form>
</div>"#
    )
}

pub(crate) fn render_detail(customer: &Customer) -> String {
    let email = escape_html(&customer.email);
    let phone = escape_html(&customer.phone);
    let notes_html = match &customer.notes {
        Some(notes) => format!(
            "<div class=\"detail-row\">\n<strong>Notes:</strong>\n<p>{}</p>\n</div>\n",
            escape_html(notes)
        ),
        None => String::new(),
    };
    format!(
        r#"<div class="customer-detail">
<h2>Customer Details</h2>
<div class="detail-card">
<h3>{name}</h3>
<div class="detail-row">
<strong>Email:</strong>
<a href="mailto:{email}">{email}</a>
</div>
<div class="detail-row">
<strong>Phone:</strong>
<a href="tel:{phone}">{phone}</a>
</div>
{notes_html}</div>
<div class="form-actions">
<button class="btn btn-secondary" data-action="list">Back to List</button>
<button class="btn btn-primary" data-action="edit" data-id="{id}">Edit Customer</button>
<button class="btn btn-danger" data-action="delete" data-id="{id}">Delete Customer</button>
</div>
</div>"#,
        id = customer.id,
        name = escape_html(&customer.name),
    )
}
