use crate::disputes::{describe_variance, resolution_level_for, variance, VarianceKind};
use crate::filters::DateFilter;
use crate::models::{
    Dataset, Department, Order, OrderStatus, ResolutionLevel, User, ACTIONS_TAKEN,
    DISPUTE_REASONS,
};
use crate::permissions::Permission;
use crate::stats::Badge;
use crate::tabs::Tab;
use std::fmt::Write as _;
use url::form_urlencoded;

pub struct PageContext<'a> {
    pub user: &'a User,
    pub filter: &'a DateFilter,
    pub badges: &'a [Badge],
    pub active: Option<Tab>,
    pub notice: Option<&'a str>,
    pub error: Option<&'a str>,
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `/orders/{id}/{action}` with the id percent-encoded as one path segment.
fn order_path(order_id: &str, action: &str) -> String {
    let segment: String = form_urlencoded::byte_serialize(order_id.as_bytes()).collect();
    // byte_serialize writes spaces as '+' and encodes a literal '+' as %2B
    format!("/orders/{}/{action}", segment.replace('+', "%20"))
}

/// Quotes `text` for a single-quoted JS string inside an HTML attribute.
fn js_string(text: &str) -> String {
    let quoted = text.replace('\\', "\\\\").replace('\'', "\\'");
    escape(&quoted)
}

fn liters(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}L")
    } else {
        format!("{value:.2}L")
    }
}

pub fn render_tab_page(ctx: &PageContext<'_>, tab: Tab, orders: &[&Order]) -> String {
    render_page(ctx, tab.label(), &render_tab_content(tab, orders, ctx.user))
}

pub fn render_form_page(ctx: &PageContext<'_>, title: &str, body: &str) -> String {
    render_page(ctx, title, body)
}

fn render_page(ctx: &PageContext<'_>, title: &str, content: &str) -> String {
    PAGE_HTML
        .replace("{{TITLE}}", &escape(title))
        .replace("{{USER}}", &render_user(ctx.user))
        .replace("{{NAV}}", &render_nav(ctx))
        .replace("{{FILTER}}", &render_filter(ctx))
        .replace("{{BANNER}}", &render_banner(ctx.notice, ctx.error))
        .replace("{{CONTENT}}", content)
}

fn render_user(user: &User) -> String {
    format!(
        r#"<span>{} ({})</span>
      <form method="post" action="/logout" onsubmit="return confirm('Are you sure you want to logout?')">
        <button class="btn btn-secondary" type="submit">Logout</button>
      </form>"#,
        escape(&user.name),
        user.department
    )
}

fn render_nav(ctx: &PageContext<'_>) -> String {
    let query = ctx.filter.to_query();
    let mut html = String::new();
    for badge in ctx.badges {
        let active = if ctx.active == Some(badge.tab) { " active" } else { "" };
        let href = if query.is_empty() {
            format!("/tabs/{}", badge.tab.slug())
        } else {
            format!("/tabs/{}?{}", badge.tab.slug(), escape(&query))
        };
        let _ = write!(
            html,
            r#"<a class="tab{active}" href="{href}">{} <span class="badge">{}</span></a>"#,
            escape(badge.label),
            badge.count
        );
    }
    html
}

fn render_filter(ctx: &PageContext<'_>) -> String {
    let Some(tab) = ctx.active else {
        return String::new();
    };
    let (from, to) = match ctx.filter {
        DateFilter::Custom { from, to } => (
            from.map(|d| d.to_string()).unwrap_or_default(),
            to.map(|d| d.to_string()).unwrap_or_default(),
        ),
        _ => (String::new(), String::new()),
    };
    let mut options = String::new();
    for (value, label) in [
        ("all", "All dates"),
        ("today", "Today"),
        ("7days", "Last 7 days"),
        ("30days", "Last 30 days"),
        ("custom", "Custom range"),
    ] {
        let selected = if ctx.filter.slug() == value { " selected" } else { "" };
        let _ = write!(options, r#"<option value="{value}"{selected}>{label}</option>"#);
    }
    format!(
        r#"<form class="filter" method="get" action="/tabs/{}">
        <select name="date">{options}</select>
        <input type="date" name="from" value="{from}" />
        <input type="date" name="to" value="{to}" />
        <button class="btn btn-secondary" type="submit">Filter</button>
      </form>
      <form class="filter" method="post" action="/reload">
        <button class="btn btn-secondary" type="submit">Reload data</button>
      </form>"#,
        tab.slug()
    )
}

fn render_banner(notice: Option<&str>, error: Option<&str>) -> String {
    let mut html = String::new();
    if let Some(error) = error {
        let _ = write!(html, r#"<div class="banner error" role="alert">{}</div>"#, escape(error));
    }
    if let Some(notice) = notice {
        let _ = write!(html, r#"<div class="banner notice">{}</div>"#, escape(notice));
    }
    html
}

/// Heading plus one card per order, or the tab's empty message.
pub fn render_tab_content(tab: Tab, orders: &[&Order], user: &User) -> String {
    if orders.is_empty() {
        return format!(r#"<p class="empty">{}</p>"#, tab.empty_message());
    }

    let mut html = format!(
        r#"<h2 class="tab-heading">{} ({})</h2>"#,
        tab.heading(),
        orders.len()
    );
    for order in orders {
        let card = match tab {
            Tab::Disputes => render_dispute_card(order, user.can(Permission::ResolveDispute)),
            Tab::TransportDisputed => render_dispute_card(order, false),
            _ => render_order_card(order, user, &card_actions(tab, order, user)),
        };
        html.push_str(&card);
    }
    html
}

enum Button {
    Link {
        label: String,
        class: &'static str,
        href: String,
    },
    Post {
        label: String,
        class: &'static str,
        action: String,
        confirm: Option<&'static str>,
        fields: String,
    },
}

fn card_actions(tab: Tab, order: &Order, user: &User) -> Vec<Button> {
    let path = |action: &str| escape(&order_path(&order.order_id, action));
    let mut buttons = Vec::new();
    match tab {
        Tab::PendingApproval if user.can(Permission::ApproveOrders) => {
            buttons.push(Button::Post {
                label: "Approve".into(),
                class: "btn-success",
                action: path("approve"),
                confirm: Some("Approve this order?"),
                fields: String::new(),
            });
            buttons.push(Button::Post {
                label: "Reject".into(),
                class: "btn-danger",
                action: path("reject"),
                confirm: Some("Reject this order? This cannot be undone."),
                fields: r#"<input name="reason" placeholder="Rejection reason" required />"#.into(),
            });
        }
        Tab::ForAssigning if user.can(Permission::AssignTransport) => {
            buttons.push(Button::Link {
                label: "Assign Driver &amp; Truck".into(),
                class: "btn-primary",
                href: path("assign"),
            });
        }
        Tab::Assigned
            if order.status == OrderStatus::LeftWarehouse && user.can(Permission::MarkDelivered) =>
        {
            buttons.push(Button::Post {
                label: "Mark as Delivered".into(),
                class: "btn-success",
                action: path("deliver"),
                confirm: Some("Mark this order as Delivered? This confirms successful delivery with no issues."),
                fields: String::new(),
            });
            if user.can(Permission::ReportDispute) {
                buttons.push(Button::Link {
                    label: "Report Dispute".into(),
                    class: "btn-warning",
                    href: path("dispute"),
                });
            }
        }
        Tab::NeedsProcessing if user.can(Permission::UpdateWarehouseStatus) => {
            if let Some(next) = order.status.next_warehouse_step() {
                buttons.push(Button::Post {
                    label: format!("Move to {next}"),
                    class: "btn-primary",
                    action: path("warehouse"),
                    confirm: None,
                    fields: format!(r#"<input type="hidden" name="newStatus" value="{next}" />"#),
                });
            }
        }
        Tab::NeedsDocs => {
            if order.proforma_number.is_none() && user.can(Permission::EnterProforma) {
                buttons.push(Button::Post {
                    label: "Save Proforma".into(),
                    class: "btn-secondary",
                    action: path("proforma"),
                    confirm: None,
                    fields: r#"<input name="proformaNumber" placeholder="Proforma no." required />"#
                        .into(),
                });
            }
            if user.can(Permission::EnterInvoice) {
                buttons.push(Button::Post {
                    label: "Save Invoice".into(),
                    class: "btn-primary",
                    action: path("invoice"),
                    confirm: None,
                    fields: r#"<input name="invoiceNumber" placeholder="Invoice no." required />"#
                        .into(),
                });
            }
        }
        _ => {}
    }
    buttons
}

fn render_buttons(buttons: &[Button]) -> String {
    let mut html = String::new();
    for button in buttons {
        match button {
            Button::Link { label, class, href } => {
                let _ = write!(html, r#"<a class="btn {class}" href="{href}">{label}</a>"#);
            }
            Button::Post {
                label,
                class,
                action,
                confirm,
                fields,
            } => {
                let confirm = confirm
                    .map(|text| format!(r#" onsubmit="return confirm('{}')""#, js_string(text)))
                    .unwrap_or_default();
                let _ = write!(
                    html,
                    r#"<form class="inline" method="post" action="{action}"{confirm}>{fields}<button class="btn {class}" type="submit">{}</button></form>"#,
                    escape(label)
                );
            }
        }
    }
    html
}

fn row(html: &mut String, label: &str, value: &str) {
    let _ = write!(html, "<p><strong>{label}:</strong> {}</p>", escape(value));
}

fn render_order_card(order: &Order, user: &User, buttons: &[Button]) -> String {
    let mut body = String::new();
    row(&mut body, "Client", &order.client_name);
    row(&mut body, "Quantity", &liters(order.quantity));
    if let Some(date) = order.order_date {
        row(&mut body, "Order date", &date.to_string());
    }
    if let Some(margin) = order.margin.filter(|_| user.can(Permission::SeeMargin)) {
        row(&mut body, "Margin", &format!("{margin:.2}"));
    }
    if let Some(driver) = &order.driver_name {
        row(&mut body, "Driver", driver);
        if let Some(plate) = &order.truck_plate {
            row(&mut body, "Truck", plate);
        }
        if let Some(company) = &order.transport_company {
            row(&mut body, "Company", company);
        }
    }
    if let Some(eta) = order.estimated_delivery {
        row(&mut body, "Estimated delivery", &eta.to_string());
    }
    if let Some(reason) = &order.rejection_reason {
        row(&mut body, "Rejected because", reason);
    }
    if order.status == OrderStatus::Resolved {
        body.push_str(&render_resolution_info(order));
    }
    if let Some(proforma) = &order.proforma_number {
        row(&mut body, "Proforma", proforma);
    }
    if let Some(invoice) = &order.invoice_number {
        row(&mut body, "Invoice", invoice);
    }

    format!(
        r#"<article class="card" data-order="{id}">
      <header><h3>{id}</h3><span class="status {class}">{status}</span></header>
      <div class="card-body">{body}</div>
      <div class="actions">{buttons}</div>
    </article>"#,
        id = escape(&order.order_id),
        class = order.status.css_class(),
        status = order.status,
        buttons = render_buttons(buttons),
    )
}

fn render_resolution_info(order: &Order) -> String {
    let mut html = String::from(r#"<div class="resolution">"#);
    if let Some(level) = &order.resolution_level {
        row(&mut html, "Resolution level", level);
    }
    if let Some(action) = &order.action_taken {
        row(&mut html, "Action taken", action);
    }
    if let Some(notes) = &order.resolution_notes {
        row(&mut html, "Resolution notes", notes);
    }
    html.push_str("</div>");
    html
}

/// Recorded variance, or the one implied by the actual quantity.
fn order_variance(order: &Order) -> f64 {
    order
        .variance_liters
        .or_else(|| order.actual_quantity.map(|actual| variance(order.quantity, actual)))
        .unwrap_or(0.0)
}

pub fn render_dispute_card(order: &Order, show_resolution_button: bool) -> String {
    let value = order_variance(order);
    let kind = VarianceKind::of(value);
    let mut body = String::new();
    row(
        &mut body,
        "Client",
        order.dispute_client_name.as_deref().unwrap_or(&order.client_name),
    );
    let _ = write!(
        body,
        "<p><strong>Ordered:</strong> {} | <strong>Actual:</strong> {}</p>",
        liters(order.quantity),
        liters(order.actual_quantity.unwrap_or(0.0))
    );
    let _ = write!(
        body,
        r#"<p class="{}"><strong>Variance:</strong> {}</p>"#,
        kind.css_class(),
        describe_variance(value)
    );
    if let Some(reason) = &order.dispute_reason {
        row(&mut body, "Reason", reason);
    }
    if let Some(method) = &order.dispute_measurement_method {
        row(&mut body, "Measurement", method);
        if method == "Scale" {
            row(
                &mut body,
                "Scale",
                &format!(
                    "{} ({})",
                    order.dispute_scale_owner.as_deref().unwrap_or("-"),
                    order.dispute_scale_city.as_deref().unwrap_or("-")
                ),
            );
        }
    }
    if let Some(notes) = &order.dispute_notes {
        row(&mut body, "Notes", notes);
    }
    if let Some(reporter) = &order.dispute_reported_by {
        let when = order.dispute_reported_date.as_deref().unwrap_or("unknown date");
        row(&mut body, "Reported by", &format!("{reporter} on {when}"));
    }
    if let Some(driver) = &order.driver_name {
        row(&mut body, "Driver", driver);
    }

    let buttons = if show_resolution_button {
        vec![Button::Link {
            label: "Resolve Dispute".into(),
            class: "btn-warning",
            href: escape(&order_path(&order.order_id, "resolve")),
        }]
    } else {
        Vec::new()
    };

    format!(
        r#"<article class="card dispute-card" data-order="{id}">
      <header><h3>{id}</h3><span class="status {class}">{status}</span></header>
      <div class="card-body">{body}</div>
      <div class="actions">{buttons}</div>
    </article>"#,
        id = escape(&order.order_id),
        class = order.status.css_class(),
        status = order.status,
        buttons = render_buttons(&buttons),
    )
}

fn select_options(options: impl IntoIterator<Item = (String, String, bool)>) -> String {
    let mut html = String::new();
    for (value, label, selected) in options {
        let selected = if selected { " selected" } else { "" };
        let _ = write!(
            html,
            r#"<option value="{}"{selected}>{}</option>"#,
            escape(&value),
            escape(&label)
        );
    }
    html
}

pub fn render_dispute_form(order: &Order) -> String {
    let reasons = select_options(
        DISPUTE_REASONS
            .iter()
            .map(|reason| (reason.to_string(), reason.to_string(), false)),
    );
    format!(
        r#"<h2 class="danger">Report Delivery Dispute</h2>
    <p><strong>Order:</strong> {id}</p>
    <p><strong>Ordered Quantity:</strong> {ordered}</p>
    <form class="panel-form" method="post" action="{action}">
      <label>Client Name *<input name="clientName" value="{client}" required /></label>
      <label>Actual Quantity Delivered (Liters) *<input id="actualQuantity" name="actualQuantity" type="number" step="0.01" min="0" required /></label>
      <label>Variance (auto-calculated)<input id="varianceDisplay" readonly /></label>
      <label>Measurement Method *
        <select id="measurementMethod" name="measurementMethod" required>
          <option value="">Select method...</option>
          <option value="Protometer">Protometer</option>
          <option value="Scale">Scale</option>
        </select>
      </label>
      <fieldset id="scaleFields">
        <legend>Scale details (required for Scale)</legend>
        <label>Scale Owner<input name="scaleOwner" placeholder="e.g., Makpetrol, Client Name" /></label>
        <label>Scale Location (City)<input name="scaleCity" placeholder="e.g., Skopje, Gevgelija" /></label>
      </fieldset>
      <label>Dispute Reason *
        <select name="disputeReason" required><option value="">Select reason...</option>{reasons}</select>
      </label>
      <label>Additional Notes<textarea name="notes" rows="3" placeholder="Provide details..."></textarea></label>
      <div class="actions">
        <button class="btn btn-warning" type="submit">Submit Dispute</button>
        <a class="btn btn-secondary" href="/tabs/assigned">Cancel</a>
      </div>
    </form>
    <script>
      const ordered = {quantity};
      const actualEl = document.getElementById('actualQuantity');
      const varianceEl = document.getElementById('varianceDisplay');
      const methodEl = document.getElementById('measurementMethod');
      const scaleEl = document.getElementById('scaleFields');
      actualEl.addEventListener('input', () => {{
        const v = (parseFloat(actualEl.value) || 0) - ordered;
        varianceEl.value = v === 0 ? '0 L (No variance)'
          : v > 0 ? '+' + v.toFixed(2) + ' L (Over delivery)'
          : v.toFixed(2) + ' L (Short delivery)';
      }});
      const toggle = () => {{ scaleEl.hidden = methodEl.value !== 'Scale'; }};
      methodEl.addEventListener('change', toggle);
      toggle();
    </script>"#,
        id = escape(&order.order_id),
        action = escape(&order_path(&order.order_id, "dispute")),
        ordered = liters(order.quantity),
        client = escape(&order.client_name),
        quantity = order.quantity,
    )
}

pub fn render_resolution_form(order: &Order) -> String {
    let value = order_variance(order);
    let suggested = resolution_level_for(value);
    let levels = select_options(ResolutionLevel::ALL.into_iter().map(|level| {
        (
            level.as_str().to_string(),
            level.description().to_string(),
            level == suggested,
        )
    }));
    let actions = select_options(
        ACTIONS_TAKEN
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string(), false)),
    );
    format!(
        r#"<h2 class="warning">Resolve Dispute</h2>
    {card}
    <form class="panel-form" method="post" action="{action}" onsubmit="return confirm('Confirm dispute resolution? This will mark the order as Resolved.')">
      <label>Resolution Level * (Variance: {magnitude:.2}L)
        <select name="resolutionLevel" required><option value="">Select level...</option>{levels}</select>
      </label>
      <label>Action Taken *
        <select name="actionTaken" required><option value="">Select action...</option>{actions}</select>
      </label>
      <label>Resolution Notes *<textarea name="resolutionNotes" rows="4" required placeholder="Explain the resolution..."></textarea></label>
      <p class="hint">This will change status to "Resolved" and move the order to the Resolved tab.</p>
      <div class="actions">
        <button class="btn btn-success" type="submit">Resolve Dispute</button>
        <a class="btn btn-secondary" href="/tabs/disputes">Cancel</a>
      </div>
    </form>"#,
        card = render_dispute_card(order, false),
        action = escape(&order_path(&order.order_id, "resolve")),
        magnitude = value.abs(),
    )
}

pub fn render_assignment_form(order: &Order, dataset: &Dataset) -> String {
    let drivers = select_options(
        dataset
            .drivers
            .iter()
            .map(|driver| (driver.name.clone(), driver.name.clone(), false)),
    );
    let companies = select_options(
        dataset
            .transport_companies
            .iter()
            .map(|company| (company.name.clone(), company.name.clone(), false)),
    );
    format!(
        r#"<h2>Assign Driver &amp; Truck</h2>
    <p><strong>Order:</strong> {id} | <strong>Client:</strong> {client} | <strong>Quantity:</strong> {quantity}</p>
    <form class="panel-form" method="post" action="{action}">
      <label>Driver Name *
        <select name="driverName" required><option value="">Select driver...</option>{drivers}</select>
      </label>
      <label>Truck Plate *<input name="truckPlate" required /></label>
      <label>Transport Company *
        <select name="transportCompany" required><option value="">Select company...</option>{companies}</select>
      </label>
      <label>Estimated Delivery Date *<input name="estimatedDelivery" type="date" required /></label>
      <label>Notes<textarea name="note" rows="2"></textarea></label>
      <div class="actions">
        <button class="btn btn-primary" type="submit">Assign Transport</button>
        <a class="btn btn-secondary" href="/tabs/forAssigning">Cancel</a>
      </div>
    </form>"#,
        id = escape(&order.order_id),
        action = escape(&order_path(&order.order_id, "assign")),
        client = escape(&order.client_name),
        quantity = liters(order.quantity),
    )
}

pub fn render_login(error: Option<&str>) -> String {
    let departments = select_options(
        [
            Department::Management,
            Department::Sales,
            Department::Finance,
            Department::Transport,
            Department::Warehouse,
        ]
        .into_iter()
        .map(|department| {
            (
                department.as_str().to_string(),
                department.as_str().to_string(),
                false,
            )
        }),
    );
    LOGIN_HTML
        .replace("{{BANNER}}", &render_banner(None, error))
        .replace("{{DEPARTMENTS}}", &departments)
}

const STYLE: &str = r#"
    :root {
      --primary: #2563eb;
      --success: #059669;
      --warning: #f59e0b;
      --danger: #dc2626;
      --ink: #1f2937;
      --muted: #6b7280;
      --card: #ffffff;
      --bg: #f3f4f6;
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      font-family: "Inter", "Segoe UI", sans-serif;
      background: var(--bg);
      color: var(--ink);
    }

    .topbar {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 1rem;
      padding: 1rem 2rem;
      background: #1e3a8a;
      color: white;
    }

    .topbar .user { display: flex; gap: 1rem; align-items: center; }

    nav.tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 0.75rem 2rem;
      background: white;
      border-bottom: 1px solid #e5e7eb;
    }

    .tab {
      padding: 0.5rem 1rem;
      border-radius: 999px;
      color: var(--muted);
      text-decoration: none;
      font-weight: 600;
    }

    .tab.active { background: #dbeafe; color: var(--primary); }

    .badge {
      display: inline-block;
      min-width: 1.5rem;
      padding: 0 0.4rem;
      border-radius: 999px;
      background: var(--danger);
      color: white;
      font-size: 0.8rem;
      text-align: center;
    }

    main { padding: 1.5rem 2rem; display: grid; gap: 1rem; }

    .toolbar { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .filter { display: flex; gap: 0.5rem; align-items: center; }

    .banner { padding: 0.75rem 1rem; border-radius: 6px; font-weight: 600; }
    .banner.error { background: #fee2e2; color: #991b1b; }
    .banner.notice { background: #d1fae5; color: #065f46; }

    .card {
      background: var(--card);
      border-radius: 10px;
      padding: 1rem 1.25rem;
      box-shadow: 0 4px 12px rgba(15, 23, 42, 0.08);
    }

    .card header { display: flex; justify-content: space-between; align-items: center; }
    .card h3 { margin: 0; }
    .card p { margin: 0.25rem 0; }
    .dispute-card { border-left: 4px solid var(--warning); }

    .status { padding: 0.2rem 0.6rem; border-radius: 999px; font-size: 0.85rem; font-weight: 600; }
    .status-pending { background: #fef3c7; }
    .status-approved { background: #dbeafe; }
    .status-rejected { background: #fee2e2; }
    .status-transport, .status-warehouse, .status-loading { background: #e0e7ff; }
    .status-transit { background: #cffafe; }
    .status-delivered, .status-resolved { background: #d1fae5; }
    .status-disputed { background: #ffedd5; }

    .variance-none { color: var(--success); }
    .variance-over { color: var(--primary); }
    .variance-short { color: var(--danger); }

    .actions { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 0.75rem; }
    form.inline { display: inline-flex; gap: 0.5rem; }

    .btn {
      border: none;
      border-radius: 6px;
      padding: 0.5rem 1rem;
      font-weight: 600;
      cursor: pointer;
      text-decoration: none;
      color: white;
    }

    .btn-primary { background: var(--primary); }
    .btn-success { background: var(--success); }
    .btn-warning { background: var(--warning); }
    .btn-danger { background: var(--danger); }
    .btn-secondary { background: #9ca3af; }

    .panel-form { display: grid; gap: 1rem; max-width: 560px; }
    .panel-form label { display: grid; gap: 0.35rem; font-weight: 600; }
    .panel-form fieldset { border-left: 3px solid var(--primary); display: grid; gap: 0.75rem; }
    .empty { text-align: center; padding: 2rem; color: var(--muted); }
    .danger { color: var(--danger); }
    .warning { color: var(--warning); }
    .hint { background: #dbeafe; border-left: 4px solid #3b82f6; padding: 1rem; color: #1e40af; }
"#;

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}} · Order Desk</title>
  <link rel="stylesheet" href="/style.css" />
</head>
<body>
  <header class="topbar">
    <strong>Order Desk</strong>
    <div class="user">{{USER}}</div>
  </header>
  <nav class="tabs">{{NAV}}</nav>
  <main>
    <div class="toolbar">{{FILTER}}</div>
    {{BANNER}}
    {{CONTENT}}
  </main>
</body>
</html>
"#;

const LOGIN_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Sign in · Order Desk</title>
  <link rel="stylesheet" href="/style.css" />
</head>
<body>
  <main>
    <h1>Order Desk</h1>
    {{BANNER}}
    <form class="panel-form" method="post" action="/session">
      <label>User ID *<input name="id" required /></label>
      <label>Name *<input name="name" required /></label>
      <label>Department *
        <select name="department" required>{{DEPARTMENTS}}</select>
      </label>
      <button class="btn btn-primary" type="submit">Sign in</button>
    </form>
  </main>
</body>
</html>
"#;

pub fn stylesheet() -> &'static str {
    STYLE
}
