use crate::actions::{
    submit, ActionError, ActionForm, ActionRequest, InvoiceForm, Outcome, ProformaForm,
    RejectForm, WarehouseForm,
};
use crate::disputes::{DisputeForm, ResolutionForm};
use crate::errors::AppError;
use crate::filters::{DateFilter, DateQuery};
use crate::models::{Department, Order, OrderStatus, User};
use crate::permissions::Permission;
use crate::state::AppState;
use crate::stats::{build_badges, Badge};
use crate::storage::SYSTEM_VERSION;
use crate::tabs::{default_tab, filter_orders, Tab};
use crate::transport::AssignmentForm;
use crate::ui;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::Local;
use serde::Deserialize;
use url::form_urlencoded;

const SESSION_COOKIE: &str = "session";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub id: String,
    pub name: String,
    pub department: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
    pub date: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

impl TabQuery {
    fn date_query(&self) -> DateQuery {
        DateQuery {
            date: self.date.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            pair.trim()
                .strip_prefix(SESSION_COOKIE)
                .and_then(|rest| rest.strip_prefix('='))
                .map(str::to_string)
        })
}

async fn current_user(state: &AppState, headers: &HeaderMap) -> Option<User> {
    let token = session_token(headers)?;
    state.session_user(&token).await
}

async fn require_user(state: &AppState, headers: &HeaderMap) -> Result<User, AppError> {
    current_user(state, headers)
        .await
        .ok_or_else(|| AppError::unauthorized("Please sign in"))
}

fn with_message(path: &str, key: &str, message: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, message)
        .finish();
    format!("{path}?{query}")
}

/// Where a user lands after an action: `tab` when they may see it, their own
/// default tab otherwise.
fn landing(user: &User, tab: Tab) -> String {
    let tab = if tab.visible_to(user) {
        tab
    } else {
        default_tab(user.department)
    };
    format!("/tabs/{}", tab.slug())
}

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    match current_user(&state, &headers).await {
        Some(user) => Redirect::to(&format!("/tabs/{}", default_tab(user.department).slug())),
        None => Redirect::to("/login"),
    }
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], ui::stylesheet())
}

pub async fn login_page(Query(query): Query<MessageQuery>) -> Html<String> {
    Html(ui::render_login(query.error.as_deref()))
}

pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let id = form.id.trim();
    let name = form.name.trim();
    if id.is_empty() || name.is_empty() {
        return Redirect::to(&with_message("/login", "error", "Please fill in all required fields"))
            .into_response();
    }

    let Some(department) = Department::parse(&form.department) else {
        return Redirect::to(&with_message("/login", "error", "Please choose a valid department"))
            .into_response();
    };

    let user = User {
        id: id.to_string(),
        name: name.to_string(),
        department,
    };
    tracing::info!(user = %user.id, department = %user.department, "signed in");
    let token = state.open_session(user).await;
    let cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
    match HeaderValue::from_str(&cookie) {
        Ok(value) => ([(header::SET_COOKIE, value)], Redirect::to("/")).into_response(),
        Err(err) => AppError::internal(err).into_response(),
    }
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token(&headers) {
        if let Some(user) = state.close_session(&token).await {
            tracing::info!(user = %user.id, "signed out");
        }
    }
    let expired = format!("{SESSION_COOKIE}=; Path=/; Max-Age=0");
    (
        [(header::SET_COOKIE, expired)],
        Redirect::to("/login"),
    )
}

pub async fn tab_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Query(query): Query<TabQuery>,
) -> Result<Response, AppError> {
    let Some(user) = current_user(&state, &headers).await else {
        return Ok(Redirect::to("/login").into_response());
    };
    let tab = Tab::from_slug(&slug).ok_or_else(|| AppError::not_found(format!("Unknown tab: {slug}")))?;
    if !tab.visible_to(&user) {
        return Err(AppError::forbidden(format!(
            "{} is not available to {}",
            tab.label(),
            user.department
        )));
    }

    let (filter, filter_error) = match DateFilter::from_query(&query.date_query()) {
        Ok(filter) => (filter, None),
        Err(err) => (DateFilter::All, Some(err.0)),
    };
    let error = filter_error.or(query.error);

    let dataset = state.dataset.read().await;
    let today = today();
    let orders = filter_orders(&dataset.orders, tab, &user, &filter, today);
    let badges = build_badges(&dataset, &user, &filter);
    let ctx = ui::PageContext {
        user: &user,
        filter: &filter,
        badges: &badges,
        active: Some(tab),
        notice: query.notice.as_deref(),
        error: error.as_deref(),
    };
    Ok(Html(ui::render_tab_page(&ctx, tab, &orders)).into_response())
}

#[derive(Debug, Clone, Copy)]
enum FormKind {
    Assign,
    Dispute,
    Resolve,
}

impl FormKind {
    fn permission(self) -> Permission {
        match self {
            FormKind::Assign => Permission::AssignTransport,
            FormKind::Dispute => Permission::ReportDispute,
            FormKind::Resolve => Permission::ResolveDispute,
        }
    }

    fn expected_status(self) -> OrderStatus {
        match self {
            FormKind::Assign => OrderStatus::Approved,
            FormKind::Dispute => OrderStatus::LeftWarehouse,
            FormKind::Resolve => OrderStatus::Disputed,
        }
    }

    fn title(self) -> &'static str {
        match self {
            FormKind::Assign => "Assign Driver & Truck",
            FormKind::Dispute => "Report Dispute",
            FormKind::Resolve => "Resolve Dispute",
        }
    }

    fn origin(self) -> Tab {
        match self {
            FormKind::Assign => Tab::ForAssigning,
            FormKind::Dispute => Tab::Assigned,
            FormKind::Resolve => Tab::Disputes,
        }
    }
}

async fn form_page(state: &AppState, headers: &HeaderMap, order_id: &str, kind: FormKind) -> Response {
    let Some(user) = current_user(state, headers).await else {
        return Redirect::to("/login").into_response();
    };
    let permission = kind.permission();
    if !user.can(permission) {
        let message = format!("Your department cannot {}", permission.describe());
        return Redirect::to(&with_message(&landing(&user, kind.origin()), "error", &message))
            .into_response();
    }

    let dataset = state.dataset.read().await;
    let Some(order) = dataset.order(order_id) else {
        return AppError::not_found(format!("Order not found: {order_id}")).into_response();
    };
    if order.status != kind.expected_status() {
        let message = format!("Order {} is {}", order.order_id, order.status);
        return Redirect::to(&with_message(&landing(&user, kind.origin()), "error", &message))
            .into_response();
    }

    let body = match kind {
        FormKind::Assign => ui::render_assignment_form(order, &dataset),
        FormKind::Dispute => ui::render_dispute_form(order),
        FormKind::Resolve => ui::render_resolution_form(order),
    };
    let filter = DateFilter::All;
    let badges = build_badges(&dataset, &user, &filter);
    let ctx = ui::PageContext {
        user: &user,
        filter: &filter,
        badges: &badges,
        active: None,
        notice: None,
        error: None,
    };
    Html(ui::render_form_page(&ctx, kind.title(), &body)).into_response()
}

pub async fn assign_form(State(state): State<AppState>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    form_page(&state, &headers, &id, FormKind::Assign).await
}

pub async fn dispute_form(State(state): State<AppState>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    form_page(&state, &headers, &id, FormKind::Dispute).await
}

pub async fn resolve_form(State(state): State<AppState>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    form_page(&state, &headers, &id, FormKind::Resolve).await
}

/// Browser flow: success lands on the next tab with a notice, any failure
/// goes back to the originating tab with an error banner.
async fn run_form_action(state: &AppState, headers: &HeaderMap, order_id: &str, form: ActionForm) -> Response {
    let Some(user) = current_user(state, headers).await else {
        return Redirect::to("/login").into_response();
    };
    let origin = form.origin_tab();
    match submit(state, &user, order_id, form).await {
        Ok(outcome) => {
            let path = landing(&user, outcome.next_tab);
            Redirect::to(&with_message(&path, "notice", &outcome.message)).into_response()
        }
        Err(err) => {
            if !matches!(err, ActionError::Store(_)) {
                tracing::warn!(order_id, user = %user.id, "action refused: {err}");
            }
            Redirect::to(&with_message(&landing(&user, origin), "error", &err.to_string()))
                .into_response()
        }
    }
}

pub async fn approve(State(state): State<AppState>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    run_form_action(&state, &headers, &id, ActionForm::ApproveOrder).await
}

pub async fn reject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(form): Form<RejectForm>,
) -> Response {
    run_form_action(&state, &headers, &id, ActionForm::RejectOrder(form)).await
}

pub async fn assign(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(form): Form<AssignmentForm>,
) -> Response {
    run_form_action(&state, &headers, &id, ActionForm::AssignTransport(form)).await
}

pub async fn warehouse(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(form): Form<WarehouseForm>,
) -> Response {
    run_form_action(&state, &headers, &id, ActionForm::UpdateWarehouseStatus(form)).await
}

pub async fn deliver(State(state): State<AppState>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    run_form_action(&state, &headers, &id, ActionForm::MarkDelivered).await
}

pub async fn dispute(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(form): Form<DisputeForm>,
) -> Response {
    run_form_action(&state, &headers, &id, ActionForm::MarkDisputed(form)).await
}

pub async fn resolve(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(form): Form<ResolutionForm>,
) -> Response {
    run_form_action(&state, &headers, &id, ActionForm::ResolveDispute(form)).await
}

pub async fn proforma(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(form): Form<ProformaForm>,
) -> Response {
    run_form_action(&state, &headers, &id, ActionForm::EnterProforma(form)).await
}

pub async fn invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(form): Form<InvoiceForm>,
) -> Response {
    run_form_action(&state, &headers, &id, ActionForm::EnterInvoice(form)).await
}

pub async fn reload(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(user) = current_user(&state, &headers).await else {
        return Redirect::to("/login").into_response();
    };
    let path = landing(&user, default_tab(user.department));
    let target = match state.reload().await {
        Ok(count) => with_message(&path, "notice", &format!("Loaded {count} orders")),
        Err(err) => {
            tracing::error!("manual reload failed: {err}");
            with_message(&path, "error", &format!("Reload failed: {err}"))
        }
    };
    Redirect::to(&target).into_response()
}

pub async fn api_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TabQuery>,
) -> Result<Json<Vec<Order>>, AppError> {
    let user = require_user(&state, &headers).await?;
    let tab = match query.tab.as_deref() {
        Some(slug) => Tab::from_slug(slug).ok_or_else(|| AppError::not_found(format!("Unknown tab: {slug}")))?,
        None => default_tab(user.department),
    };
    if !tab.visible_to(&user) {
        return Err(AppError::forbidden(format!(
            "{} is not available to {}",
            tab.label(),
            user.department
        )));
    }
    let filter = DateFilter::from_query(&query.date_query())?;

    let dataset = state.dataset.read().await;
    let orders: Vec<Order> = filter_orders(&dataset.orders, tab, &user, &filter, today())
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(orders))
}

pub async fn api_badges(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TabQuery>,
) -> Result<Json<Vec<Badge>>, AppError> {
    let user = require_user(&state, &headers).await?;
    let filter = DateFilter::from_query(&query.date_query())?;
    let dataset = state.dataset.read().await;
    Ok(Json(build_badges(&dataset, &user, &filter)))
}

pub async fn api_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ActionRequest>,
) -> Result<Json<Outcome>, AppError> {
    let user = require_user(&state, &headers).await?;
    let outcome = submit(&state, &user, &request.order_id, request.form).await?;
    Ok(Json(outcome))
}

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let orders = state.dataset.read().await.orders.len();
    Json(serde_json::json!({
        "status": "ok",
        "version": SYSTEM_VERSION,
        "orders": orders,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_is_found_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark; session=abc-123; x=1"));
        assert_eq!(session_token(&headers).as_deref(), Some("abc-123"));

        let mut other = HeaderMap::new();
        other.insert(header::COOKIE, HeaderValue::from_static("sessionid=nope"));
        assert_eq!(session_token(&other), None);
    }

    #[test]
    fn messages_are_url_encoded() {
        assert_eq!(
            with_message("/tabs/disputes", "error", "Only Management can resolve disputes"),
            "/tabs/disputes?error=Only+Management+can+resolve+disputes"
        );
    }

    #[test]
    fn landing_falls_back_to_default_tab() {
        let sales = User {
            id: "S1".into(),
            name: "Sara".into(),
            department: Department::Sales,
        };
        assert_eq!(landing(&sales, Tab::PendingApproval), "/tabs/myOrders");
        let manager = User {
            department: Department::Management,
            ..sales
        };
        assert_eq!(landing(&manager, Tab::Resolved), "/tabs/resolved");
    }
}
