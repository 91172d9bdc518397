//! State-transition actions and the submission sequence shared by all of them:
//! permission gate, form validation, transition check against the loaded
//! copy, POST to the store, settle delay, full reload.

use crate::disputes::{DisputeForm, ResolutionForm};
use crate::errors::{AppError, ValidationError};
use crate::models::{Dataset, MeasurementMethod, Order, OrderStatus, ResolutionLevel, User};
use crate::permissions::Permission;
use crate::state::AppState;
use crate::store::StoreError;
use crate::tabs::Tab;
use crate::transport::AssignmentForm;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::sleep;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RejectForm {
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WarehouseForm {
    pub new_status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProformaForm {
    pub proforma_number: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceForm {
    pub invoice_number: String,
}

/// What a user asks for, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ActionForm {
    ApproveOrder,
    RejectOrder(RejectForm),
    AssignTransport(AssignmentForm),
    UpdateWarehouseStatus(WarehouseForm),
    MarkDelivered,
    MarkDisputed(DisputeForm),
    ResolveDispute(ResolutionForm),
    EnterProforma(ProformaForm),
    EnterInvoice(InvoiceForm),
}

/// JSON body for `POST /api/actions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    #[serde(rename = "orderID")]
    pub order_id: String,
    #[serde(flatten)]
    pub form: ActionForm,
}

/// Wire payload posted to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StoreAction {
    ApproveOrder {
        #[serde(rename = "orderID")]
        order_id: String,
        #[serde(rename = "managerID")]
        manager_id: String,
    },
    RejectOrder {
        #[serde(rename = "orderID")]
        order_id: String,
        #[serde(rename = "managerID")]
        manager_id: String,
        reason: String,
    },
    AssignTransport {
        #[serde(rename = "orderID")]
        order_id: String,
        #[serde(rename = "transportUserID")]
        transport_user_id: String,
        driver_name: String,
        truck_plate: String,
        transport_company: String,
        estimated_delivery: String,
        note: String,
    },
    UpdateWarehouseStatus {
        #[serde(rename = "orderID")]
        order_id: String,
        #[serde(rename = "warehouseUserID")]
        warehouse_user_id: String,
        new_status: OrderStatus,
    },
    MarkDelivered {
        #[serde(rename = "orderID")]
        order_id: String,
        #[serde(rename = "transportUserID")]
        transport_user_id: String,
    },
    MarkDisputed {
        #[serde(rename = "orderID")]
        order_id: String,
        #[serde(rename = "transportUserID")]
        transport_user_id: String,
        actual_quantity: String,
        variance_liters: String,
        dispute_reason: String,
        notes: String,
        client_name: String,
        measurement_method: MeasurementMethod,
        scale_owner: String,
        scale_city: String,
    },
    ResolveDispute {
        #[serde(rename = "orderID")]
        order_id: String,
        #[serde(rename = "resolverID")]
        resolver_id: String,
        resolution_level: ResolutionLevel,
        resolution_notes: String,
        action_taken: String,
    },
    EnterProforma {
        #[serde(rename = "orderID")]
        order_id: String,
        #[serde(rename = "financeUserID")]
        finance_user_id: String,
        proforma_number: String,
    },
    EnterInvoice {
        #[serde(rename = "orderID")]
        order_id: String,
        #[serde(rename = "financeUserID")]
        finance_user_id: String,
        invoice_number: String,
    },
}

impl StoreAction {
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::ApproveOrder { .. } => "approveOrder",
            StoreAction::RejectOrder { .. } => "rejectOrder",
            StoreAction::AssignTransport { .. } => "assignTransport",
            StoreAction::UpdateWarehouseStatus { .. } => "updateWarehouseStatus",
            StoreAction::MarkDelivered { .. } => "markDelivered",
            StoreAction::MarkDisputed { .. } => "markDisputed",
            StoreAction::ResolveDispute { .. } => "resolveDispute",
            StoreAction::EnterProforma { .. } => "enterProforma",
            StoreAction::EnterInvoice { .. } => "enterInvoice",
        }
    }

    pub fn order_id(&self) -> &str {
        match self {
            StoreAction::ApproveOrder { order_id, .. }
            | StoreAction::RejectOrder { order_id, .. }
            | StoreAction::AssignTransport { order_id, .. }
            | StoreAction::UpdateWarehouseStatus { order_id, .. }
            | StoreAction::MarkDelivered { order_id, .. }
            | StoreAction::MarkDisputed { order_id, .. }
            | StoreAction::ResolveDispute { order_id, .. }
            | StoreAction::EnterProforma { order_id, .. }
            | StoreAction::EnterInvoice { order_id, .. } => order_id,
        }
    }

    /// Status the order should have once the store applies this action.
    pub fn target_status(&self) -> Option<OrderStatus> {
        match self {
            StoreAction::ApproveOrder { .. } => Some(OrderStatus::Approved),
            StoreAction::RejectOrder { .. } => Some(OrderStatus::Rejected),
            StoreAction::AssignTransport { .. } => Some(OrderStatus::TruckAssigned),
            StoreAction::UpdateWarehouseStatus { new_status, .. } => Some(*new_status),
            StoreAction::MarkDelivered { .. } => Some(OrderStatus::Delivered),
            StoreAction::MarkDisputed { .. } => Some(OrderStatus::Disputed),
            StoreAction::ResolveDispute { .. } => Some(OrderStatus::Resolved),
            StoreAction::EnterProforma { .. } | StoreAction::EnterInvoice { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Only {departments} can {what}")]
    Permission {
        departments: String,
        what: &'static str,
    },
    #[error("Order not found: {0}")]
    UnknownOrder(String),
    #[error("Order {order_id} is {from}; it cannot move to {to}")]
    InvalidTransition {
        order_id: String,
        from: OrderStatus,
        to: OrderStatus,
    },
    #[error("Order {order_id} is {status}; {what} is not possible")]
    NotApplicable {
        order_id: String,
        status: OrderStatus,
        what: &'static str,
    },
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<ActionError> for AppError {
    fn from(err: ActionError) -> Self {
        let message = err.to_string();
        match err {
            ActionError::Validation(_) => AppError::bad_request(message),
            ActionError::Permission { .. } => AppError::forbidden(message),
            ActionError::UnknownOrder(_) => AppError::not_found(message),
            ActionError::InvalidTransition { .. } | ActionError::NotApplicable { .. } => {
                AppError::conflict(message)
            }
            ActionError::Store(_) => AppError::bad_gateway(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub action: &'static str,
    #[serde(rename = "orderID")]
    pub order_id: String,
    pub message: String,
    pub next_tab: Tab,
    pub reloaded: bool,
}

impl ActionForm {
    pub fn permission(&self) -> Permission {
        match self {
            ActionForm::ApproveOrder => Permission::ApproveOrders,
            ActionForm::RejectOrder(_) => Permission::RejectOrders,
            ActionForm::AssignTransport(_) => Permission::AssignTransport,
            ActionForm::UpdateWarehouseStatus(_) => Permission::UpdateWarehouseStatus,
            ActionForm::MarkDelivered => Permission::MarkDelivered,
            ActionForm::MarkDisputed(_) => Permission::ReportDispute,
            ActionForm::ResolveDispute(_) => Permission::ResolveDispute,
            ActionForm::EnterProforma(_) => Permission::EnterProforma,
            ActionForm::EnterInvoice(_) => Permission::EnterInvoice,
        }
    }

    pub fn next_tab(&self) -> Tab {
        match self {
            ActionForm::ApproveOrder | ActionForm::RejectOrder(_) => Tab::PendingApproval,
            ActionForm::AssignTransport(_) => Tab::ForAssigning,
            ActionForm::UpdateWarehouseStatus(_) => Tab::NeedsProcessing,
            ActionForm::MarkDelivered => Tab::TransportFinished,
            ActionForm::MarkDisputed(_) => Tab::TransportDisputed,
            ActionForm::ResolveDispute(_) => Tab::Resolved,
            ActionForm::EnterProforma(_) => Tab::NeedsDocs,
            ActionForm::EnterInvoice(_) => Tab::Invoiced,
        }
    }

    /// Tab the action is started from; failures are reported there.
    pub fn origin_tab(&self) -> Tab {
        match self {
            ActionForm::ApproveOrder | ActionForm::RejectOrder(_) => Tab::PendingApproval,
            ActionForm::AssignTransport(_) => Tab::ForAssigning,
            ActionForm::UpdateWarehouseStatus(_) => Tab::NeedsProcessing,
            ActionForm::MarkDelivered | ActionForm::MarkDisputed(_) => Tab::Assigned,
            ActionForm::ResolveDispute(_) => Tab::Disputes,
            ActionForm::EnterProforma(_) | ActionForm::EnterInvoice(_) => Tab::NeedsDocs,
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            ActionForm::ApproveOrder => "Order approved",
            ActionForm::RejectOrder(_) => "Order rejected",
            ActionForm::AssignTransport(_) => "Transport assigned successfully",
            ActionForm::UpdateWarehouseStatus(_) => "Warehouse status updated",
            ActionForm::MarkDelivered => "Order marked as Delivered",
            ActionForm::MarkDisputed(_) => {
                "Dispute reported successfully. Management will review and resolve."
            }
            ActionForm::ResolveDispute(_) => "Dispute resolved successfully",
            ActionForm::EnterProforma(_) => "Proforma number saved",
            ActionForm::EnterInvoice(_) => "Invoice number saved",
        }
    }

    /// Turns the form into the store payload, refusing anything the loaded
    /// copy says cannot happen.
    pub fn prepare(
        &self,
        order_id: &str,
        user: &User,
        dataset: &Dataset,
    ) -> Result<StoreAction, ActionError> {
        let permission = self.permission();
        if !user.can(permission) {
            return Err(ActionError::Permission {
                departments: permission
                    .allowed_departments()
                    .iter()
                    .map(|department| department.as_str())
                    .collect::<Vec<_>>()
                    .join(" or "),
                what: permission.describe(),
            });
        }

        let order_id = order_id.trim();
        let order = dataset
            .order(order_id)
            .ok_or_else(|| ActionError::UnknownOrder(order_id.to_string()))?;
        let order_id = order.order_id.clone();
        let user_id = user.id.clone();

        let action = match self {
            ActionForm::ApproveOrder => {
                require_transition(order, OrderStatus::Approved)?;
                StoreAction::ApproveOrder {
                    order_id,
                    manager_id: user_id,
                }
            }
            ActionForm::RejectOrder(form) => {
                let reason = required(&form.reason)?;
                require_transition(order, OrderStatus::Rejected)?;
                StoreAction::RejectOrder {
                    order_id,
                    manager_id: user_id,
                    reason,
                }
            }
            ActionForm::AssignTransport(form) => {
                let assignment = form.validate(dataset)?;
                if order.has_driver() {
                    return Err(ActionError::NotApplicable {
                        order_id,
                        status: order.status,
                        what: "assigning another driver",
                    });
                }
                require_transition(order, OrderStatus::TruckAssigned)?;
                StoreAction::AssignTransport {
                    order_id,
                    transport_user_id: user_id,
                    driver_name: assignment.driver_name,
                    truck_plate: assignment.truck_plate,
                    transport_company: assignment.transport_company,
                    estimated_delivery: assignment.estimated_delivery.to_string(),
                    note: assignment.note,
                }
            }
            ActionForm::UpdateWarehouseStatus(form) => {
                let new_status = OrderStatus::parse(&form.new_status)
                    .filter(|status| status.is_warehouse_step())
                    .ok_or_else(|| ValidationError::new("Unknown warehouse status"))?;
                require_transition(order, new_status)?;
                StoreAction::UpdateWarehouseStatus {
                    order_id,
                    warehouse_user_id: user_id,
                    new_status,
                }
            }
            ActionForm::MarkDelivered => {
                require_transition(order, OrderStatus::Delivered)?;
                StoreAction::MarkDelivered {
                    order_id,
                    transport_user_id: user_id,
                }
            }
            ActionForm::MarkDisputed(form) => {
                let report = form.validate(order.quantity)?;
                require_transition(order, OrderStatus::Disputed)?;
                StoreAction::MarkDisputed {
                    order_id,
                    transport_user_id: user_id,
                    actual_quantity: report.actual_quantity.to_string(),
                    variance_liters: format!("{:.2}", report.variance),
                    dispute_reason: report.reason,
                    notes: report.notes,
                    client_name: report.client_name,
                    measurement_method: report.method,
                    scale_owner: report.scale_owner,
                    scale_city: report.scale_city,
                }
            }
            ActionForm::ResolveDispute(form) => {
                let resolution = form.validate()?;
                require_transition(order, OrderStatus::Resolved)?;
                StoreAction::ResolveDispute {
                    order_id,
                    resolver_id: user_id,
                    resolution_level: resolution.level,
                    resolution_notes: resolution.notes,
                    action_taken: resolution.action_taken,
                }
            }
            ActionForm::EnterProforma(form) => {
                let proforma_number = required(&form.proforma_number)?;
                if order.status == OrderStatus::Rejected {
                    return Err(ActionError::NotApplicable {
                        order_id,
                        status: order.status,
                        what: "entering a proforma",
                    });
                }
                StoreAction::EnterProforma {
                    order_id,
                    finance_user_id: user_id,
                    proforma_number,
                }
            }
            ActionForm::EnterInvoice(form) => {
                let invoice_number = required(&form.invoice_number)?;
                if !matches!(order.status, OrderStatus::Delivered | OrderStatus::Resolved) {
                    return Err(ActionError::NotApplicable {
                        order_id,
                        status: order.status,
                        what: "invoicing",
                    });
                }
                StoreAction::EnterInvoice {
                    order_id,
                    finance_user_id: user_id,
                    invoice_number,
                }
            }
        };
        Ok(action)
    }
}

fn required(value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::missing_fields());
    }
    Ok(value.to_string())
}

fn require_transition(order: &Order, to: OrderStatus) -> Result<(), ActionError> {
    if order.status.can_transition_to(to) {
        Ok(())
    } else {
        Err(ActionError::InvalidTransition {
            order_id: order.order_id.clone(),
            from: order.status,
            to,
        })
    }
}

/// Runs one action end to end. The reload after a successful POST is best
/// effort: a failure there is logged and reported through `reloaded`.
pub async fn submit(
    state: &AppState,
    user: &User,
    order_id: &str,
    form: ActionForm,
) -> Result<Outcome, ActionError> {
    let action = {
        let dataset = state.dataset.read().await;
        form.prepare(order_id, user, &dataset)?
    };

    info!(
        action = action.name(),
        order_id = action.order_id(),
        user = %user.id,
        "submitting action"
    );
    let ack = state.store.submit(&action).await.map_err(|err| {
        error!(action = action.name(), order_id = action.order_id(), "store refused action: {err}");
        err
    })?;

    if !state.reload_delay.is_zero() {
        sleep(state.reload_delay).await;
    }
    let reloaded = match state.reload().await {
        Ok(_) => true,
        Err(err) => {
            warn!("reload after {} failed: {err}", action.name());
            false
        }
    };

    let message = ack
        .message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| form.success_message().to_string());

    Ok(Outcome {
        action: action.name(),
        order_id: action.order_id().to_string(),
        message,
        next_tab: form.next_tab(),
        reloaded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Department, Driver, TransportCompany};
    use crate::store::MemoryStore;
    use std::sync::Arc;
    use std::time::Duration;

    fn user(department: Department) -> User {
        User {
            id: format!("{}-1", department.as_str()),
            name: "Test".into(),
            department,
        }
    }

    fn dataset() -> Dataset {
        let mut pending = Order::new("P1", "Makpetrol", 500.0, OrderStatus::PendingApproval);
        pending.created_by = Some("Sales-1".into());
        let approved = Order::new("A1", "Okta", 1200.0, OrderStatus::Approved);
        let mut left = Order::new("L1", "Lukoil", 500.0, OrderStatus::LeftWarehouse);
        left.driver_name = Some("Goran".into());
        let mut disputed = Order::new("X1", "Lukoil", 500.0, OrderStatus::Disputed);
        disputed.driver_name = Some("Goran".into());
        disputed.variance_liters = Some(-30.0);
        Dataset {
            orders: vec![pending, approved, left, disputed],
            drivers: vec![Driver {
                name: "Goran".into(),
                phone: None,
            }],
            transport_companies: vec![TransportCompany {
                name: "Vardar Trans".into(),
            }],
            ..Dataset::default()
        }
    }

    fn dispute_form() -> DisputeForm {
        DisputeForm {
            client_name: "Lukoil".into(),
            actual_quantity: "470".into(),
            measurement_method: "Protometer".into(),
            dispute_reason: "Short Delivery".into(),
            ..DisputeForm::default()
        }
    }

    #[test]
    fn permission_is_checked_first() {
        let err = ActionForm::ApproveOrder
            .prepare("P1", &user(Department::Sales), &dataset())
            .unwrap_err();
        assert!(matches!(err, ActionError::Permission { .. }));
        assert_eq!(err.to_string(), "Only Management can approve orders");
    }

    #[test]
    fn dispute_payload_carries_two_decimal_variance() {
        let action = ActionForm::MarkDisputed(dispute_form())
            .prepare("L1", &user(Department::Transport), &dataset())
            .unwrap();
        let body = serde_json::to_value(&action).unwrap();
        assert_eq!(body["action"], "markDisputed");
        assert_eq!(body["orderID"], "L1");
        assert_eq!(body["transportUserID"], "Transport-1");
        assert_eq!(body["varianceLiters"], "-30.00");
        assert_eq!(body["actualQuantity"], "470");
        assert_eq!(body["measurementMethod"], "Protometer");
        assert_eq!(body["scaleOwner"], "");
    }

    #[test]
    fn dispute_before_leaving_warehouse_is_a_conflict() {
        let err = ActionForm::MarkDisputed(dispute_form())
            .prepare("A1", &user(Department::Transport), &dataset())
            .unwrap_err();
        assert!(matches!(
            err,
            ActionError::InvalidTransition {
                from: OrderStatus::Approved,
                to: OrderStatus::Disputed,
                ..
            }
        ));
        assert_eq!(AppError::from(err).status, axum::http::StatusCode::CONFLICT);
    }

    #[test]
    fn unknown_order_is_not_found() {
        let err = ActionForm::MarkDelivered
            .prepare("missing", &user(Department::Transport), &dataset())
            .unwrap_err();
        assert!(matches!(err, ActionError::UnknownOrder(_)));
    }

    #[test]
    fn assignment_payload_names_transport_user() {
        let form = ActionForm::AssignTransport(AssignmentForm {
            driver_name: "Goran".into(),
            truck_plate: "SK-0001-AA".into(),
            transport_company: "Vardar Trans".into(),
            estimated_delivery: "2026-10-20".into(),
            note: "Call ahead".into(),
        });
        let action = form.prepare("A1", &user(Department::Transport), &dataset()).unwrap();
        let body = serde_json::to_value(&action).unwrap();
        assert_eq!(body["action"], "assignTransport");
        assert_eq!(body["transportUserID"], "Transport-1");
        assert_eq!(body["estimatedDelivery"], "2026-10-20");
        assert_eq!(action.target_status(), Some(OrderStatus::TruckAssigned));
    }

    #[test]
    fn warehouse_cannot_skip_steps() {
        let mut data = dataset();
        data.orders.push(Order::new("T1", "Okta", 800.0, OrderStatus::TruckAssigned));
        let warehouse = user(Department::Warehouse);
        let skip = ActionForm::UpdateWarehouseStatus(WarehouseForm {
            new_status: "Loading".into(),
        });
        assert!(matches!(
            skip.prepare("T1", &warehouse, &data).unwrap_err(),
            ActionError::InvalidTransition { .. }
        ));
        let step = ActionForm::UpdateWarehouseStatus(WarehouseForm {
            new_status: "In Warehouse".into(),
        });
        assert!(step.prepare("T1", &warehouse, &data).is_ok());
        let bogus = ActionForm::UpdateWarehouseStatus(WarehouseForm {
            new_status: "Delivered".into(),
        });
        assert!(matches!(
            bogus.prepare("T1", &warehouse, &data).unwrap_err(),
            ActionError::Validation(_)
        ));
    }

    #[test]
    fn invoice_requires_finished_order() {
        let finance = user(Department::Finance);
        let form = ActionForm::EnterInvoice(InvoiceForm {
            invoice_number: "INV-1".into(),
        });
        assert!(matches!(
            form.prepare("A1", &finance, &dataset()).unwrap_err(),
            ActionError::NotApplicable { .. }
        ));
    }

    #[test]
    fn api_request_decodes_flattened_form() {
        let raw = serde_json::json!({
            "orderID": "X1",
            "action": "resolveDispute",
            "resolutionLevel": "<50L",
            "actionTaken": "Client Compensated",
            "resolutionNotes": "Credit note issued"
        });
        let request: ActionRequest = serde_json::from_value(raw).unwrap();
        assert_eq!(request.order_id, "X1");
        let ActionForm::ResolveDispute(form) = &request.form else {
            panic!("wrong variant: {:?}", request.form);
        };
        assert_eq!(form.resolution_level, "<50L");
    }

    #[tokio::test]
    async fn submit_posts_then_reloads() {
        let store = Arc::new(MemoryStore::new(dataset()));
        let state = AppState::new(store.clone(), Duration::ZERO);
        state.reload().await.unwrap();

        let outcome = submit(&state, &user(Department::Transport), "L1", ActionForm::MarkDelivered)
            .await
            .unwrap();
        assert_eq!(outcome.action, "markDelivered");
        assert_eq!(outcome.next_tab, Tab::TransportFinished);
        assert!(outcome.reloaded);

        let submitted = store.submitted().await;
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].name(), "markDelivered");

        let dataset = state.dataset.read().await;
        assert_eq!(dataset.order("L1").unwrap().status, OrderStatus::Delivered);
    }

    #[tokio::test]
    async fn rejected_submission_keeps_local_copy() {
        let store = Arc::new(MemoryStore::new(dataset()));
        store.reject_with("sheet locked").await;
        let state = AppState::new(store.clone(), Duration::ZERO);
        state.reload().await.unwrap();

        let err = submit(&state, &user(Department::Management), "P1", ActionForm::ApproveOrder)
            .await
            .unwrap_err();
        assert!(matches!(err, ActionError::Store(StoreError::Rejected(_))));
        assert_eq!(AppError::from(err).status, axum::http::StatusCode::BAD_GATEWAY);

        let dataset = state.dataset.read().await;
        assert_eq!(dataset.order("P1").unwrap().status, OrderStatus::PendingApproval);
    }

    #[tokio::test]
    async fn failed_reload_after_post_still_succeeds() {
        let store = Arc::new(MemoryStore::new(dataset()));
        let state = AppState::new(store.clone(), Duration::ZERO);
        state.reload().await.unwrap();
        store.fail_fetches_with(503).await;

        let outcome = submit(&state, &user(Department::Management), "P1", ActionForm::ApproveOrder)
            .await
            .unwrap();
        assert!(!outcome.reloaded);
        assert_eq!(outcome.message, "Order approved");
        assert_eq!(store.submitted().await.len(), 1);

        let dataset = state.dataset.read().await;
        assert_eq!(dataset.order("P1").unwrap().status, OrderStatus::PendingApproval);
    }

    #[tokio::test]
    async fn validation_failure_submits_nothing() {
        let store = Arc::new(MemoryStore::new(dataset()));
        let state = AppState::new(store.clone(), Duration::ZERO);
        state.reload().await.unwrap();

        let mut form = dispute_form();
        form.measurement_method = "Scale".into();
        let err = submit(&state, &user(Department::Transport), "L1", ActionForm::MarkDisputed(form))
            .await
            .unwrap_err();
        assert!(matches!(err, ActionError::Validation(_)));
        assert!(store.submitted().await.is_empty());
    }
}
