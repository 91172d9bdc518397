//! Department tabs. Each tab is a predicate over a single order; the date
//! filter is applied on top.

use crate::filters::DateFilter;
use crate::models::{Department, Order, OrderStatus, User};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    PendingApproval,
    Disputes,
    Resolved,
    AllOrders,
    MyOrders,
    NeedsDocs,
    Invoiced,
    ForAssigning,
    Assigned,
    TransportDisputed,
    TransportFinished,
    NeedsProcessing,
    Dispatched,
}

const MANAGEMENT_TABS: &[Tab] = &[Tab::PendingApproval, Tab::Disputes, Tab::Resolved, Tab::AllOrders];
const SALES_TABS: &[Tab] = &[Tab::MyOrders];
const FINANCE_TABS: &[Tab] = &[Tab::NeedsDocs, Tab::Invoiced];
const TRANSPORT_TABS: &[Tab] = &[
    Tab::ForAssigning,
    Tab::Assigned,
    Tab::TransportDisputed,
    Tab::TransportFinished,
];
const WAREHOUSE_TABS: &[Tab] = &[Tab::NeedsProcessing, Tab::Dispatched];

impl Tab {
    pub const ALL: [Tab; 13] = [
        Tab::PendingApproval,
        Tab::Disputes,
        Tab::Resolved,
        Tab::AllOrders,
        Tab::MyOrders,
        Tab::NeedsDocs,
        Tab::Invoiced,
        Tab::ForAssigning,
        Tab::Assigned,
        Tab::TransportDisputed,
        Tab::TransportFinished,
        Tab::NeedsProcessing,
        Tab::Dispatched,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Tab::PendingApproval => "pendingApproval",
            Tab::Disputes => "disputes",
            Tab::Resolved => "resolved",
            Tab::AllOrders => "allOrders",
            Tab::MyOrders => "myOrders",
            Tab::NeedsDocs => "needsDocs",
            Tab::Invoiced => "invoiced",
            Tab::ForAssigning => "forAssigning",
            Tab::Assigned => "assigned",
            Tab::TransportDisputed => "transportDisputed",
            Tab::TransportFinished => "transportFinished",
            Tab::NeedsProcessing => "needsProcessing",
            Tab::Dispatched => "dispatched",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.slug() == slug)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::PendingApproval => "Pending Approval",
            Tab::Disputes => "Disputes",
            Tab::Resolved => "Resolved",
            Tab::AllOrders => "All Orders",
            Tab::MyOrders => "My Orders",
            Tab::NeedsDocs => "Needs Documents",
            Tab::Invoiced => "Invoiced",
            Tab::ForAssigning => "For Assigning",
            Tab::Assigned => "Assigned",
            Tab::TransportDisputed => "Disputed",
            Tab::TransportFinished => "Finished",
            Tab::NeedsProcessing => "Needs Processing",
            Tab::Dispatched => "Dispatched",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Tab::PendingApproval => "Orders Awaiting Approval",
            Tab::Disputes => "Disputes Awaiting Resolution",
            Tab::Resolved => "Resolved Disputes",
            Tab::AllOrders => "All Orders",
            Tab::MyOrders => "My Orders",
            Tab::NeedsDocs => "Finished Orders Without Invoice",
            Tab::Invoiced => "Invoiced Orders",
            Tab::ForAssigning => "Orders Waiting for Driver Assignment",
            Tab::Assigned => "Orders In Progress",
            Tab::TransportDisputed => "Disputed Orders - Awaiting Management Resolution",
            Tab::TransportFinished => "Completed Deliveries",
            Tab::NeedsProcessing => "Orders To Process",
            Tab::Dispatched => "Left Warehouse",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Tab::PendingApproval => "No orders waiting for approval",
            Tab::Disputes => "No open disputes",
            Tab::Resolved => "No resolved disputes",
            Tab::AllOrders => "No orders",
            Tab::MyOrders => "You have no orders",
            Tab::NeedsDocs => "No orders waiting for documents",
            Tab::Invoiced => "No invoiced orders",
            Tab::ForAssigning => "No orders waiting for driver assignment",
            Tab::Assigned => "No orders currently in progress",
            Tab::TransportDisputed => "No disputed orders",
            Tab::TransportFinished => "No finished orders",
            Tab::NeedsProcessing => "No orders waiting in the warehouse",
            Tab::Dispatched => "No dispatched orders",
        }
    }

    pub fn department(self) -> Department {
        match self {
            Tab::PendingApproval | Tab::Disputes | Tab::Resolved | Tab::AllOrders => {
                Department::Management
            }
            Tab::MyOrders => Department::Sales,
            Tab::NeedsDocs | Tab::Invoiced => Department::Finance,
            Tab::ForAssigning | Tab::Assigned | Tab::TransportDisputed | Tab::TransportFinished => {
                Department::Transport
            }
            Tab::NeedsProcessing | Tab::Dispatched => Department::Warehouse,
        }
    }

    pub fn includes(self, order: &Order, user: &User) -> bool {
        use OrderStatus::*;
        let status = order.status;
        match self {
            Tab::PendingApproval => status == PendingApproval,
            Tab::Disputes => status == Disputed,
            Tab::Resolved => status == Resolved,
            Tab::AllOrders => true,
            Tab::MyOrders => order.created_by.as_deref() == Some(user.id.as_str()),
            Tab::NeedsDocs => matches!(status, Delivered | Resolved) && !order.has_invoice(),
            Tab::Invoiced => order.has_invoice(),
            Tab::ForAssigning => status == Approved && !order.has_driver(),
            Tab::Assigned => {
                order.has_driver()
                    && matches!(status, TruckAssigned | InWarehouse | Loading | LeftWarehouse)
            }
            Tab::TransportDisputed => status == Disputed && order.has_driver(),
            Tab::TransportFinished => order.has_driver() && matches!(status, Delivered | Resolved),
            Tab::NeedsProcessing => matches!(status, TruckAssigned | InWarehouse | Loading),
            Tab::Dispatched => status == LeftWarehouse,
        }
    }

    /// Management sees every tab; everyone else only their own.
    pub fn visible_to(self, user: &User) -> bool {
        user.department == Department::Management || self.department() == user.department
    }
}

pub fn tabs_for(department: Department) -> &'static [Tab] {
    match department {
        Department::Management => MANAGEMENT_TABS,
        Department::Sales => SALES_TABS,
        Department::Finance => FINANCE_TABS,
        Department::Transport => TRANSPORT_TABS,
        Department::Warehouse => WAREHOUSE_TABS,
    }
}

pub fn default_tab(department: Department) -> Tab {
    match department {
        Department::Management => Tab::PendingApproval,
        Department::Sales => Tab::MyOrders,
        Department::Finance => Tab::NeedsDocs,
        Department::Transport => Tab::ForAssigning,
        Department::Warehouse => Tab::NeedsProcessing,
    }
}

pub fn filter_orders<'a>(
    orders: &'a [Order],
    tab: Tab,
    user: &User,
    filter: &DateFilter,
    today: NaiveDate,
) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|order| tab.includes(order, user))
        .filter(|order| filter.matches(order.order_date, today))
        .collect()
}
