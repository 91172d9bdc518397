use crate::models::{Department, User};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    SeeMargin,
    ApproveOrders,
    RejectOrders,
    CreateOrders,
    AssignTransport,
    MarkDelivered,
    ReportDispute,
    ResolveDispute,
    EnterProforma,
    EnterInvoice,
    UpdateWarehouseStatus,
    UploadDocuments,
}

impl Permission {
    pub fn allowed_departments(self) -> &'static [Department] {
        use Department::*;
        match self {
            Permission::SeeMargin => &[Management, Sales, Finance],
            Permission::ApproveOrders | Permission::RejectOrders | Permission::ResolveDispute => {
                &[Management]
            }
            Permission::CreateOrders => &[Sales],
            Permission::AssignTransport | Permission::MarkDelivered | Permission::ReportDispute => {
                &[Transport]
            }
            Permission::EnterProforma | Permission::EnterInvoice => &[Finance],
            Permission::UpdateWarehouseStatus => &[Warehouse],
            Permission::UploadDocuments => &[Transport, Warehouse],
        }
    }

    pub fn allows(self, department: Department) -> bool {
        self.allowed_departments().contains(&department)
    }

    pub fn describe(self) -> &'static str {
        match self {
            Permission::SeeMargin => "see margins",
            Permission::ApproveOrders => "approve orders",
            Permission::RejectOrders => "reject orders",
            Permission::CreateOrders => "create orders",
            Permission::AssignTransport => "assign transport",
            Permission::MarkDelivered => "mark orders delivered",
            Permission::ReportDispute => "report disputes",
            Permission::ResolveDispute => "resolve disputes",
            Permission::EnterProforma => "enter proforma numbers",
            Permission::EnterInvoice => "enter invoice numbers",
            Permission::UpdateWarehouseStatus => "update warehouse status",
            Permission::UploadDocuments => "upload documents",
        }
    }
}

impl User {
    pub fn can(&self, permission: Permission) -> bool {
        permission.allows(self.department)
    }
}
