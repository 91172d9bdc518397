use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pending Approval")]
    PendingApproval,
    Approved,
    Rejected,
    #[serde(rename = "Truck Assigned")]
    TruckAssigned,
    #[serde(rename = "In Warehouse")]
    InWarehouse,
    Loading,
    #[serde(rename = "Left Warehouse")]
    LeftWarehouse,
    Delivered,
    Disputed,
    Resolved,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 10] = [
        OrderStatus::PendingApproval,
        OrderStatus::Approved,
        OrderStatus::Rejected,
        OrderStatus::TruckAssigned,
        OrderStatus::InWarehouse,
        OrderStatus::Loading,
        OrderStatus::LeftWarehouse,
        OrderStatus::Delivered,
        OrderStatus::Disputed,
        OrderStatus::Resolved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::PendingApproval => "Pending Approval",
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "Rejected",
            OrderStatus::TruckAssigned => "Truck Assigned",
            OrderStatus::InWarehouse => "In Warehouse",
            OrderStatus::Loading => "Loading",
            OrderStatus::LeftWarehouse => "Left Warehouse",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Disputed => "Disputed",
            OrderStatus::Resolved => "Resolved",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value.trim())
    }

    pub fn css_class(self) -> &'static str {
        match self {
            OrderStatus::PendingApproval => "status-pending",
            OrderStatus::Approved => "status-approved",
            OrderStatus::Rejected => "status-rejected",
            OrderStatus::TruckAssigned => "status-transport",
            OrderStatus::InWarehouse => "status-warehouse",
            OrderStatus::Loading => "status-loading",
            OrderStatus::LeftWarehouse => "status-transit",
            OrderStatus::Delivered => "status-delivered",
            OrderStatus::Disputed => "status-disputed",
            OrderStatus::Resolved => "status-resolved",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Management,
    Sales,
    Finance,
    Transport,
    Warehouse,
}

impl Department {
    pub fn as_str(self) -> &'static str {
        match self {
            Department::Management => "Management",
            Department::Sales => "Sales",
            Department::Finance => "Finance",
            Department::Transport => "Transport",
            Department::Warehouse => "Warehouse",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Management" => Some(Department::Management),
            "Sales" => Some(Department::Sales),
            "Finance" => Some(Department::Finance),
            "Transport" => Some(Department::Transport),
            "Warehouse" => Some(Department::Warehouse),
            _ => None,
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementMethod {
    Protometer,
    Scale,
}

impl MeasurementMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            MeasurementMethod::Protometer => "Protometer",
            MeasurementMethod::Scale => "Scale",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Protometer" => Some(MeasurementMethod::Protometer),
            "Scale" => Some(MeasurementMethod::Scale),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionLevel {
    #[serde(rename = "<50L")]
    Under50,
    #[serde(rename = "<100L")]
    Under100,
    #[serde(rename = ">100L")]
    Over100,
}

impl ResolutionLevel {
    pub const ALL: [ResolutionLevel; 3] = [
        ResolutionLevel::Under50,
        ResolutionLevel::Under100,
        ResolutionLevel::Over100,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionLevel::Under50 => "<50L",
            ResolutionLevel::Under100 => "<100L",
            ResolutionLevel::Over100 => ">100L",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ResolutionLevel::Under50 => "Up to 50L variance",
            ResolutionLevel::Under100 => "50L to 100L variance",
            ResolutionLevel::Over100 => "Above 100L variance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value.trim())
    }
}

pub const DISPUTE_REASONS: [&str; 8] = [
    "Short Delivery",
    "Over Delivery",
    "Quality Issue",
    "Wrong Product",
    "Damaged Delivery",
    "Client Refused",
    "Measurement Discrepancy",
    "Other",
];

/// Resolution actions as `(wire value, label)`.
pub const ACTIONS_TAKEN: [(&str, &str); 7] = [
    ("Approved Full Variance", "Approved Full Variance"),
    ("Approved Partial Variance", "Approved Partial Variance"),
    ("Client Compensated", "Client Compensated"),
    ("Driver Penalized", "Driver Penalized"),
    ("Measurement Error", "Measurement Error - No Action"),
    ("Administrative Resolution", "Administrative Resolution"),
    ("Other", "Other"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub department: Department,
}

/// One row of the orders sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "orderID", deserialize_with = "required_text")]
    pub order_id: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub order_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "required_text")]
    pub client_name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub quantity: f64,
    pub status: OrderStatus,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_number")]
    pub margin: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub driver_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub truck_plate: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub transport_company: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub estimated_delivery: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub assignment_note: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_number")]
    pub actual_quantity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_optional_number")]
    pub variance_liters: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub dispute_reason: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub dispute_notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub dispute_client_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub dispute_measurement_method: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub dispute_scale_owner: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub dispute_scale_city: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub dispute_reported_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub dispute_reported_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub resolution_level: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub action_taken: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub resolution_notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub rejection_reason: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub proforma_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub invoice_number: Option<String>,
}

impl Order {
    pub fn new(order_id: impl Into<String>, client_name: impl Into<String>, quantity: f64, status: OrderStatus) -> Self {
        Self {
            order_id: order_id.into(),
            order_date: None,
            client_name: client_name.into(),
            quantity,
            status,
            created_by: None,
            margin: None,
            driver_name: None,
            truck_plate: None,
            transport_company: None,
            estimated_delivery: None,
            assignment_note: None,
            actual_quantity: None,
            variance_liters: None,
            dispute_reason: None,
            dispute_notes: None,
            dispute_client_name: None,
            dispute_measurement_method: None,
            dispute_scale_owner: None,
            dispute_scale_city: None,
            dispute_reported_by: None,
            dispute_reported_date: None,
            resolution_level: None,
            action_taken: None,
            resolution_notes: None,
            rejection_reason: None,
            proforma_number: None,
            invoice_number: None,
        }
    }

    pub fn has_driver(&self) -> bool {
        self.driver_name.is_some()
    }

    pub fn has_invoice(&self) -> bool {
        self.invoice_number.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(deserialize_with = "required_text")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    #[serde(deserialize_with = "required_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportCompany {
    #[serde(deserialize_with = "required_text")]
    pub name: String,
}

/// Everything the store returns for `getAll`. Replaced wholesale on reload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub transport_companies: Vec<TransportCompany>,
}

impl Dataset {
    pub fn order(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.order_id == order_id)
    }

    pub fn has_driver(&self, name: &str) -> bool {
        self.drivers.iter().any(|driver| driver.name == name)
    }

    pub fn has_company(&self, name: &str) -> bool {
        self.transport_companies.iter().any(|company| company.name == name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Number(f64),
    Text(String),
    Bool(bool),
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_optional_number(deserializer)?.unwrap_or(0.0))
}

fn lenient_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Cell>::deserialize(deserializer)? {
        Some(Cell::Number(value)) => Some(value),
        Some(Cell::Text(text)) => parse_number(&text),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Cell>::deserialize(deserializer)? {
        Some(Cell::Text(text)) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Some(Cell::Number(value)) => Some(value.to_string()),
        _ => None,
    })
}

/// Text cell that must be present as a key; blank or null reads as "".
fn required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.and_then(|text| parse_date(&text)))
}

/// Parses a sheet number cell; anything unparsable counts as absent.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Accepts `YYYY-MM-DD` or any ISO timestamp starting with one.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let head = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_decodes_spreadsheet_cells() {
        let raw = serde_json::json!({
            "orderID": "ORD-1",
            "orderDate": "2026-03-02T08:15:00.000Z",
            "clientName": "Makpetrol",
            "quantity": "500",
            "status": "Left Warehouse",
            "driverName": "",
            "margin": "abc",
            "actualQuantity": 470,
            "truckPlate": "SK-1234-AB"
        });
        let order: Order = serde_json::from_value(raw).unwrap();
        assert_eq!(order.order_id, "ORD-1");
        assert_eq!(order.order_date, NaiveDate::from_ymd_opt(2026, 3, 2));
        assert_eq!(order.quantity, 500.0);
        assert_eq!(order.status, OrderStatus::LeftWarehouse);
        assert_eq!(order.driver_name, None);
        assert_eq!(order.margin, None);
        assert_eq!(order.actual_quantity, Some(470.0));
        assert_eq!(order.truck_plate.as_deref(), Some("SK-1234-AB"));
    }

    #[test]
    fn unparsable_quantity_defaults_to_zero() {
        let raw = serde_json::json!({ "orderID": "A", "quantity": "n/a", "status": "Approved" });
        let order: Order = serde_json::from_value(raw).unwrap();
        assert_eq!(order.quantity, 0.0);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let raw = serde_json::json!({ "orderID": "A", "status": "Lost" });
        assert!(serde_json::from_value::<Order>(raw).is_err());
    }

    #[test]
    fn numeric_and_null_text_cells_do_not_fail_the_dataset() {
        let raw = serde_json::json!({
            "orders": [
                { "orderID": "ORD-1", "clientName": "Okta", "status": "Approved" },
                { "orderID": 1002, "clientName": null, "status": "Approved" }
            ],
            "clients": [{ "name": 7 }],
            "drivers": [{ "name": 42, "phone": 38970123456i64 }],
            "transportCompanies": [{ "name": null }]
        });
        let dataset: Dataset = serde_json::from_value(raw).unwrap();
        assert_eq!(dataset.orders[1].order_id, "1002");
        assert_eq!(dataset.orders[1].client_name, "");
        assert_eq!(dataset.clients[0].name, "7");
        assert_eq!(dataset.drivers[0].name, "42");
        assert_eq!(dataset.drivers[0].phone.as_deref(), Some("38970123456"));
        assert_eq!(dataset.transport_companies[0].name, "");
        assert!(dataset.order("1002").is_some());
    }

    #[test]
    fn department_names_parse() {
        assert_eq!(Department::parse(" Finance "), Some(Department::Finance));
        assert_eq!(Department::parse("Janitorial"), None);
    }

    #[test]
    fn status_strings_round_trip_through_parse() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("Shipped"), None);
    }
}
