//! Client for the spreadsheet-backed remote store.
//!
//! One endpoint serves both directions: `GET ?action=getAll` returns the full
//! dataset, `POST` with an action-tagged JSON body applies a transition and
//! answers with an acknowledgement.

use crate::actions::StoreAction;
use crate::models::Dataset;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use url::Url;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store answered with HTTP {0}")]
    Status(u16),
    #[error("unreadable store response: {0}")]
    Decode(String),
    #[error("store rejected the request: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreAck {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn fetch_dataset(&self) -> Result<Dataset, StoreError>;

    /// Fails unless the store acknowledges the action.
    async fn submit(&self, action: &StoreAction) -> Result<StoreAck, StoreError>;
}

pub struct HttpStore {
    client: reqwest::Client,
    url: Url,
}

impl HttpStore {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    fn dataset_url(&self) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut().append_pair("action", "getAll");
        url
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn fetch_dataset(&self) -> Result<Dataset, StoreError> {
        let response = self.client.get(self.dataset_url()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| StoreError::Decode(err.to_string()))
    }

    async fn submit(&self, action: &StoreAction) -> Result<StoreAck, StoreError> {
        let response = self.client.post(self.url.clone()).json(action).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        let ack: StoreAck =
            serde_json::from_slice(&body).map_err(|err| StoreError::Decode(err.to_string()))?;
        if !ack.success {
            return Err(StoreError::Rejected(
                ack.message.unwrap_or_else(|| "no reason given".to_string()),
            ));
        }
        Ok(ack)
    }
}

/// In-process store that applies actions to its own dataset.
#[derive(Default)]
pub struct MemoryStore {
    dataset: RwLock<Dataset>,
    submitted: RwLock<Vec<StoreAction>>,
    rejection: RwLock<Option<String>>,
    fetch_failure: RwLock<Option<u16>>,
}

impl MemoryStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: RwLock::new(dataset),
            ..Self::default()
        }
    }

    /// Every later submission is refused with `reason`.
    pub async fn reject_with(&self, reason: impl Into<String>) {
        *self.rejection.write().await = Some(reason.into());
    }

    pub async fn accept_submissions(&self) {
        *self.rejection.write().await = None;
    }

    /// Every later fetch fails as if the store answered with `status`.
    pub async fn fail_fetches_with(&self, status: u16) {
        *self.fetch_failure.write().await = Some(status);
    }

    pub async fn submitted(&self) -> Vec<StoreAction> {
        self.submitted.read().await.clone()
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn fetch_dataset(&self) -> Result<Dataset, StoreError> {
        if let Some(status) = *self.fetch_failure.read().await {
            return Err(StoreError::Status(status));
        }
        Ok(self.dataset.read().await.clone())
    }

    async fn submit(&self, action: &StoreAction) -> Result<StoreAck, StoreError> {
        if let Some(reason) = self.rejection.read().await.clone() {
            return Err(StoreError::Rejected(reason));
        }
        self.submitted.write().await.push(action.clone());

        let mut dataset = self.dataset.write().await;
        let Some(order) = dataset
            .orders
            .iter_mut()
            .find(|order| order.order_id == action.order_id())
        else {
            return Err(StoreError::Rejected(format!(
                "unknown order {}",
                action.order_id()
            )));
        };
        if let Some(status) = action.target_status() {
            order.status = status;
        }
        match action {
            StoreAction::AssignTransport {
                driver_name,
                truck_plate,
                transport_company,
                ..
            } => {
                order.driver_name = Some(driver_name.clone());
                order.truck_plate = Some(truck_plate.clone());
                order.transport_company = Some(transport_company.clone());
            }
            StoreAction::EnterProforma {
                proforma_number, ..
            } => order.proforma_number = Some(proforma_number.clone()),
            StoreAction::EnterInvoice { invoice_number, .. } => {
                order.invoice_number = Some(invoice_number.clone())
            }
            _ => {}
        }

        Ok(StoreAck {
            success: true,
            message: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Order, OrderStatus};
    use axum::{http::StatusCode, routing::get, Json, Router};

    async fn stub_store() -> Url {
        let app = Router::new()
            .route(
                "/broken",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR })
                    .post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            )
            .route(
                "/garbage",
                get(|| async { "not json" }).post(|| async { "<html>Service busy</html>" }),
            )
            .route(
                "/locked",
                get(|| async { Json(serde_json::json!({ "orders": [] })) }).post(|| async {
                    Json(serde_json::json!({ "success": false, "message": "locked" }))
                }),
            )
            .route(
                "/ok",
                get(|| async {
                    Json(serde_json::json!({ "orders": [{ "orderID": 7, "status": "Approved" }] }))
                })
                .post(|| async { Json(serde_json::json!({ "success": true, "message": "Saved" })) }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        Url::parse(&format!("http://{addr}/")).unwrap()
    }

    fn store_at(base: &Url, path: &str) -> HttpStore {
        HttpStore::new(base.join(path).unwrap(), Duration::from_secs(5)).unwrap()
    }

    fn delivered() -> StoreAction {
        StoreAction::MarkDelivered {
            order_id: "7".into(),
            transport_user_id: "T1".into(),
        }
    }

    #[tokio::test]
    async fn http_store_reads_dataset_and_ack() {
        let base = stub_store().await;
        let store = store_at(&base, "ok");
        let dataset = store.fetch_dataset().await.unwrap();
        assert_eq!(dataset.orders[0].order_id, "7");
        let ack = store.submit(&delivered()).await.unwrap();
        assert_eq!(ack.message.as_deref(), Some("Saved"));
    }

    #[tokio::test]
    async fn http_store_maps_failures() {
        let base = stub_store().await;

        let broken = store_at(&base, "broken");
        assert!(matches!(broken.fetch_dataset().await, Err(StoreError::Status(500))));
        assert!(matches!(broken.submit(&delivered()).await, Err(StoreError::Status(500))));

        let garbage = store_at(&base, "garbage");
        assert!(matches!(garbage.fetch_dataset().await, Err(StoreError::Decode(_))));
        assert!(matches!(garbage.submit(&delivered()).await, Err(StoreError::Decode(_))));

        let locked = store_at(&base, "locked");
        match locked.submit(&delivered()).await {
            Err(StoreError::Rejected(reason)) => assert_eq!(reason, "locked"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn memory_store_switches() {
        let store = MemoryStore::new(Dataset {
            orders: vec![Order::new("7", "Okta", 100.0, OrderStatus::LeftWarehouse)],
            ..Dataset::default()
        });
        store.reject_with("locked").await;
        assert!(matches!(store.submit(&delivered()).await, Err(StoreError::Rejected(_))));
        store.accept_submissions().await;
        assert!(store.submit(&delivered()).await.is_ok());

        store.fail_fetches_with(503).await;
        assert!(matches!(store.fetch_dataset().await, Err(StoreError::Status(503))));
    }

    #[test]
    fn dataset_url_adds_action_query() {
        let store = HttpStore::new(
            Url::parse("https://script.example.com/macros/s/abc/exec").unwrap(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            store.dataset_url().as_str(),
            "https://script.example.com/macros/s/abc/exec?action=getAll"
        );
    }

    #[test]
    fn ack_message_is_optional() {
        let ack: StoreAck = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(ack.success);
        assert_eq!(ack.message, None);
    }
}
