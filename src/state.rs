use crate::models::{Dataset, User};
use crate::store::{RemoteStore, StoreError};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(12 * 60 * 60);

#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub issued: Instant,
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RemoteStore>,
    pub dataset: Arc<RwLock<Dataset>>,
    pub sessions: Arc<Mutex<HashMap<String, Session>>>,
    pub session_ttl: Duration,
    pub reload_delay: Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn RemoteStore>, reload_delay: Duration) -> Self {
        Self {
            store,
            dataset: Arc::new(RwLock::new(Dataset::default())),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            session_ttl: DEFAULT_SESSION_TTL,
            reload_delay,
        }
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    /// Replaces the in-memory copy with a fresh fetch. Returns the order count.
    pub async fn reload(&self) -> Result<usize, StoreError> {
        let fresh = self.store.fetch_dataset().await?;
        let count = fresh.orders.len();
        *self.dataset.write().await = fresh;
        info!(orders = count, "dataset reloaded");
        Ok(count)
    }

    /// Issues a token for `user`, dropping every expired session first.
    pub async fn open_session(&self, user: User) -> String {
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.issued.elapsed() < self.session_ttl);
        if sessions.len() < before {
            debug!(expired = before - sessions.len(), "dropped expired sessions");
        }
        sessions.insert(
            token.clone(),
            Session {
                user,
                issued: Instant::now(),
            },
        );
        token
    }

    pub async fn session_user(&self, token: &str) -> Option<User> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.get(token)?;
        if session.issued.elapsed() < self.session_ttl {
            return Some(session.user.clone());
        }
        sessions.remove(token);
        None
    }

    pub async fn close_session(&self, token: &str) -> Option<User> {
        self.sessions
            .lock()
            .await
            .remove(token)
            .map(|session| session.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Department, Order, OrderStatus};
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn reload_replaces_dataset() {
        let dataset = Dataset {
            orders: vec![Order::new("A", "Okta", 100.0, OrderStatus::Approved)],
            ..Dataset::default()
        };
        let state = AppState::new(Arc::new(MemoryStore::new(dataset)), Duration::ZERO);
        assert!(state.dataset.read().await.orders.is_empty());
        assert_eq!(state.reload().await.unwrap(), 1);
        assert!(state.dataset.read().await.order("A").is_some());
    }

    #[tokio::test]
    async fn sessions_open_and_close() {
        let state = AppState::new(Arc::new(MemoryStore::default()), Duration::ZERO);
        let user = User {
            id: "M1".into(),
            name: "Marija".into(),
            department: Department::Management,
        };
        let token = state.open_session(user.clone()).await;
        assert_eq!(state.session_user(&token).await, Some(user));
        assert!(state.close_session(&token).await.is_some());
        assert_eq!(state.session_user(&token).await, None);
    }

    #[tokio::test]
    async fn expired_sessions_stop_resolving_and_are_swept() {
        let state = AppState::new(Arc::new(MemoryStore::default()), Duration::ZERO)
            .with_session_ttl(Duration::from_millis(20));
        let user = User {
            id: "S1".into(),
            name: "Sara".into(),
            department: Department::Sales,
        };
        let stale = state.open_session(user.clone()).await;
        let lingering = state.open_session(user.clone()).await;
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(state.session_user(&stale).await, None);
        assert!(!state.sessions.lock().await.contains_key(&stale));

        let fresh = state.open_session(user.clone()).await;
        let sessions = state.sessions.lock().await;
        assert!(!sessions.contains_key(&lingering));
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions.get(&fresh).map(|s| &s.user), Some(&user));
    }
}
