use crate::domain::model::{Payload, SaveResponse, User};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Record store addressed by user id. A missing record is `Ok(None)`.
pub trait UserStore: Send + Sync {
    fn find(&self, id: &str) -> impl std::future::Future<Output = Result<Option<User>>> + Send;
}

/// A single remote call carrying a payload.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    async fn post(&self, payload: &Payload) -> Result<SaveResponse>;
}
