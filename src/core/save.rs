use crate::core::{Payload, RemoteApi, SaveResponse};
use crate::utils::error::Result;

/// Forward `payload` to the remote endpoint and hand back its response unchanged.
pub async fn save_data<A: RemoteApi + ?Sized>(api: &A, payload: &Payload) -> Result<SaveResponse> {
    tracing::debug!("Saving payload ({} bytes)", payload.to_string().len());
    let response = api.post(payload).await?;
    Ok(response)
}
