use crate::core::UserStore;
use crate::utils::error::Result;

/// Look up a user by id and return its name, if both exist.
/// Non-string names come back in their JSON text form.
pub async fn get_user_name<S: UserStore>(store: &S, id: &str) -> Result<Option<String>> {
    let user = store.find(id).await?;

    if user.is_none() {
        tracing::debug!("No user found for id {}", id);
    }

    Ok(user.and_then(|u| u.display_name()))
}
