use crate::core::{User, UserId, UserStore};
use crate::utils::error::{AppError, Result};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: HashMap<UserId, User>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建立索引；重複的 id 以最後一筆為準
    pub fn from_users<I: IntoIterator<Item = User>>(users: I) -> Self {
        let mut store = Self::new();
        for user in users {
            store.insert(user);
        }
        store
    }

    pub fn insert(&mut self, user: User) -> Option<User> {
        let previous = self.users.insert(user.id.clone(), user);
        if let Some(prev) = &previous {
            tracing::warn!("Duplicate user id {}, keeping the latest record", prev.id);
        }
        previous
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserStore for InMemoryUserStore {
    async fn find(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.get(id).cloned())
    }
}

/// Users loaded once from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileUserStore {
    path: String,
    inner: InMemoryUserStore,
}

impl JsonFileUserStore {
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        tracing::debug!("Loading users from {}", path_str);

        let content = tokio::fs::read(path.as_ref()).await?;
        let users = Self::parse(&content)?;
        tracing::debug!("Loaded {} users from {}", users.len(), path_str);

        Ok(Self {
            path: path_str,
            inner: InMemoryUserStore::from_users(users),
        })
    }

    fn parse(content: &[u8]) -> Result<Vec<User>> {
        let raw: serde_json::Value = serde_json::from_slice(content)?;
        let items = match raw {
            serde_json::Value::Array(items) => items,
            _ => {
                return Err(AppError::ProcessingError {
                    message: "Users file must contain a JSON array".to_string(),
                })
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<User>(item).map_err(|e| AppError::ProcessingError {
                    message: format!("Invalid user record at index {}: {}", index, e),
                })
            })
            .collect()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl UserStore for JsonFileUserStore {
    async fn find(&self, id: &str) -> Result<Option<User>> {
        self.inner.find(id).await
    }
}
