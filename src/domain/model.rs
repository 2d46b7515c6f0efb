use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

pub type UserId = String;

/// Opaque payload forwarded to the remote endpoint.
pub type Payload = serde_json::Value;

/// Whatever the remote endpoint answered with.
pub type SaveResponse = serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: UserId,
    /// Any JSON value; the record shape is not fixed.
    #[serde(default)]
    pub name: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl User {
    /// `name` 的文字形式：字串原樣回傳，其他 JSON 值序列化，null 視為沒有名字
    pub fn display_name(&self) -> Option<String> {
        match self.name.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn new(id: impl Into<UserId>, name: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.map(|n| serde_json::Value::String(n.to_string())),
            extra: HashMap::new(),
        }
    }
}

// 來源資料的 id 可能是字串或數字
fn id_from_string_or_number<'de, D>(deserializer: D) -> std::result::Result<UserId, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "id must be a string or number, got {}",
            other
        ))),
    }
}
