use bytes::Bytes;
use http_body_util::Full;

#[inline]
pub fn empty_body() -> Full<Bytes> {
    Full::new(Bytes::new())
}

#[inline]
pub fn byte_body<B: Into<Bytes>>(bytes: B) -> Full<Bytes> {
    Full::new(bytes.into())
}

pub fn json_body<T: serde::Serialize>(value: &T) -> anyhow::Result<Full<Bytes>> {
    let bytes = serde_json::to_vec(value)?;
    Ok(byte_body(bytes))
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl CreateUserRequest {
    #[must_use]
    pub fn sample() -> Self {
        Self {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
}

impl UpdateUserRequest {
    #[must_use]
    pub fn sample() -> Self {
        Self {
            name: "Updated User".to_string(),
            email: "updated@example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl UserResponse {
    #[must_use]
    pub fn sample(id: u64) -> Self {
        Self {
            id,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price_cents: u64,
}

impl ProductResponse {
    #[must_use]
    pub fn sample(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Product {id}"),
            price_cents: 1999,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OrderResponse {
    pub id: String,
    pub user_id: u64,
}

impl OrderResponse {
    #[must_use]
    pub fn sample(id: &str, user_id: u64) -> Self {
        Self {
            id: id.to_string(),
            user_id,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_matches_fixed_literal() {
        let value = serde_json::to_value(CreateUserRequest::sample()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Test User", "email": "test@example.com"})
        );
    }

    #[test]
    fn update_payload_matches_fixed_literal() {
        let value = serde_json::to_value(UpdateUserRequest::sample()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Updated User", "email": "updated@example.com"})
        );
    }
}
