//! The order service seam and its HTTP implementation.

use dioxus_logger::tracing::warn;

use crate::config::CheckoutConfig;
use crate::error::OrderError;
use crate::order::OrderPayload;

/// Whatever the order service answered, before success is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderResponse {
    pub status: u16,
    pub body: String,
}

impl OrderResponse {
    /// Only 200 and 201 count as an accepted order.
    pub fn is_accepted(&self) -> bool {
        matches!(self.status, 200 | 201)
    }
}

/// A trait for any service that can receive orders.
pub trait OrderGateway {
    /// Sends one order. `Err` means the service could not be reached at all;
    /// any HTTP status, successful or not, comes back as `Ok`.
    async fn post_order(&self, payload: &OrderPayload) -> Result<OrderResponse, OrderError>;
}

/// Posts orders as JSON to `{base}/orders`.
#[derive(Clone, Debug)]
pub struct HttpOrderGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpOrderGateway {
    pub fn new(config: &CheckoutConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.orders_endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl OrderGateway for HttpOrderGateway {
    async fn post_order(&self, payload: &OrderPayload) -> Result<OrderResponse, OrderError> {
        let body = serde_json::to_vec(payload)?;

        let resp = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = body_or_empty(status, resp.text().await);

        Ok(OrderResponse { status, body })
    }
}

/// The response body, or an empty one if it could not be read. The status
/// alone still decides whether the order was accepted.
fn body_or_empty<E: std::fmt::Display>(status: u16, read: Result<String, E>) -> String {
    match read {
        Ok(body) => body,
        Err(e) => {
            warn!("Could not read order response body (status {}): {}", status, e);
            String::new()
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::config::DEFAULT_REDIRECT_DELAY;
    use crate::form::CheckoutForm;
    use chrono::Utc;
    use mockito::Matcher;
    use serde_json::json;

    fn payload() -> OrderPayload {
        OrderPayload::build("me@example.com", Utc::now(), &[], &CheckoutForm::default())
    }

    #[tokio::test]
    async fn posts_json_to_orders_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/orders")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "email": "me@example.com",
                "items": [],
                "paymentMethod": "CreditCard",
            })))
            .with_status(201)
            .with_body(r#"{"id":"abc"}"#)
            .create_async()
            .await;

        let config = CheckoutConfig::new(server.url(), DEFAULT_REDIRECT_DELAY);
        let gateway = HttpOrderGateway::new(&config);
        let resp = gateway.post_order(&payload()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(resp.status, 201);
        assert_eq!(resp.body, r#"{"id":"abc"}"#);
        assert!(resp.is_accepted());
    }

    #[tokio::test]
    async fn error_status_is_returned_not_raised() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/orders")
            .with_status(500)
            .with_body("database unavailable")
            .create_async()
            .await;

        let config = CheckoutConfig::new(server.url(), DEFAULT_REDIRECT_DELAY);
        let resp = HttpOrderGateway::new(&config)
            .post_order(&payload())
            .await
            .unwrap();

        assert_eq!(resp.status, 500);
        assert_eq!(resp.body, "database unavailable");
        assert!(!resp.is_accepted());
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        let config = CheckoutConfig::new("http://127.0.0.1:1", DEFAULT_REDIRECT_DELAY);
        let result = HttpOrderGateway::new(&config).post_order(&payload()).await;
        assert!(matches!(result, Err(OrderError::Http(_))));
    }

    #[test]
    fn unreadable_body_falls_back_to_empty() {
        assert_eq!(body_or_empty(500, Err("connection reset")), "");
        assert_eq!(body_or_empty::<&str>(201, Ok("{}".to_string())), "{}");
    }

    #[test]
    fn only_200_and_201_are_accepted() {
        for (status, ok) in [(200, true), (201, true), (202, false), (204, false), (400, false)] {
            let resp = OrderResponse {
                status,
                body: String::new(),
            };
            assert_eq!(resp.is_accepted(), ok, "status {status}");
        }
    }
}
