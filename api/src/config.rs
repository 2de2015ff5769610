use std::env;
use std::time::Duration;

/// Base URL of the order service used when nothing else is configured.
pub const DEFAULT_ORDER_SERVICE_URL: &str = "https://epicbazaar.onrender.com";

/// How long the success animation plays before leaving checkout.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Where orders are sent and how checkout behaves after one is placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutConfig {
    order_service_url: String,
    redirect_delay: Duration,
}

impl CheckoutConfig {
    pub fn new(order_service_url: impl Into<String>, redirect_delay: Duration) -> Self {
        let url: String = order_service_url.into();
        Self {
            order_service_url: url.trim_end_matches('/').to_string(),
            redirect_delay,
        }
    }

    /// Builds the config from environment variables, falling back to values
    /// baked in at compile time and then to in-code defaults.
    ///
    /// # Environment Variables
    /// - `ORDER_SERVICE_URL`: base URL of the order service.
    /// - `ORDER_REDIRECT_DELAY_MS`: milliseconds to wait after a successful
    ///   order before redirecting.
    pub fn from_env() -> Self {
        let url = env::var("ORDER_SERVICE_URL")
            .ok()
            .or_else(|| option_env!("ORDER_SERVICE_URL").map(str::to_string))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ORDER_SERVICE_URL.to_string());

        let redirect_delay = env::var("ORDER_REDIRECT_DELAY_MS")
            .ok()
            .or_else(|| option_env!("ORDER_REDIRECT_DELAY_MS").map(str::to_string))
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REDIRECT_DELAY);

        Self::new(url, redirect_delay)
    }

    pub fn order_service_url(&self) -> &str {
        &self.order_service_url
    }

    /// Full URL of the order submission endpoint.
    pub fn orders_endpoint(&self) -> String {
        format!("{}/orders", self.order_service_url)
    }

    pub fn redirect_delay(&self) -> Duration {
        self.redirect_delay
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trims_trailing_slashes() {
        let config = CheckoutConfig::new("https://orders.example//", DEFAULT_REDIRECT_DELAY);
        assert_eq!(config.orders_endpoint(), "https://orders.example/orders");
    }

    #[test]
    fn keeps_the_given_delay() {
        let config = CheckoutConfig::new("http://localhost:1234", Duration::from_millis(5));
        assert_eq!(config.redirect_delay(), Duration::from_millis(5));
        assert_eq!(config.order_service_url(), "http://localhost:1234");
    }
}
