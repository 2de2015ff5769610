use api::CheckoutConfig;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub checkout_config: CheckoutConfig,
}

/// Immutable, app-wide settings shared through the component tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(checkout_config: CheckoutConfig) -> Self {
        Self(Arc::new(AppStateData { checkout_config }))
    }
}
