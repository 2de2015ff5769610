//! This crate contains the storefront's checkout logic, shared by every
//! platform the UI runs on.

pub mod cart;
pub mod checkout;
pub mod compat;
pub mod config;
pub mod error;
pub mod form;
pub mod gateway;
pub mod order;

pub use cart::CartItem;
pub use cart::NavigationState;
pub use checkout::Checkout;
pub use checkout::CurrentUser;
pub use checkout::IdentityProvider;
pub use checkout::Navigate;
pub use checkout::OrderPlaced;
pub use checkout::ORDERS_PATH;
pub use config::CheckoutConfig;
pub use error::CheckoutError;
pub use error::OrderError;
pub use form::CheckoutForm;
pub use form::FormUpdate;
pub use form::PaymentMethod;
pub use gateway::HttpOrderGateway;
pub use gateway::OrderGateway;
pub use order::OrderPayload;
