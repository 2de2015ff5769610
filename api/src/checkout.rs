//! Order submission for the checkout screen.
//!
//! [Checkout] owns the collaborators needed to place an order: the order
//! gateway, the identity of the signed-in user and a navigator. The form and
//! cart stay with the caller and are only borrowed for the duration of a
//! submit, so a failed submission can never modify them.

use std::cell::Cell;
use std::time::Duration;

use chrono::DateTime;
use chrono::Utc;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::cart::CartItem;
use crate::compat;
use crate::config::CheckoutConfig;
use crate::error::CheckoutError;
use crate::form::CheckoutForm;
use crate::gateway::OrderGateway;
use crate::order::OrderPayload;

/// Path of the orders view, visited after an order is accepted.
pub const ORDERS_PATH: &str = "/orders";

/// The minimal profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub email: String,
}

impl CurrentUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Supplies the currently signed-in user, if any.
pub trait IdentityProvider {
    fn current_user(&self) -> Option<CurrentUser>;
}

impl IdentityProvider for Option<CurrentUser> {
    fn current_user(&self) -> Option<CurrentUser> {
        self.clone()
    }
}

/// Moves the app to another view.
pub trait Navigate {
    /// Goes to `path`. With `replace` the current history entry is replaced
    /// so going back does not return here.
    fn navigate(&self, path: &str, replace: bool);
}

/// Marks a submission as outstanding until dropped.
#[derive(Debug)]
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn begin(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Places orders built from a checkout form.
pub struct Checkout<G, I, N> {
    gateway: G,
    identity: I,
    navigator: N,
    config: CheckoutConfig,
    in_flight: Cell<bool>,
}

impl<G, I, N> Checkout<G, I, N>
where
    G: OrderGateway,
    I: IdentityProvider,
    N: Navigate,
{
    pub fn new(gateway: G, identity: I, navigator: N, config: CheckoutConfig) -> Self {
        Self {
            gateway,
            identity,
            navigator,
            config,
            in_flight: Cell::new(false),
        }
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    /// True from the moment an order is sent until it fails, or until the
    /// redirect after a successful order has happened.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    /// Submits the form and cart as one order, stamped with the current time.
    pub async fn place_order(
        &self,
        form: &CheckoutForm,
        cart: &[CartItem],
    ) -> Result<OrderPlaced<'_, N>, CheckoutError> {
        self.place_order_at(form, cart, Utc::now()).await
    }

    /// As [Self::place_order], with an explicit order date.
    pub async fn place_order_at(
        &self,
        form: &CheckoutForm,
        cart: &[CartItem],
        order_date: DateTime<Utc>,
    ) -> Result<OrderPlaced<'_, N>, CheckoutError> {
        let email = match self.identity.current_user() {
            Some(user) if !user.email.is_empty() => user.email,
            _ => {
                error!("No user logged in");
                return Err(CheckoutError::MissingIdentity);
            }
        };

        let Some(submission) = InFlight::begin(&self.in_flight) else {
            warn!("Ignoring order submission while another is in progress");
            return Err(CheckoutError::SubmissionInFlight);
        };

        let payload = OrderPayload::build(&email, order_date, cart, form);
        info!(
            "Submitting order for {} with {} item(s) via {:?}",
            payload.email,
            payload.items.len(),
            payload.payment_method
        );

        let resp = match self.gateway.post_order(&payload).await {
            Ok(resp) => resp,
            Err(e) => {
                error!("Order submission error: {}", e);
                return Err(e.into());
            }
        };

        if !resp.is_accepted() {
            error!("Failed to submit order: status {}: {}", resp.status, resp.body);
            let body = (!resp.body.is_empty()).then_some(resp.body);
            return Err(CheckoutError::Rejected {
                status: resp.status,
                body,
            });
        }

        info!("Order accepted with status {}", resp.status);
        Ok(OrderPlaced {
            navigator: &self.navigator,
            redirect_delay: self.config.redirect_delay(),
            status: resp.status,
            _submission: submission,
        })
    }
}

/// An accepted order, waiting to leave the checkout view.
///
/// Further submissions stay blocked until this is redirected or dropped.
#[must_use = "an accepted order should be followed by `redirect`"]
#[derive(Debug)]
pub struct OrderPlaced<'a, N: Navigate> {
    navigator: &'a N,
    redirect_delay: Duration,
    status: u16,
    _submission: InFlight<'a>,
}

impl<N: Navigate> OrderPlaced<'_, N> {
    /// HTTP status the order service accepted the order with.
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn redirect_delay(&self) -> Duration {
        self.redirect_delay
    }

    /// Waits out the confirmation, then replaces the checkout view with the
    /// orders view.
    pub async fn redirect(self) {
        compat::sleep(self.redirect_delay).await;
        self.navigator.navigate(ORDERS_PATH, true);
    }
}
