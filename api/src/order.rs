//! The order payload posted to the order service.

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::cart::CartItem;
use crate::form::CardDetails;
use crate::form::CheckoutForm;
use crate::form::PaymentMethod;

/// One line of an order, derived from a [CartItem].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            title: item.title.clone(),
            price: item.price_string(),
            description: item.description.clone(),
            category: item.category.clone(),
            image: item.image.clone(),
        }
    }
}

/// Details for whichever payment method is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaymentDetails {
    Card(CardDetails),
    #[serde(rename_all = "camelCase")]
    PayPal { paypal_email: String },
}

impl PaymentDetails {
    /// Selects the active branch of the form.
    pub fn from_form(form: &CheckoutForm) -> Self {
        match form.payment_method {
            PaymentMethod::CreditCard => Self::Card(form.card.clone()),
            PaymentMethod::PayPal => Self::PayPal {
                paypal_email: form.paypal_email.clone(),
            },
        }
    }
}

/// The JSON body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub email: String,
    pub order_date: String,
    pub items: Vec<OrderItem>,
    pub payment_method: PaymentMethod,
    pub payment_details: PaymentDetails,
}

impl OrderPayload {
    pub fn build(
        email: &str,
        order_date: DateTime<Utc>,
        cart: &[CartItem],
        form: &CheckoutForm,
    ) -> Self {
        Self {
            email: email.to_string(),
            order_date: order_date.to_rfc3339_opts(SecondsFormat::Millis, true),
            items: cart.iter().map(OrderItem::from).collect(),
            payment_method: form.payment_method,
            payment_details: PaymentDetails::from_form(form),
        }
    }
}
