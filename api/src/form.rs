//! Checkout form state and the update commands that mutate it.

use serde::Deserialize;
use serde::Serialize;

/// Maximum number of characters accepted for a card verification code.
pub const CVC_MAX_LEN: usize = 4;

/// The payment method selected on the checkout form.
///
/// Serialized with the exact names the order service expects.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    PayPal,
}

impl PaymentMethod {
    /// The wire name, also used as the `<option>` value.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::PayPal => "PayPal",
        }
    }
}

/// The shipping inputs. Collected alongside payment details.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum ShippingField {
    FullName,
    StreetAddress,
    City,
    ZipCode,
    Email,
}

impl ShippingField {
    /// Stable input name, e.g. `streetAddress`.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::StreetAddress => "Street Address",
            Self::City => "City",
            Self::ZipCode => "Zip Code",
            Self::Email => "Email",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }
}

/// The credit card inputs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum CardField {
    CardNumber,
    ExpiryMonth,
    ExpiryYear,
    Cvc,
}

impl CardField {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CardNumber => "Card Number",
            Self::ExpiryMonth => "Expiry Month",
            Self::ExpiryYear => "Expiry Year",
            Self::Cvc => "CVC",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::CardNumber => "Enter your card number",
            Self::ExpiryMonth => "MM",
            Self::ExpiryYear => "YYYY",
            Self::Cvc => "CVC",
        }
    }

    /// Input length cap, if the field has one.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            Self::Cvc => Some(CVC_MAX_LEN),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingDetails {
    pub full_name: String,
    pub street_address: String,
    pub city: String,
    pub zip_code: String,
    pub email: String,
}

impl ShippingDetails {
    fn slot(&mut self, field: ShippingField) -> &mut String {
        match field {
            ShippingField::FullName => &mut self.full_name,
            ShippingField::StreetAddress => &mut self.street_address,
            ShippingField::City => &mut self.city,
            ShippingField::ZipCode => &mut self.zip_code,
            ShippingField::Email => &mut self.email,
        }
    }

    pub fn get(&self, field: ShippingField) -> &str {
        match field {
            ShippingField::FullName => &self.full_name,
            ShippingField::StreetAddress => &self.street_address,
            ShippingField::City => &self.city,
            ShippingField::ZipCode => &self.zip_code,
            ShippingField::Email => &self.email,
        }
    }
}

/// Card details as entered. Serialized verbatim as the card payment details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvc: String,
}

impl CardDetails {
    fn slot(&mut self, field: CardField) -> &mut String {
        match field {
            CardField::CardNumber => &mut self.card_number,
            CardField::ExpiryMonth => &mut self.expiry_month,
            CardField::ExpiryYear => &mut self.expiry_year,
            CardField::Cvc => &mut self.cvc,
        }
    }

    pub fn get(&self, field: CardField) -> &str {
        match field {
            CardField::CardNumber => &self.card_number,
            CardField::ExpiryMonth => &self.expiry_month,
            CardField::ExpiryYear => &self.expiry_year,
            CardField::Cvc => &self.cvc,
        }
    }
}

/// A single change to the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormUpdate {
    Shipping(ShippingField, String),
    Card(CardField, String),
    PaymentMethod(PaymentMethod),
    PaypalEmail(String),
}

/// All state held by the checkout form.
///
/// Both payment branches are kept in memory; only the one selected by
/// `payment_method` ends up in an order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub shipping: ShippingDetails,
    pub payment_method: PaymentMethod,
    pub card: CardDetails,
    pub paypal_email: String,
}

impl CheckoutForm {
    pub fn apply(&mut self, update: FormUpdate) {
        match update {
            FormUpdate::Shipping(field, value) => *self.shipping.slot(field) = value,
            FormUpdate::Card(field, value) => {
                let value = match field.max_len() {
                    Some(max) => truncate_chars(value, max),
                    None => value,
                };
                *self.card.slot(field) = value;
            }
            FormUpdate::PaymentMethod(method) => self.payment_method = method,
            FormUpdate::PaypalEmail(value) => self.paypal_email = value,
        }
    }
}

fn truncate_chars(mut value: String, max: usize) -> String {
    if let Some((idx, _)) = value.char_indices().nth(max) {
        value.truncate(idx);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn defaults_to_credit_card_with_empty_fields() {
        let form = CheckoutForm::default();
        assert_eq!(form.payment_method, PaymentMethod::CreditCard);
        assert!(form.card.cvc.is_empty());
        assert!(form.paypal_email.is_empty());
        assert!(ShippingField::iter().all(|f| form.shipping.get(f).is_empty()));
    }

    #[test]
    fn card_update_leaves_top_level_fields_alone() {
        let mut form = CheckoutForm::default();
        form.apply(FormUpdate::PaypalEmail("me@pay.example".to_string()));
        form.apply(FormUpdate::Shipping(ShippingField::Email, "ship@example.com".to_string()));
        form.apply(FormUpdate::Card(CardField::CardNumber, "4242424242424242".to_string()));

        assert_eq!(form.card.card_number, "4242424242424242");
        assert_eq!(form.paypal_email, "me@pay.example");
        assert_eq!(form.shipping.email, "ship@example.com");
    }

    #[test]
    fn cvc_is_capped_at_four_characters() {
        let mut form = CheckoutForm::default();
        form.apply(FormUpdate::Card(CardField::Cvc, "123456".to_string()));
        assert_eq!(form.card.cvc, "1234");

        form.apply(FormUpdate::Card(CardField::Cvc, "12".to_string()));
        assert_eq!(form.card.cvc, "12");

        // multi-byte input is cut on a character boundary
        form.apply(FormUpdate::Card(CardField::Cvc, "١٢٣٤٥".to_string()));
        assert_eq!(form.card.cvc.chars().count(), 4);
    }

    #[test]
    fn other_card_fields_are_not_capped() {
        let mut form = CheckoutForm::default();
        form.apply(FormUpdate::Card(CardField::ExpiryYear, "202899".to_string()));
        assert_eq!(form.card.expiry_year, "202899");
    }

    #[test]
    fn switching_method_keeps_both_branches() {
        let mut form = CheckoutForm::default();
        form.apply(FormUpdate::Card(CardField::CardNumber, "4111".to_string()));
        form.apply(FormUpdate::PaymentMethod(PaymentMethod::PayPal));
        form.apply(FormUpdate::PaypalEmail("p@example.com".to_string()));
        form.apply(FormUpdate::PaymentMethod(PaymentMethod::CreditCard));

        assert_eq!(form.card.card_number, "4111");
        assert_eq!(form.paypal_email, "p@example.com");
    }

    #[test]
    fn field_names_are_camel_case_and_distinct() {
        let names: Vec<&str> = ShippingField::iter()
            .map(|f| f.name())
            .chain(CardField::iter().map(|f| f.name()))
            .collect();
        assert_eq!(
            names,
            [
                "fullName",
                "streetAddress",
                "city",
                "zipCode",
                "email",
                "cardNumber",
                "expiryMonth",
                "expiryYear",
                "cvc"
            ]
        );
        assert_eq!(CardField::from_str("expiryMonth").unwrap(), CardField::ExpiryMonth);
    }

    #[test]
    fn payment_method_round_trips_its_name() {
        for method in PaymentMethod::iter() {
            assert_eq!(PaymentMethod::from_str(method.name()).unwrap(), method);
        }
        assert_eq!(
            serde_json::to_string(&PaymentMethod::PayPal).unwrap(),
            "\"PayPal\""
        );
    }
}
