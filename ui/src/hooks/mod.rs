pub mod use_checkout;
