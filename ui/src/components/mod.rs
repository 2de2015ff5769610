//! Shared building blocks for the storefront screens.
pub mod empty_state;
pub mod modal;
pub mod order_placed_overlay;
pub mod pico;
pub mod sign_in_modal;
