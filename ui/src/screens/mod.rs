// This file makes the screen modules available to the rest of the application.

pub mod cart;
pub mod checkout;
pub mod orders;
