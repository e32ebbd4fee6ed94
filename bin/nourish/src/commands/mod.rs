pub mod admin;
pub mod auth;
pub mod cart;
pub mod menu;
pub mod order;
pub mod payment;
