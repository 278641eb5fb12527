pub mod auth_service;
pub mod candy_service;
pub mod customer_service;
pub mod duty_service;
pub mod sale_service;
