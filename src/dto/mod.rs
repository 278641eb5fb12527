pub mod auth;
pub mod candies;
pub mod customers;
pub mod duties;
pub mod sales;
