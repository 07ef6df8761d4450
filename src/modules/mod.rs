pub mod health;
pub mod products;
pub mod transactions;
pub mod users;
