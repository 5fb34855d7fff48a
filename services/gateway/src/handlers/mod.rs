pub mod health;
pub mod casino;
