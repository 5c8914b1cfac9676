pub mod health;
pub mod wiki;
