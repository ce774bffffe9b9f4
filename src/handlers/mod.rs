pub mod chat;
pub mod checkin;
pub mod health;
