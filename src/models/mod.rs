pub mod chat;
pub mod checkin;
