pub mod reply;
pub mod ticket;
