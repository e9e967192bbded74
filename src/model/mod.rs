pub mod global_error;
pub mod ticket;
