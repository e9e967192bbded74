pub mod ticket;

pub use ticket::{NewReply, NewTicket, ServiceError, TicketDetail, TicketService};
