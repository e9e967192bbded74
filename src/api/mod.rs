mod docs;
mod health;
mod ticket;

pub use crate::api::docs::{openapi_json, ApiDoc};
pub use crate::api::health::health_check;
pub use crate::api::ticket::{add_reply, create_ticket, get_ticket, list_tickets, resolve_ticket};
