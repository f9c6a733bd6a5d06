pub mod aggregate;

pub use aggregate::{Ticket, TicketComment, TicketPriority, TicketStatus};
