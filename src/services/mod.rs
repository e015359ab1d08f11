pub mod chat;
pub mod ledger;
pub mod responder;
pub mod session;

pub use chat::ChatSession;
pub use ledger::{BookingCommand, BookingLedger, StayChange};
pub use session::{Session, SessionInfo, SessionStore, SharedSession};
