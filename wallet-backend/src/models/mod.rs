pub mod display;
pub mod request;

pub use display::{MessageDisplay, RawCallDisplay, RequestDisplay, TransactionDisplay};
pub use request::{RequestId, SignRequest, TransactionPayload};
