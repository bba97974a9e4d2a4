//! Wallet request interpretation backend
//!
//! Decodes signing and transaction requests arriving from dapp sessions
//! into normalized, decimal-accurate display records for human approval:
//! who is paying whom, what asset, how much, and what the raw call data
//! means when it is not a plain value transfer. The session transport,
//! broadcast pipeline, price feed, and approval UI are separate services
//! that consume this crate through [`interpret_request`].

pub mod assets;
pub mod config;
pub mod currencies;
pub mod interpreter;
pub mod models;

pub use assets::{Asset, AssetPrice, AssetRegistry};
pub use config::Config;
pub use interpreter::interpret_request;
pub use models::{
    MessageDisplay, RawCallDisplay, RequestDisplay, RequestId, SignRequest,
    TransactionDisplay, TransactionPayload,
};
