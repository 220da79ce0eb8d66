//! Ethereum JSON-RPC wire model.
//! Request, response and error envelopes plus typed command parameters.

pub mod abi;
pub mod cmd_types;
pub(crate) mod commands;
pub mod request_id;
pub mod types;

pub use abi::ContractAbi;
pub use cmd_types::{BlockNumber, EthCommand};
pub use request_id::RequestIdCounter;
pub use types::{
    AmountResponse, AmountsResponse, CallMsg, DecodeOutputError, Request, Response, RpcError, StateOverride,
    StateOverrides,
};
