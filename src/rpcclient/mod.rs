#![cfg(feature = "rpcclient")]
//! Websocket JSON-RPC client.
//! Holds one connection to an Ethereum node and tracks requests sent but not yet received.

pub mod client;
pub mod connection;
pub(crate) mod constants;
pub mod error;
mod eth_command;
