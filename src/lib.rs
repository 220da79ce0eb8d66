//! Client side transport and codecs for Ethereum style JSON-RPC nodes.
//!
//! `ethjson` holds the wire model, `ethutil` the payload codecs and
//! `rpcclient` the websocket connection client.

pub mod ethjson;
pub mod ethutil;
pub mod rpcclient;
