use {
    super::{abi::ContractAbi, cmd_types::EthCommand, request_id::RequestIdCounter},
    crate::ethutil::{
        hexutil::{decode_hex, Bytes, Quantity},
        uint256::{decode_uint256, decode_uint256_slice, Uint256, Uint256Slice},
        CodecError,
    },
    primitive_types::{H160, U256},
    serde::{Deserialize, Deserializer, Serialize},
    std::{collections::BTreeMap, fmt},
};

/// JSON-RPC protocol version sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Implements JSON RPC request structure to server.
///
/// `params` is omitted from the wire when `None`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Request<P = Vec<serde_json::Value>> {
    pub jsonrpc: &'static str,
    pub id: i64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<P>,
}

impl<P> Request<P> {
    /// Builds a request, advancing `ids` once. An `id` of 0 takes the
    /// advanced counter value, any other id is kept as given.
    pub fn new(
        ids: &RequestIdCounter,
        id: i64,
        method: impl Into<String>,
        params: Option<P>,
    ) -> Self {
        let next = ids.advance();

        Request {
            jsonrpc: JSONRPC_VERSION,
            id: if id == 0 { next } else { id },
            method: method.into(),
            params,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }
}

impl Request<EthCommand> {
    /// Builds a request for a typed command.
    pub fn from_command(ids: &RequestIdCounter, id: i64, command: EthCommand) -> Self {
        let method = command.method();
        let params = if command.has_params() {
            Some(command)
        } else {
            None
        };

        Request::new(ids, id, method, params)
    }
}

impl<P: Serialize> fmt::Display for Request<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = match &self.params {
            Some(params) => serde_json::to_string(params).map_err(|_| fmt::Error)?,
            None => "null".to_string(),
        };

        write!(
            f,
            "Request{{ID: {}, Method: {}, Params: {}}}",
            self.id, self.method, params
        )
    }
}

/// Implements JSON RPC response structure from server.
///
/// `result` and `error` may both be absent.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
pub struct Response {
    #[serde(default, deserialize_with = "nullable_id")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl Response {
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Decodes the result as a single uint256. A missing result is zero.
    pub fn decode_uint256(&self) -> Result<U256, CodecError> {
        match &self.result {
            Some(result) => decode_uint256(result),
            None => Ok(U256::zero()),
        }
    }

    /// Decodes the result as a list of uint256. A missing result is empty.
    pub fn decode_uint256_slice(&self) -> Result<Vec<U256>, CodecError> {
        match &self.result {
            Some(result) => decode_uint256_slice(result),
            None => Ok(Vec::new()),
        }
    }

    /// Hex decodes the result and hands it to the contract ABI decoder.
    pub fn decode_output<A: ContractAbi>(
        &self,
        abi: &A,
        method: &str,
    ) -> Result<Vec<A::Token>, DecodeOutputError<A::Error>> {
        let raw = match &self.result {
            Some(serde_json::Value::String(s)) => decode_hex(s).map_err(DecodeOutputError::Codec)?,

            Some(other) => {
                return Err(DecodeOutputError::Codec(CodecError::UnexpectedShape {
                    expected: "hex string",
                    found: other.to_string(),
                }))
            }

            None => Vec::new(),
        };

        abi.decode(method, &raw).map_err(DecodeOutputError::Abi)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = match &self.result {
            Some(result) => result.to_string(),
            None => String::new(),
        };

        write!(
            f,
            "Response{{ID: {}, Result: {}, Error: {:?}}}",
            self.id, result, self.error
        )
    }
}

/// Errors decoding a call result through a contract ABI.
#[derive(thiserror::Error, Debug)]
pub enum DecodeOutputError<E: std::error::Error + 'static> {
    #[error("call output is not hex: {0}")]
    Codec(CodecError),
    #[error("abi decode error: {0}")]
    Abi(E),
}

fn nullable_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response whose result is a single uint256.
#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
pub struct AmountResponse {
    #[serde(default, deserialize_with = "nullable_id")]
    pub id: i64,
    #[serde(default)]
    pub result: Uint256,
    #[serde(default)]
    pub error: Option<RpcError>,
}

/// Response whose result is a list of uint256 in either wire shape.
#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
pub struct AmountsResponse {
    #[serde(default, deserialize_with = "nullable_id")]
    pub id: i64,
    #[serde(default)]
    pub result: Uint256Slice,
    #[serde(default)]
    pub error: Option<RpcError>,
}

/// Error returned by server.
#[derive(thiserror::Error, Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Message call parameters for `eth_call` and its node extensions.
///
/// Unset fields are left off the wire. A zero gas price and an absent one
/// are different calls to the node.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CallMsg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<H160>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<H160>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_fee_cap: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_tip_cap: Option<U256>,
    #[serde(default, skip_serializing_if = "Bytes::is_empty")]
    pub data: Bytes,
}

impl CallMsg {
    /// Builds a call to `method` on the contract at `to`, with call data
    /// produced by the contract ABI encoder.
    pub fn contract_call<A: ContractAbi>(
        abi: &A,
        to: H160,
        method: &str,
        args: &[A::Token],
    ) -> Result<CallMsg, A::Error> {
        let data = abi.encode(method, args)?;

        Ok(CallMsg {
            to: Some(to),
            data: Bytes(data),
            ..Default::default()
        })
    }
}

/// Storage overrides for one contract, applied only for the duration of a call.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StateOverride {
    /// Storage key to 32 byte word, both `0x` hex.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub state_diff: BTreeMap<String, String>,
}

/// Per contract state overrides, the third positional `eth_call` parameter.
pub type StateOverrides = BTreeMap<H160, StateOverride>;
