//! Contract ABI capability.
//!
//! Call data for contract methods is produced by an external ABI engine. The
//! wire model only needs the two operations below; `CallMsg::contract_call`
//! and `Response::decode_output` are built on them.

/// Encodes contract method calls and decodes their outputs.
pub trait ContractAbi {
    /// Value type accepted and produced by the engine.
    type Token;
    type Error: std::error::Error + 'static;

    /// Encodes a call to `method` with `args`, selector included.
    fn encode(&self, method: &str, args: &[Self::Token]) -> Result<Vec<u8>, Self::Error>;

    /// Decodes the raw return data of `method`.
    fn decode(&self, method: &str, output: &[u8]) -> Result<Vec<Self::Token>, Self::Error>;
}
