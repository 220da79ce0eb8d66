//! Houses all JSON command types

use {
    super::{
        commands,
        types::{CallMsg, StateOverrides},
    },
    crate::ethutil::hexutil::{to_checksum_address, Bytes},
    primitive_types::{H160, H256},
    serde::{ser::SerializeSeq, Serialize, Serializer},
    std::fmt,
};

/// Block selector accepted by block parameterised methods. Defaults to
/// `latest`; numbers go on the wire as `0x` hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNumber {
    Tag(String),
    Number(u64),
}

impl BlockNumber {
    pub fn latest() -> Self {
        BlockNumber::Tag(commands::BLOCK_TAG_LATEST.to_string())
    }

    pub fn pending() -> Self {
        BlockNumber::Tag(commands::BLOCK_TAG_PENDING.to_string())
    }
}

impl Default for BlockNumber {
    fn default() -> Self {
        BlockNumber::latest()
    }
}

impl From<u64> for BlockNumber {
    fn from(number: u64) -> Self {
        BlockNumber::Number(number)
    }
}

impl From<&str> for BlockNumber {
    fn from(tag: &str) -> Self {
        BlockNumber::Tag(tag.to_string())
    }
}

impl From<String> for BlockNumber {
    fn from(tag: String) -> Self {
        BlockNumber::Tag(tag)
    }
}

impl<T: Into<BlockNumber>> From<Option<T>> for BlockNumber {
    fn from(block: Option<T>) -> Self {
        block.map(Into::into).unwrap_or_default()
    }
}

impl fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BlockNumber::Tag(ref tag) => f.write_str(tag),
            BlockNumber::Number(number) => write!(f, "0x{:x}", number),
        }
    }
}

impl Serialize for BlockNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One variant per supported RPC method. Serializes to the method's
/// positional params array.
#[derive(Debug, Clone, PartialEq)]
pub enum EthCommand {
    /// `eth_call`, with state overrides as a third param when present.
    Call {
        msg: CallMsg,
        block: BlockNumber,
        overrides: Option<StateOverrides>,
    },
    /// `eth_gasSoldier`.
    GasSoldier {
        contract: H160,
        sender: H160,
        nonce: String,
        max_gas: String,
        key: String,
    },
    /// `eth_getTargetTx`, replies with the target transaction and its logs.
    GetTargetTx {
        arbt_hash: H256,
        skip_contracts: Vec<H160>,
    },
    /// `eth_getPengingBlockLog`, always queried at `pending`.
    GetPendingBlockLog,
    /// `eth_getAccountsData`.
    GetAccountsData { addresses: Vec<H160> },
    /// `eth_multiCall`, replies with the result of the last message.
    MultiCall { msgs: Vec<CallMsg>, block: BlockNumber },
    /// `eth_getTransactionLog`.
    GetTransactionLog { msg: CallMsg, block: BlockNumber },
    /// `eth_sendRawTransactions`.
    SendRawTransactions { txs: Vec<Bytes> },
    /// `eth_sendRawTransaction`.
    SendRawTransaction { tx: Bytes },
    /// `eth_getTransactionCount`.
    GetTransactionCount { address: H160, block: BlockNumber },
    /// `eth_getBalance`.
    GetBalance { address: H160, block: BlockNumber },
    /// `eth_blockNumber`, sent without params.
    GetBlockNumber,
    /// `eth_getBlockByNumber`.
    GetBlockByNumber { number: u64, full_tx: bool },
    /// `eth_getTransactionByHash`.
    GetTransactionByHash { hash: H256 },
    /// `eth_getTransactionReceipt`.
    GetTransactionReceipt { hash: H256 },
}

impl EthCommand {
    /// Wire method name.
    pub fn method(&self) -> &'static str {
        match self {
            EthCommand::Call { .. } => commands::METHOD_CALL,
            EthCommand::GasSoldier { .. } => commands::METHOD_GAS_SOLDIER,
            EthCommand::GetTargetTx { .. } => commands::METHOD_GET_TARGET_TX,
            EthCommand::GetPendingBlockLog => commands::METHOD_GET_PENDING_BLOCK_LOG,
            EthCommand::GetAccountsData { .. } => commands::METHOD_GET_ACCOUNTS_DATA,
            EthCommand::MultiCall { .. } => commands::METHOD_MULTI_CALL,
            EthCommand::GetTransactionLog { .. } => commands::METHOD_GET_TRANSACTION_LOG,
            EthCommand::SendRawTransactions { .. } => commands::METHOD_SEND_RAW_TRANSACTIONS,
            EthCommand::SendRawTransaction { .. } => commands::METHOD_SEND_RAW_TRANSACTION,
            EthCommand::GetTransactionCount { .. } => commands::METHOD_GET_TRANSACTION_COUNT,
            EthCommand::GetBalance { .. } => commands::METHOD_GET_BALANCE,
            EthCommand::GetBlockNumber => commands::METHOD_BLOCK_NUMBER,
            EthCommand::GetBlockByNumber { .. } => commands::METHOD_GET_BLOCK_BY_NUMBER,
            EthCommand::GetTransactionByHash { .. } => commands::METHOD_GET_TRANSACTION_BY_HASH,
            EthCommand::GetTransactionReceipt { .. } => commands::METHOD_GET_TRANSACTION_RECEIPT,
        }
    }

    /// Whether the request carries a params member at all.
    pub fn has_params(&self) -> bool {
        !matches!(self, EthCommand::GetBlockNumber)
    }
}

impl Serialize for EthCommand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            EthCommand::Call {
                msg,
                block,
                overrides: Some(overrides),
            } => (msg, block, overrides).serialize(serializer),

            EthCommand::Call {
                msg,
                block,
                overrides: None,
            } => (msg, block).serialize(serializer),

            EthCommand::GasSoldier {
                contract,
                sender,
                nonce,
                max_gas,
                key,
            } => (contract, sender, nonce, max_gas, key).serialize(serializer),

            EthCommand::GetTargetTx {
                arbt_hash,
                skip_contracts,
            } => (arbt_hash, skip_contracts).serialize(serializer),

            EthCommand::GetPendingBlockLog => {
                (commands::BLOCK_TAG_PENDING,).serialize(serializer)
            }

            EthCommand::GetAccountsData { addresses } => (addresses,).serialize(serializer),

            EthCommand::MultiCall { msgs, block } => (msgs, block).serialize(serializer),

            EthCommand::GetTransactionLog { msg, block } => (msg, block).serialize(serializer),

            EthCommand::SendRawTransactions { txs } => (txs,).serialize(serializer),

            EthCommand::SendRawTransaction { tx } => (tx,).serialize(serializer),

            EthCommand::GetTransactionCount { address, block }
            | EthCommand::GetBalance { address, block } => {
                (to_checksum_address(address), block).serialize(serializer)
            }

            EthCommand::GetBlockNumber => serializer.serialize_seq(Some(0))?.end(),

            EthCommand::GetBlockByNumber { number, full_tx } => {
                (BlockNumber::Number(*number), full_tx).serialize(serializer)
            }

            EthCommand::GetTransactionByHash { hash }
            | EthCommand::GetTransactionReceipt { hash } => (hash,).serialize(serializer),
        }
    }
}
