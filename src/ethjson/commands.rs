//! RPC method names.

/// Executes a message call without creating a transaction.
pub(crate) const METHOD_CALL: &str = "eth_call";
/// Node extension probing the gas a contract interaction needs.
pub(crate) const METHOD_GAS_SOLDIER: &str = "eth_gasSoldier";
/// Node extension returning the target transaction and logs of an arbitrage transaction.
pub(crate) const METHOD_GET_TARGET_TX: &str = "eth_getTargetTx";
/// Node extension returning the logs of the pending block. The misspelling is the node's.
pub(crate) const METHOD_GET_PENDING_BLOCK_LOG: &str = "eth_getPengingBlockLog";
/// Node extension returning nonce, pending nonce and balance for several accounts.
pub(crate) const METHOD_GET_ACCOUNTS_DATA: &str = "eth_getAccountsData";
/// Node extension executing several calls in sequence, returning the last result.
pub(crate) const METHOD_MULTI_CALL: &str = "eth_multiCall";
/// Node extension returning the logs an unmined transaction would emit.
pub(crate) const METHOD_GET_TRANSACTION_LOG: &str = "eth_getTransactionLog";
/// Node extension broadcasting several raw transactions to connected peers.
pub(crate) const METHOD_SEND_RAW_TRANSACTIONS: &str = "eth_sendRawTransactions";
/// Submits a signed raw transaction.
pub(crate) const METHOD_SEND_RAW_TRANSACTION: &str = "eth_sendRawTransaction";

/// Returns the nonce of an account.
pub(crate) const METHOD_GET_TRANSACTION_COUNT: &str = "eth_getTransactionCount";
/// Returns the balance of an account.
pub(crate) const METHOD_GET_BALANCE: &str = "eth_getBalance";
/// Returns the number of the most recent block.
pub(crate) const METHOD_BLOCK_NUMBER: &str = "eth_blockNumber";
/// Returns a block by number.
pub(crate) const METHOD_GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";
/// Returns a transaction by hash.
pub(crate) const METHOD_GET_TRANSACTION_BY_HASH: &str = "eth_getTransactionByHash";
/// Returns the receipt of a mined transaction.
pub(crate) const METHOD_GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";

/// Block tag selecting the pending block.
pub(crate) const BLOCK_TAG_PENDING: &str = "pending";
/// Block tag selecting the latest block.
pub(crate) const BLOCK_TAG_LATEST: &str = "latest";
