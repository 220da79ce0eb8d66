use {
    super::{client::Client, connection::RpcConn, error::RpcClientError},
    crate::{
        ethjson::{BlockNumber, CallMsg, EthCommand, Request, Response, StateOverrides},
        ethutil::Bytes,
    },
    primitive_types::{H160, H256, U256},
    serde::de::DeserializeOwned,
    serde_json::Value,
};

/// Generates clients command
macro_rules! command_generator {
    ($doc: tt, $name: ident, $output_type: ty, $decode: expr, $command: expr, $($fn_params:ident : $fn_type: ty),*) => {
        #[doc = $doc]
        pub async fn $name(&self, $($fn_params : $fn_type),*) -> Result<$output_type, RpcClientError> {
            let request = Request::from_command(&self.ids, 0, $command);

            let mut response: Response = self.send_and_receive(&request).await?;

            // Peer errors are returned before the result is decoded.
            if let Some(e) = response.error.take() {
                return Err(RpcClientError::Server(e));
            }

            ($decode)(response)
        }
    };
}

fn amount(response: Response) -> Result<U256, RpcClientError> {
    Ok(response.decode_uint256()?)
}

fn amounts(response: Response) -> Result<Vec<U256>, RpcClientError> {
    Ok(response.decode_uint256_slice()?)
}

/// Raw result, `null` when absent.
fn raw(response: Response) -> Result<Value, RpcClientError> {
    Ok(response.result.unwrap_or_default())
}

fn typed<T: DeserializeOwned>(response: Response) -> Result<T, RpcClientError> {
    serde_json::from_value(response.result.unwrap_or_default()).map_err(RpcClientError::Unmarshaller)
}

impl<C: RpcConn> Client<C> {
    command_generator!(
        "block_number returns the number of the most recent block.",
        block_number,
        U256,
        amount,
        EthCommand::GetBlockNumber,
    );

    command_generator!(
        "get_balance returns the wei balance of an account at the given block.",
        get_balance,
        U256,
        amount,
        EthCommand::GetBalance { address, block },
        address: H160,
        block: BlockNumber
    );

    command_generator!(
        "get_transaction_count returns the nonce of an account at the given block.",
        get_transaction_count,
        U256,
        amount,
        EthCommand::GetTransactionCount { address, block },
        address: H160,
        block: BlockNumber
    );

    command_generator!(
        "call_uint256 executes a message call, optionally against overridden
        contract storage, and decodes its return data as a single uint256.",
        call_uint256,
        U256,
        amount,
        EthCommand::Call { msg, block, overrides },
        msg: CallMsg,
        block: BlockNumber,
        overrides: Option<StateOverrides>
    );

    command_generator!(
        "multi_call_uint256s executes several message calls in one request and
        decodes the returned words.",
        multi_call_uint256s,
        Vec<U256>,
        amounts,
        EthCommand::MultiCall { msgs, block },
        msgs: Vec<CallMsg>,
        block: BlockNumber
    );

    command_generator!(
        "get_block_by_number returns the block at the given height, with full
        transactions when full_tx is set. Unknown blocks return null.",
        get_block_by_number,
        Value,
        raw,
        EthCommand::GetBlockByNumber { number, full_tx },
        number: u64,
        full_tx: bool
    );

    command_generator!(
        "get_transaction_by_hash returns the transaction with the given hash.",
        get_transaction_by_hash,
        Value,
        raw,
        EthCommand::GetTransactionByHash { hash },
        hash: H256
    );

    command_generator!(
        "get_transaction_receipt returns the receipt of a mined transaction.",
        get_transaction_receipt,
        Value,
        raw,
        EthCommand::GetTransactionReceipt { hash },
        hash: H256
    );

    command_generator!(
        "send_raw_transaction submits a signed transaction and returns its hash.",
        send_raw_transaction,
        H256,
        typed::<H256>,
        EthCommand::SendRawTransaction { tx },
        tx: Bytes
    );

    command_generator!(
        "send_raw_transactions submits a batch of signed transactions.",
        send_raw_transactions,
        Value,
        raw,
        EthCommand::SendRawTransactions { txs },
        txs: Vec<Bytes>
    );

    command_generator!(
        "gas_soldier asks the node to simulate a contract call from sender.",
        gas_soldier,
        Value,
        raw,
        EthCommand::GasSoldier { contract, sender, nonce, max_gas, key },
        contract: H160,
        sender: H160,
        nonce: String,
        max_gas: String,
        key: String
    );

    command_generator!(
        "get_target_tx returns the target transaction and its logs, skipping
        logs emitted by skip_contracts.",
        get_target_tx,
        Value,
        raw,
        EthCommand::GetTargetTx { arbt_hash, skip_contracts },
        arbt_hash: H256,
        skip_contracts: Vec<H160>
    );

    command_generator!(
        "get_pending_block_log returns the logs of the pending block.",
        get_pending_block_log,
        Value,
        raw,
        EthCommand::GetPendingBlockLog,
    );

    command_generator!(
        "get_accounts_data returns account data for each address.",
        get_accounts_data,
        Value,
        raw,
        EthCommand::GetAccountsData { addresses },
        addresses: Vec<H160>
    );

    command_generator!(
        "get_transaction_log simulates a message call and returns the logs it emits.",
        get_transaction_log,
        Value,
        raw,
        EthCommand::GetTransactionLog { msg, block },
        msg: CallMsg,
        block: BlockNumber
    );
}
