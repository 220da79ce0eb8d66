use {
    super::{
        connection::{ConnConfig, RpcConn, Websocket},
        constants,
        error::RpcClientError,
    },
    crate::ethjson::{Request, RequestIdCounter},
    futures_util::{
        sink::SinkExt,
        stream::{SplitSink, SplitStream, StreamExt},
    },
    log::{debug, info, trace, warn},
    serde::{de::DeserializeOwned, Serialize},
    std::sync::{
        atomic::{AtomicI32, Ordering},
        Arc,
    },
    tokio::sync::{watch, Mutex, RwLock},
    tokio_tungstenite::tungstenite::Message,
};

/// Creates a new RPC client based on the provided connection configuration
/// details. The websocket is dialed immediately unless
/// `disable_connect_on_new` is set, in which case `connect` must be called.
pub async fn new<C: RpcConn>(config: C) -> Result<Client<C>, RpcClientError> {
    with_id_counter(config, Arc::new(RequestIdCounter::new())).await
}

/// Creates a new RPC client whose typed commands draw request ids from `ids`.
pub async fn with_id_counter<C: RpcConn>(
    config: C,
    ids: Arc<RequestIdCounter>,
) -> Result<Client<C>, RpcClientError> {
    let client = Client {
        configuration: config,
        connection: RwLock::new(None),
        pending: AtomicI32::new(0),
        ids,
    };

    if !client.configuration.disable_connect_on_new() {
        client.connect().await?;
    }

    Ok(client)
}

/// Connects to `url` with the default configuration.
pub async fn dial(url: impl Into<String>) -> Result<Client, RpcClientError> {
    new(ConnConfig::with_url(url)).await
}

/// Represents an Ethereum websocket RPC client holding a single connection.
///
/// Requests and responses are not correlated by the client: a `receive`
/// returns the next frame read, whichever request it answers. Callers
/// pairing a `send` with its `receive` across tasks must serialize those
/// pairs themselves. The pending counter tracks frames sent minus frames
/// received and is the only signal of a desynchronized stream, see
/// `check_and_reopen_connection`.
pub struct Client<C: RpcConn = ConnConfig> {
    /// Holds the connection configuration associated with the client.
    configuration: C,

    /// Websocket held by the client, `None` when disconnected.
    connection: RwLock<Option<Arc<Connection>>>,

    /// Requests sent without a matching receive.
    pending: AtomicI32,

    /// Id source for typed commands.
    pub(super) ids: Arc<RequestIdCounter>,
}

/// One dialed websocket. Each half sits behind its own lock so whole
/// frames are written and read.
struct Connection {
    writer: Mutex<SplitSink<Websocket, Message>>,
    reader: Mutex<SplitStream<Websocket>>,
    /// Set once the connection is closed, waking blocked readers.
    closed: watch::Sender<bool>,
}

impl Connection {
    fn new(reader: SplitStream<Websocket>, writer: SplitSink<Websocket, Message>) -> Self {
        let (closed, _) = watch::channel(false);

        Connection {
            writer: Mutex::new(writer),
            reader: Mutex::new(reader),
            closed,
        }
    }

    /// Signals blocked readers and sends a close frame to the server.
    async fn shutdown(&self) {
        self.closed.send_replace(true);

        let mut writer = self.writer.lock().await;

        match tokio::time::timeout(constants::CLOSE_TIMEOUT, writer.close()).await {
            Ok(Ok(_)) => debug!("Websocket close message sent successfully to server"),

            Ok(Err(e)) => debug!("Error sending close message to websocket, error: {}", e),

            Err(_) => warn!("Timed out sending close message to websocket"),
        }
    }
}

/// Resolves once `closed` is set or its sender is gone.
async fn wait_closed(closed: &mut watch::Receiver<bool>) {
    loop {
        let is_closed = *closed.borrow_and_update();

        if is_closed || closed.changed().await.is_err() {
            return;
        }
    }
}

impl<C: RpcConn> Client<C> {
    /// Establishes the websocket connection. This is necessary when a
    /// client was created with `disable_connect_on_new` set, or after `close`.
    ///
    /// Errors with `WebsocketAlreadyConnected` if a connection is held. On a
    /// failed dial the client stays disconnected.
    pub async fn connect(&self) -> Result<(), RpcClientError> {
        let mut connection = self.connection.write().await;

        if connection.is_some() {
            return Err(RpcClientError::WebsocketAlreadyConnected);
        }

        info!("Dialing RPC using websocket to {}", self.configuration.url());
        let (reader, writer) = self.configuration.ws_split_stream().await?;

        *connection = Some(Arc::new(Connection::new(reader, writer)));
        self.pending.store(0, Ordering::SeqCst);

        info!("Established connection to RPC server {}", self.configuration.url());
        Ok(())
    }

    /// Serializes `request` and writes it as a single text frame. The
    /// pending counter is incremented only once the write succeeds.
    pub async fn send<P: Serialize>(&self, request: &Request<P>) -> Result<(), RpcClientError> {
        let connection = self.current_connection().await?;

        let marshalled = match serde_json::to_string(request) {
            Ok(marshalled) => marshalled,

            Err(e) => {
                warn!("Error marshalling request {}, error: {}", request.id, e);
                return Err(RpcClientError::Marshaller(e));
            }
        };

        let mut writer = connection.writer.lock().await;

        if let Err(e) = writer.send(Message::Text(marshalled)).await {
            warn!("Error sending request {} to websocket, error: {}", request.id, e);
            return Err(RpcClientError::WebsocketWrite(e));
        }

        self.pending.fetch_add(1, Ordering::SeqCst);
        trace!("Sent request {} method {}", request.id, request.method);

        Ok(())
    }

    /// Reads the next data frame and deserializes it into `R`.
    ///
    /// The pending counter is decremented as soon as a data frame is read,
    /// before deserializing, so a malformed frame still consumes a pending
    /// slot. Ping and pong frames are skipped. A close frame, the end of the
    /// stream or a `close` on this client returns `ConnectionClosed`.
    pub async fn receive<R: DeserializeOwned>(&self) -> Result<R, RpcClientError> {
        let connection = self.current_connection().await?;

        let mut closed = connection.closed.subscribe();
        let mut reader = connection.reader.lock().await;

        let data = loop {
            let frame = tokio::select! {
                biased;

                _ = wait_closed(&mut closed) => {
                    debug!("Websocket closed during receive");
                    return Err(RpcClientError::ConnectionClosed);
                }

                frame = reader.next() => frame,
            };

            match frame {
                Some(Ok(Message::Text(text))) => break text.into_bytes(),

                Some(Ok(Message::Binary(data))) => break data,

                Some(Ok(Message::Close(frame))) => {
                    info!("Websocket closed by server, frame: {:?}", frame);
                    return Err(RpcClientError::ConnectionClosed);
                }

                Some(Ok(other)) => {
                    trace!("Skipping websocket control frame {:?}", other);
                    continue;
                }

                Some(Err(e)) => {
                    warn!("Error reading from websocket, error: {}", e);
                    return Err(RpcClientError::WebsocketRead(e));
                }

                None => {
                    info!("Websocket stream ended");
                    return Err(RpcClientError::ConnectionClosed);
                }
            }
        };

        drop(reader);
        self.pending.fetch_sub(1, Ordering::SeqCst);

        match serde_json::from_slice(&data) {
            Ok(response) => Ok(response),

            Err(e) => {
                warn!(
                    "Error unmarshalling binary result, error: {}. \n Message: {:?}",
                    e,
                    std::str::from_utf8(&data)
                );
                Err(RpcClientError::Unmarshaller(e))
            }
        }
    }

    /// Sends `request` and reads the next frame. `receive` is not attempted
    /// when the send fails.
    pub async fn send_and_receive<P: Serialize, R: DeserializeOwned>(
        &self,
        request: &Request<P>,
    ) -> Result<R, RpcClientError> {
        self.send(request).await?;
        self.receive().await
    }

    /// Replaces the connection when requests are pending.
    ///
    /// A positive pending counter means a response was lost or never read,
    /// leaving the frame stream out of step with the caller. The socket is
    /// dropped, the counter reset and the configured url redialed. In flight
    /// requests are not recovered. No-op when nothing is pending. If the
    /// redial fails the client is left disconnected.
    pub async fn check_and_reopen_connection(&self) -> Result<(), RpcClientError> {
        if self.pending_counter() <= 0 {
            return Ok(());
        }

        let mut connection = self.connection.write().await;

        // Another caller may have reopened while this one waited on the lock.
        if self.pending_counter() <= 0 {
            return Ok(());
        }

        warn!(
            "{} requests pending, reopening connection to {}",
            self.pending_counter(),
            self.configuration.url()
        );

        if let Some(old) = connection.take() {
            old.shutdown().await;
        }
        self.pending.store(0, Ordering::SeqCst);

        match self.configuration.ws_split_stream().await {
            Ok((reader, writer)) => {
                *connection = Some(Arc::new(Connection::new(reader, writer)));
                info!("Reopened connection to RPC server {}", self.configuration.url());
                Ok(())
            }

            Err(e) => {
                warn!("Error reopening websocket connection, error: {}", e);
                Err(e)
            }
        }
    }

    /// Closes the websocket and resets the pending counter. Closing a
    /// disconnected client has no effect.
    pub async fn close(&self) {
        let old = self.connection.write().await.take();
        self.pending.store(0, Ordering::SeqCst);

        if let Some(old) = old {
            info!("Closing connection to RPC server {}", self.configuration.url());
            old.shutdown().await;
        }
    }

    /// Requests sent minus responses received on the current connection.
    pub fn pending_counter(&self) -> i32 {
        self.pending.load(Ordering::SeqCst)
    }

    pub async fn is_connected(&self) -> bool {
        self.connection.read().await.is_some()
    }

    pub fn url(&self) -> &str {
        self.configuration.url()
    }

    pub fn id_counter(&self) -> &Arc<RequestIdCounter> {
        &self.ids
    }

    async fn current_connection(&self) -> Result<Arc<Connection>, RpcClientError> {
        match self.connection.read().await.as_ref() {
            Some(connection) => Ok(Arc::clone(connection)),

            None => Err(RpcClientError::RpcDisconnected),
        }
    }
}
