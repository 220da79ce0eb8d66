//! Contains all RPC client errors.
use {
    crate::{ethjson::RpcError, ethutil::CodecError},
    thiserror::Error,
    tokio_native_tls::native_tls,
    tokio_tungstenite::tungstenite,
};

/// RPC client errors
#[derive(Error, Debug)]
pub enum RpcClientError {
    /// Websocket url could not be parsed or uses an unsupported scheme.
    #[error("invalid websocket url: {0}")]
    InvalidUrl(String),
    /// Invalid authentication header to RPC.
    #[error("rpc authentication error")]
    RpcAuthenticationRequest,
    /// Invalid tcp connection to RPC server.
    #[error("tcp stream error: {0}")]
    TcpStream(std::io::Error),
    /// Invalid tls cerificate error on websocket.
    #[error("websocket tls certificate error: {0}")]
    WsTlsCertificate(native_tls::Error),
    /// Invalid tls connection to Server.
    #[error("tls handshake error: {0}")]
    TlsHandshake(native_tls::Error),
    /// Invalid tls connection to RPC server.
    #[error("tls stream error: {0}")]
    TlsStream(native_tls::Error),
    /// Invalid rpc open command.
    #[error("rpc handshake error: {0}")]
    RpcHandshake(tungstenite::Error),
    /// No websocket is held by the client.
    #[error("rpc client disconnected")]
    RpcDisconnected,
    /// Websocket already connected to server.
    #[error("websocket already connected to RPC server")]
    WebsocketAlreadyConnected,

    /// On json marshalling error.
    #[error("marshaller error: {0}")]
    Marshaller(serde_json::Error),
    /// On json unmarshalling error.
    #[error("unmarshaller error: {0}")]
    Unmarshaller(serde_json::Error),
    /// Frame could not be written to websocket.
    #[error("websocket write error: {0}")]
    WebsocketWrite(tungstenite::Error),
    /// Frame could not be read from websocket.
    #[error("websocket read error: {0}")]
    WebsocketRead(tungstenite::Error),
    /// Peer closed the websocket or the client was closed during a read.
    #[error("websocket connection closed")]
    ConnectionClosed,

    /// Error member returned by the node.
    #[error("rpc server error {}: {}", .0.code, .0.message)]
    Server(RpcError),
    /// Result payload could not be decoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}
