//! JSON-RPC dispatch, handshake negotiation and request validation.

pub mod handler;
pub mod negotiation;
pub mod validator;

pub use handler::ProtocolHandler;
