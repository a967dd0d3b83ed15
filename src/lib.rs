//! Teams Graph - Outlook mail and Teams chats through Microsoft Graph
//!
//! This library acquires app-only tokens with the client-credentials grant
//! and passes Graph responses through unchanged.

pub mod api;
pub mod config;
pub mod error;
pub mod types;

pub use api::client::GraphClient;
pub use config::Config;
pub use error::GraphError;
