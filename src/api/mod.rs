pub mod auth;
pub mod client;

pub use auth::*;
pub use client::*;

/// Default scope requested for app-only Graph tokens
pub const SCOPE_GRAPH: &str = "https://graph.microsoft.com/.default";

/// Graph v1.0 root
pub const GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";
