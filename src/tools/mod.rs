//! Chileme Tools module
//!
//! Tool implementations shared by the MCP server and the HTTP API.

pub mod health;
pub mod nutrition;
pub mod status;
