//! Food recognition support
//!
//! Calls to the hosted recognizer live outside this crate; what stays here is
//! the access-token bookkeeping those calls need.

pub mod token;

pub use token::{
    AccessToken, Clock, IssuedToken, SystemClock, TokenCache, TokenError, TokenSource,
    DEFAULT_REFRESH_MARGIN_SECS,
};
