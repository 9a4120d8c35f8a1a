//! Access token cache for the recognition service
//!
//! Holds at most one token with its expiry. A token counts as valid until
//! `expires_in - refresh_margin` seconds after it was issued, so it is
//! replaced before the issuer actually rejects it.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Refresh one hour before the issuer's stated expiry
pub const DEFAULT_REFRESH_MARGIN_SECS: i64 = 3600;

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token request failed: {0}")]
    Request(String),

    #[error("token source returned an empty token")]
    EmptyToken,
}

/// A token as handed out by the issuer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in_secs: i64,
}

/// Anything that can issue a fresh token
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn fetch_token(&self) -> Result<IssuedToken, TokenError>;
}

/// A cached token and the instant it stops being used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.token.is_empty() && now < self.expires_at
    }
}

pub struct TokenCache<C: Clock = SystemClock> {
    clock: C,
    refresh_margin: Duration,
    cached: Option<AccessToken>,
}

impl TokenCache<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock, DEFAULT_REFRESH_MARGIN_SECS)
    }
}

impl Default for TokenCache<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TokenCache<C> {
    pub fn with_clock(clock: C, refresh_margin_secs: i64) -> Self {
        Self {
            clock,
            refresh_margin: Duration::seconds(refresh_margin_secs.max(0)),
            cached: None,
        }
    }

    /// The cached token, only while it is still valid
    pub fn current(&self) -> Option<&AccessToken> {
        let now = self.clock.now();
        self.cached.as_ref().filter(|t| t.is_valid_at(now))
    }

    /// Cache a freshly issued token
    pub fn store(&mut self, issued: IssuedToken) -> &AccessToken {
        let lifetime = (Duration::seconds(issued.expires_in_secs) - self.refresh_margin)
            .max(Duration::zero());
        let expires_at = self.clock.now() + lifetime;
        self.cached.insert(AccessToken {
            token: issued.token,
            expires_at,
        })
    }

    /// Drop the cached token, e.g. after the issuer rejected it
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Return a valid token, fetching a new one only when needed
    ///
    /// A failed fetch leaves the cache as it was.
    pub async fn access_token<S>(&mut self, source: &S) -> Result<String, TokenError>
    where
        S: TokenSource + ?Sized,
    {
        if let Some(token) = self.current() {
            return Ok(token.token.clone());
        }

        let issued = source.fetch_token().await.map_err(|e| {
            tracing::error!(error = %e, "access token refresh failed");
            e
        })?;
        if issued.token.is_empty() {
            return Err(TokenError::EmptyToken);
        }

        let token = self.store(issued);
        tracing::info!(expires_at = %token.expires_at, "access token refreshed");
        Ok(token.token.clone())
    }
}
