//! Validate, try the primary service, fall back to the secondary once.

use serde::Serialize;
use thiserror::Error;

use crate::classify;
use crate::config::Endpoints;
use crate::service::{fallback, primary, Tier, TierError};
use crate::transport::Transport;
use crate::validate::{validate_long_url, ValidationError};

/// Shown when neither service produced a short URL.
pub const SERVICE_FAILURE_MESSAGE: &str =
    "Failed to shorten URL. Please check your internet connection and try again.";

/// Progress of one submission.
///
/// `Idle -> Validating -> {Failed | Requesting} -> {Succeeded | RequestingFallback} -> {Succeeded | Failed}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Requesting,
    RequestingFallback,
    Succeeded,
    Failed,
}

impl Phase {
    /// `Succeeded` or `Failed`; the outcome slot is filled.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Succeeded | Phase::Failed)
    }

    /// A submission is running and may not be replaced.
    pub fn is_in_flight(self) -> bool {
        matches!(
            self,
            Phase::Validating | Phase::Requesting | Phase::RequestingFallback
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortUrl {
    pub url: String,
    pub tier: Tier,
}

#[derive(Debug, Error)]
pub enum ShortenError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Both tiers failed; the tier errors are kept for diagnostics only.
    #[error("{}", SERVICE_FAILURE_MESSAGE)]
    Service {
        primary: TierError,
        fallback: TierError,
    },
}

/// Coarse reason carried by a failed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Validation,
    Service,
}

/// Result of one submission, as presented to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShortenOutcome {
    Success { short_url: String, tier: Tier },
    Failure { kind: FailureKind, message: String },
}

impl ShortenOutcome {
    pub fn short_url(&self) -> Option<&str> {
        match self {
            ShortenOutcome::Success { short_url, .. } => Some(short_url),
            ShortenOutcome::Failure { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ShortenOutcome::Success { .. })
    }
}

impl From<Result<ShortUrl, ShortenError>> for ShortenOutcome {
    fn from(result: Result<ShortUrl, ShortenError>) -> Self {
        match result {
            Ok(ShortUrl { url, tier }) => ShortenOutcome::Success {
                short_url: url,
                tier,
            },
            Err(e) => {
                let kind = match e {
                    ShortenError::Validation(_) => FailureKind::Validation,
                    ShortenError::Service { .. } => FailureKind::Service,
                };
                ShortenOutcome::Failure {
                    kind,
                    message: e.to_string(),
                }
            }
        }
    }
}

/// Two-tier shortening client.
#[derive(Debug, Clone)]
pub struct Shortener<T> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: Transport> Shortener<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// Shortens `raw_url`, never failing: errors become [`ShortenOutcome::Failure`].
    pub fn shorten(&self, raw_url: &str) -> ShortenOutcome {
        self.try_shorten(raw_url).into()
    }

    pub fn try_shorten(&self, raw_url: &str) -> Result<ShortUrl, ShortenError> {
        self.try_shorten_observed(raw_url, &mut |_| {})
    }

    /// Like [`try_shorten`](Self::try_shorten), reporting each phase change to `on_phase`.
    pub fn try_shorten_observed(
        &self,
        raw_url: &str,
        on_phase: &mut dyn FnMut(Phase),
    ) -> Result<ShortUrl, ShortenError> {
        on_phase(Phase::Validating);
        if let Err(e) = validate_long_url(raw_url) {
            tracing::debug!(error = %e, "input rejected");
            on_phase(Phase::Failed);
            return Err(e.into());
        }

        on_phase(Phase::Requesting);
        let primary_err = match self.attempt(Tier::Primary, raw_url) {
            Ok(url) => {
                on_phase(Phase::Succeeded);
                return Ok(ShortUrl {
                    url,
                    tier: Tier::Primary,
                });
            }
            Err(e) => e,
        };
        tracing::warn!(
            kind = %classify::classify(&primary_err),
            error = %primary_err,
            "primary service failed, trying fallback"
        );

        on_phase(Phase::RequestingFallback);
        match self.attempt(Tier::Fallback, raw_url) {
            Ok(url) => {
                on_phase(Phase::Succeeded);
                Ok(ShortUrl {
                    url,
                    tier: Tier::Fallback,
                })
            }
            Err(fallback_err) => {
                tracing::error!(
                    primary_kind = %classify::classify(&primary_err),
                    primary_error = %primary_err,
                    fallback_kind = %classify::classify(&fallback_err),
                    fallback_error = %fallback_err,
                    "both shortening services failed"
                );
                on_phase(Phase::Failed);
                Err(ShortenError::Service {
                    primary: primary_err,
                    fallback: fallback_err,
                })
            }
        }
    }

    fn attempt(&self, tier: Tier, long_url: &str) -> Result<String, TierError> {
        let request = match tier {
            Tier::Primary => primary::request_url(&self.endpoints.primary, long_url),
            Tier::Fallback => fallback::request_url(&self.endpoints.fallback, long_url),
        };
        tracing::debug!(%tier, host = request.host_str().unwrap_or(""), "requesting short URL");
        let resp = self.transport.get(&request)?;
        let short = match tier {
            Tier::Primary => primary::parse_response(&resp)?,
            Tier::Fallback => fallback::parse_response(&resp)?,
        };
        tracing::info!(%tier, short_url = %short, "shortened");
        Ok(short)
    }
}
