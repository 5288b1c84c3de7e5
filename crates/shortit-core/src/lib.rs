pub mod config;
pub mod logging;

pub mod classify;
pub mod service;
pub mod session;
pub mod shorten;
pub mod transport;
pub mod validate;

pub use session::{Session, SessionError};
pub use shorten::{FailureKind, Phase, ShortUrl, ShortenError, ShortenOutcome, Shortener};
pub use service::Tier;
