use std::fmt;

use thiserror::Error;

/// A provider call failed; `message` is the provider's own description.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

macro_rules! opaque_token {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn expose(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "(****)"))
            }
        }
    };
}

opaque_token!(
    /// Short-lived token that opens the client-side bank link widget.
    LinkToken
);
opaque_token!(
    /// Returned by the link widget on success; exchanged for an access token.
    PublicToken
);
opaque_token!(
    /// Long-lived credential for one linked item; stored, never shown.
    AccessToken
);
opaque_token!(
    /// Lets the payment rail act on one linked account.
    ProcessorToken
);
opaque_token!(
    /// Identity provider session handle kept in the caller's cookie.
    SessionSecret
);
