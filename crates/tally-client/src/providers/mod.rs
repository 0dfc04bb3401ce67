//! Typed boundary to the hosted identity, bank-link and payment-rail
//! providers.
//!
//! Provider clients live outside this crate and implement the traits here;
//! the orchestration functions only sequence calls and shape records.

mod bank_link;
mod identity;
mod tokens;

pub use bank_link::{
    BankAccountRecord, BankAccountStore, BankLinkProvider, FundingSourceRequest, LinkTokenRequest,
    LinkUser, LinkedBankAccount, PROCESSOR_NAME, PaymentRail, ProviderAccount, TokenExchange,
    create_link_token, link_bank_account,
};
pub use identity::{
    IdentityProvider, NewAccount, Session, UserProfile, logged_in_user, sign_in, sign_out, sign_up,
};
pub use tokens::{
    AccessToken, LinkToken, ProcessorToken, ProviderError, ProviderResult, PublicToken,
    SessionSecret,
};
