use serde::Serialize;
use serde_json::json;
use ulid::Ulid;

use crate::ids::encode_shareable_id;
use crate::providers::tokens::{
    AccessToken, LinkToken, ProcessorToken, ProviderResult, PublicToken,
};
use crate::{ClientError, ClientResult};

/// Payment rail that receives processor tokens.
pub const PROCESSOR_NAME: &str = "dwolla";

const LINK_PRODUCTS: [&str; 1] = ["auth"];
const LINK_LANGUAGE: &str = "en";
const LINK_COUNTRY_CODES: [&str; 1] = ["US"];

#[derive(Debug, Clone)]
pub struct LinkUser {
    pub user_id: String,
    pub name: String,
    pub payment_customer_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTokenRequest {
    pub client_user_id: String,
    pub client_name: String,
    pub products: Vec<String>,
    pub language: String,
    pub country_codes: Vec<String>,
}

impl LinkTokenRequest {
    pub fn for_user(user: &LinkUser) -> Self {
        Self {
            client_user_id: user.user_id.clone(),
            client_name: user.name.clone(),
            products: LINK_PRODUCTS.iter().map(|value| value.to_string()).collect(),
            language: LINK_LANGUAGE.to_string(),
            country_codes: LINK_COUNTRY_CODES
                .iter()
                .map(|value| value.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenExchange {
    pub access_token: AccessToken,
    pub item_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderAccount {
    pub account_id: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct FundingSourceRequest {
    pub customer_id: String,
    pub processor_token: ProcessorToken,
    pub bank_name: String,
}

/// The record persisted for one linked account.
#[derive(Debug, Clone)]
pub struct BankAccountRecord {
    pub id: String,
    pub user_id: String,
    pub bank_id: String,
    pub account_id: String,
    pub access_token: AccessToken,
    pub funding_source_url: String,
    pub shareable_id: String,
}

/// What the caller gets back; no credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedBankAccount {
    pub id: String,
    pub bank_id: String,
    pub account_id: String,
    pub bank_name: String,
    pub shareable_id: String,
}

pub trait BankLinkProvider {
    fn create_link_token(&self, request: &LinkTokenRequest) -> ProviderResult<LinkToken>;
    fn exchange_public_token(&self, public_token: &PublicToken) -> ProviderResult<TokenExchange>;
    fn accounts(&self, access_token: &AccessToken) -> ProviderResult<Vec<ProviderAccount>>;
    fn create_processor_token(
        &self,
        access_token: &AccessToken,
        account_id: &str,
        processor: &str,
    ) -> ProviderResult<ProcessorToken>;
}

pub trait PaymentRail {
    /// Returns the funding source URL; an empty string means none was created.
    fn add_funding_source(&self, request: &FundingSourceRequest) -> ProviderResult<String>;
}

pub trait BankAccountStore {
    fn create_bank_account(&mut self, record: BankAccountRecord) -> ProviderResult<()>;
}

pub fn create_link_token<P>(provider: &P, user: &LinkUser) -> ClientResult<LinkToken>
where
    P: BankLinkProvider + ?Sized,
{
    provider
        .create_link_token(&LinkTokenRequest::for_user(user))
        .map_err(|error| ClientError::provider_request_failed("create_link_token", &error.message))
}

/// Runs the post-widget flow: exchange the public token, pick the first
/// account, hand it to the payment rail and persist the result.
pub fn link_bank_account<P, R, S>(
    provider: &P,
    rail: &R,
    store: &mut S,
    user: &LinkUser,
    public_token: &PublicToken,
) -> ClientResult<LinkedBankAccount>
where
    P: BankLinkProvider + ?Sized,
    R: PaymentRail + ?Sized,
    S: BankAccountStore + ?Sized,
{
    let exchange = provider
        .exchange_public_token(public_token)
        .map_err(|error| step_failed("exchange_public_token", &error.message))?;
    tracing::info!(item_id = %exchange.item_id, "exchanged public token");

    let accounts = provider
        .accounts(&exchange.access_token)
        .map_err(|error| step_failed("accounts", &error.message))?;
    let Some(account) = accounts.into_iter().next() else {
        return Err(ClientError::bank_link_no_accounts(&exchange.item_id));
    };

    let processor_token = provider
        .create_processor_token(&exchange.access_token, &account.account_id, PROCESSOR_NAME)
        .map_err(|error| step_failed("create_processor_token", &error.message))?;

    let funding_source_url = rail
        .add_funding_source(&FundingSourceRequest {
            customer_id: user.payment_customer_id.clone(),
            processor_token,
            bank_name: account.name.clone(),
        })
        .map_err(|error| step_failed("add_funding_source", &error.message))?;
    if funding_source_url.trim().is_empty() {
        return Err(ClientError::funding_source_missing(&account.account_id));
    }

    let record = BankAccountRecord {
        id: format!("bank_{}", Ulid::new()),
        user_id: user.user_id.clone(),
        bank_id: exchange.item_id.clone(),
        account_id: account.account_id.clone(),
        access_token: exchange.access_token,
        funding_source_url,
        shareable_id: encode_shareable_id(&account.account_id),
    };
    let linked = LinkedBankAccount {
        id: record.id.clone(),
        bank_id: record.bank_id.clone(),
        account_id: record.account_id.clone(),
        bank_name: account.name,
        shareable_id: record.shareable_id.clone(),
    };

    store
        .create_bank_account(record)
        .map_err(|error| step_failed("create_bank_account", &error.message))?;
    tracing::info!(bank_account_id = %linked.id, "linked bank account");

    Ok(linked)
}

fn step_failed(step: &str, detail: &str) -> ClientError {
    tracing::warn!(step, detail, "bank link step failed");
    ClientError::provider_request_failed(step, detail).with_data(json!({
        "step": step,
        "flow": "link_bank_account",
    }))
}
