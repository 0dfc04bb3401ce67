use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::{ClientError, ClientResult};

/// Encodes a provider account id into the id shared in URLs.
pub fn encode_shareable_id(id: &str) -> String {
    STANDARD.encode(id.as_bytes())
}

pub fn decode_shareable_id(encoded: &str) -> ClientResult<String> {
    let bytes = STANDARD.decode(encoded.trim()).map_err(|error| {
        ClientError::invalid_argument(&format!("Shareable id `{encoded}` is not valid: {error}"))
    })?;
    String::from_utf8(bytes).map_err(|_| {
        ClientError::invalid_argument(&format!("Shareable id `{encoded}` is not valid UTF-8."))
    })
}

/// Last path segment of a funding-source or customer URL.
pub fn customer_id_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Drops everything but ASCII word characters and whitespace. `None` for empty input.
pub fn remove_special_characters(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    Some(
        value
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || ch.is_whitespace())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::{
        customer_id_from_url, decode_shareable_id, encode_shareable_id, remove_special_characters,
    };

    #[test]
    fn shareable_ids_decode_back_to_the_account_id() {
        let encoded = encode_shareable_id("acc_9xZ-12");
        assert_eq!(encoded, "YWNjXzl4Wi0xMg==");
        let decoded = decode_shareable_id(&encoded);
        assert!(decoded.is_ok());
        if let Ok(value) = decoded {
            assert_eq!(value, "acc_9xZ-12");
        }
    }

    #[test]
    fn invalid_shareable_id_is_an_invalid_argument() {
        let decoded = decode_shareable_id("not base64!");
        assert!(decoded.is_err());
        if let Err(error) = decoded {
            assert_eq!(error.code, "invalid_argument");
        }
    }

    #[test]
    fn customer_id_is_the_last_url_segment() {
        assert_eq!(
            customer_id_from_url("https://api-sandbox.dwolla.com/customers/6f1c-44aa"),
            "6f1c-44aa"
        );
        assert_eq!(customer_id_from_url("plain-id"), "plain-id");
        assert_eq!(customer_id_from_url("https://host/customers/"), "");
    }

    #[test]
    fn special_characters_are_stripped() {
        assert_eq!(
            remove_special_characters("Uber *Trip #42, NYC!"),
            Some("Uber Trip 42 NYC".to_string())
        );
        assert_eq!(remove_special_characters("Café"), Some("Caf".to_string()));
        assert_eq!(remove_special_characters(""), None);
    }
}
