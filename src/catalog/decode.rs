//! Decoding of the countries API response.

use crate::domain::{Country, CountrydexError, Result};

/// Endpoint queried when no `endpoint` is configured.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all";

/// Longest prefix of an error body kept in the failure message.
const MAX_ERROR_MESSAGE_CHARS: usize = 120;

/// Converts the status and body of a finished request into countries.
///
/// # Errors
///
/// - [`CountrydexError::Network`] if `status` is not in the 2xx range. Zellij
///   reports transport failures this way too, with the error text as the body.
/// - [`CountrydexError::MalformedResponse`] if the body is not a JSON array of
///   country records.
///
/// # Example
///
/// ```
/// use countrydex::catalog::decode_response;
///
/// let body = br#"[{"name":{"common":"Chile"},"capital":["Santiago"],"cca3":"CHL"}]"#;
/// let countries = decode_response(200, body).unwrap();
/// assert_eq!(countries[0].display_name(), "Chile");
///
/// assert!(decode_response(502, b"bad gateway").is_err());
/// ```
pub fn decode_response(status: u16, body: &[u8]) -> Result<Vec<Country>> {
    if !(200..300).contains(&status) {
        let text = String::from_utf8_lossy(body);
        let message: String = text.trim().chars().take(MAX_ERROR_MESSAGE_CHARS).collect();
        tracing::debug!(status, body_len = body.len(), "countries request failed");
        return Err(CountrydexError::Network { status, message });
    }

    let countries: Vec<Country> = serde_json::from_slice(body)?;
    tracing::debug!(count = countries.len(), body_len = body.len(), "countries decoded");
    Ok(countries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FailureKind;

    #[test]
    fn non_success_status_is_a_network_failure() {
        let err = decode_response(400, b"  error sending request: dns error  ").unwrap_err();

        assert_eq!(err.failure_kind(), Some(FailureKind::Network));
        match err {
            CountrydexError::Network { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "error sending request: dns error");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(1_000);
        let Err(CountrydexError::Network { message, .. }) = decode_response(500, body.as_bytes()) else {
            panic!("expected network error");
        };
        assert_eq!(message.len(), MAX_ERROR_MESSAGE_CHARS);
    }

    #[test]
    fn non_array_body_is_malformed() {
        let err = decode_response(200, br#"{"status":404,"message":"Not Found"}"#).unwrap_err();
        assert_eq!(err.failure_kind(), Some(FailureKind::MalformedResponse));

        let err = decode_response(200, b"<html>").unwrap_err();
        assert_eq!(err.failure_kind(), Some(FailureKind::MalformedResponse));
    }

    #[test]
    fn decodes_api_shaped_payload() {
        let body = r#"[
            {
                "name": {"common": "Brazil", "official": "Federative Republic of Brazil"},
                "translations": {"por": {"common": "Brasil", "official": "República Federativa do Brasil"}},
                "flags": {"png": "https://flagcdn.com/w320/br.png", "svg": "https://flagcdn.com/br.svg", "alt": "A green field"},
                "capital": ["Brasília"],
                "region": "Americas",
                "subregion": "South America",
                "population": 212559409,
                "languages": {"por": "Portuguese"},
                "borders": ["ARG", "BOL"],
                "cca2": "BR",
                "cca3": "BRA"
            },
            {
                "name": {"common": "Bouvet Island"},
                "flags": {"svg": "https://flagcdn.com/bv.svg"},
                "region": "Antarctic",
                "population": 0,
                "cca3": "BVT"
            }
        ]"#;

        let countries = decode_response(200, body.as_bytes()).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].localized_name(), "Brasil");
        assert_eq!(countries[0].capital, vec!["Brasília".to_string()]);
        assert!(countries[0].matches("Brasí"));
        assert_eq!(countries[0].borders.as_deref().map(<[String]>::len), Some(2));
        assert_eq!(countries[1].code.as_str(), "BVT");
        assert!(countries[1].flags.alt.is_empty());
    }
}
