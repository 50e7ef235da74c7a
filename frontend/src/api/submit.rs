use gloo_net::http::Request;
use thiserror::Error;
use web_sys::RequestMode;

use crate::config;
use crate::leads::Lead;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode lead: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Network(String),
}

/// Serialize the lead the same way `submit_lead` puts it on the wire.
pub fn encode_lead(lead: &Lead) -> Result<String, SubmitError> {
    Ok(serde_json::to_string(lead)?)
}

/// Posts the lead to the sheet script and forgets about it.
///
/// The script does not send CORS headers, so the request goes out in `no-cors`
/// mode and the response is opaque: status and body can't be read. Anything
/// that doesn't throw counts as delivered.
pub async fn submit_lead(lead: &Lead) -> Result<(), SubmitError> {
    let body = encode_lead(lead)?;

    Request::post(config::SUBMIT_URL)
        .header("Content-Type", "application/json")
        .mode(RequestMode::NoCors)
        .body(body)
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::{RepEdit, RepLead};
    use serde_json::Value;

    #[test]
    fn encoded_body_is_a_tagged_object() {
        let mut rep = RepLead::default();
        rep.apply(RepEdit::RepName("Jo".to_string()));
        let body = encode_lead(&Lead::Rep(rep)).unwrap();

        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["type"], "rep");
        assert_eq!(value["repName"], "Jo");
        assert_eq!(value["categoryPreference"], "Tech");
        assert_eq!(value["preferredPriceRange"], "$200+");
    }

    #[test]
    fn network_error_reads_as_request_failure() {
        let err = SubmitError::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(err.to_string(), "request failed: TypeError: Failed to fetch");
    }
}
