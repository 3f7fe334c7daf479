/*
[INPUT]:  Query parameters and the shared API secret
[OUTPUT]: Upper-case MD5 signature injected as the `sign` query parameter
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or parameter encoding
*/

use std::collections::BTreeMap;
use std::fmt;

use md5::{Digest, Md5};
use url::form_urlencoded;

/// Query parameters in canonical (ascending key) order.
///
/// The signature covers the encoded string, so the encoder and the signer
/// must agree on this order.
pub type QueryParams = BTreeMap<String, String>;

/// Reserved parameter carrying the signature.
pub const SIGN_PARAM: &str = "sign";

/// Encode parameters as `application/x-www-form-urlencoded`, sorted by key.
pub fn encode_query(params: &QueryParams) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}

/// Signs query parameters for authenticated endpoints
#[derive(Clone)]
pub struct RequestSigner {
    secret: String,
}

impl RequestSigner {
    /// Create a new request signer with the given API secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Compute the signature for `params`.
    ///
    /// Format: `MD5("{encoded params without sign}&secret_key={secret}")`,
    /// rendered as upper-case hex.
    pub fn signature(&self, params: &QueryParams) -> String {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().filter(|(name, _)| name.as_str() != SIGN_PARAM))
            .finish();
        let payload = format!("{encoded}&secret_key={}", self.secret);
        let digest = Md5::digest(payload.as_bytes());
        hex::encode(digest).to_uppercase()
    }

    /// Sign `params` in place, replacing any previous `sign` value.
    pub fn sign(&self, params: &mut QueryParams) -> String {
        let signature = self.signature(params);
        params.insert(SIGN_PARAM.to_string(), signature.clone());
        signature
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}
