/*
[INPUT]:  API key + secret held by the client
[OUTPUT]: User account balances
[POS]:    HTTP layer - user data endpoints (require signed query)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

// ### User Endpoints

use reqwest::Method;
use tracing::warn;

use crate::http::signature::{QueryParams, RequestSigner};
use crate::http::transport::HttpRequest;
use crate::http::{OkcoinClient, OkcoinError, Result};
use crate::types::Funds;
use crate::types::responses::FundsEnvelope;

const USERINFO_ENDPOINT: &str = "userinfo.do";

impl OkcoinClient {
    /// Query account balances
    ///
    /// POST /api/v1/userinfo.do?api_key={key}&sign={SIGNATURE}
    pub async fn funds(&self) -> Result<Funds> {
        let credentials = self.credentials();
        if credentials.api_key.is_empty() {
            return Err(OkcoinError::MissingCredential { field: "api_key" });
        }
        if credentials.secret.is_empty() {
            return Err(OkcoinError::MissingCredential { field: "secret" });
        }

        let mut params = QueryParams::new();
        params.insert("api_key".to_string(), credentials.api_key);
        RequestSigner::new(credentials.secret).sign(&mut params);
        let url = self.endpoint_url(USERINFO_ENDPOINT, &params)?;

        let envelope: FundsEnvelope = self.send_json(HttpRequest::new(Method::POST, url)).await?;
        envelope.into_funds().ok_or_else(|| {
            warn!("userinfo response carried no funds");
            OkcoinError::NoFundsReturned
        })
    }
}
