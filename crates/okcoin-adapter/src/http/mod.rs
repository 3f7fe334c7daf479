/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod signature;
pub mod transport;
pub mod user;

pub use error::{OkcoinError, Result};
pub use signature::{QueryParams, RequestSigner, SIGN_PARAM, encode_query};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

pub use client::{ClientConfig, Credentials, ENV_API_KEY, ENV_API_SECRET, OkcoinClient};
