mod claim_request;
mod csrf;
mod error;
mod http_claim_client;
mod profit_claimant;

pub use claim_request::{ClaimRequest, ClaimResponse};
pub use csrf::{cookie_value, CSRF_COOKIE_NAME, CSRF_HEADER_NAME};
pub use error::ClaimError;
pub use http_claim_client::{HttpClaimClient, CLAIM_PROFIT_PATH};
pub use profit_claimant::ProfitClaimant;
