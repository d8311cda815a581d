use super::{ClaimError, ClaimRequest, ClaimResponse};

/// reports a completed simulation's profit and receives the credited balance.
#[allow(async_fn_in_trait)]
pub trait ProfitClaimant {
    async fn claim(&self, request: &ClaimRequest) -> Result<ClaimResponse, ClaimError>;
}
