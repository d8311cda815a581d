use serde::{Deserialize, Serialize};

/// body of the claim-profit POST.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClaimRequest {
    pub scooter_id: String,
    pub profit_amount: f64,
}

/// body of a successful claim-profit response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClaimResponse {
    pub new_balance: f64,
}

/// body of a rejected claim. the server may omit the message.
#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct ClaimRejection {
    #[serde(default)]
    pub message: Option<String>,
}
