use reqwest::Url;

use super::{
    claim_request::ClaimRejection, ClaimError, ClaimRequest, ClaimResponse, ProfitClaimant,
    CSRF_HEADER_NAME,
};

pub const CLAIM_PROFIT_PATH: &str = "/api/claim_profit/";

/// claims profit against the dashboard's HTTP endpoint.
pub struct HttpClaimClient {
    client: reqwest::Client,
    endpoint: Url,
    csrf_token: Option<String>,
}

impl HttpClaimClient {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        csrf_token: Option<String>,
    ) -> Result<HttpClaimClient, ClaimError> {
        let invalid = |message: String| ClaimError::InvalidEndpoint {
            url: base_url.to_string(),
            message,
        };
        let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        let endpoint = base
            .join(CLAIM_PROFIT_PATH)
            .map_err(|e| invalid(e.to_string()))?;
        if csrf_token.is_none() {
            log::warn!("no csrf token available, claims to {endpoint} will likely be rejected");
        }
        Ok(HttpClaimClient {
            client,
            endpoint,
            csrf_token,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ProfitClaimant for HttpClaimClient {
    async fn claim(&self, request: &ClaimRequest) -> Result<ClaimResponse, ClaimError> {
        let mut builder = self.client.post(self.endpoint.clone()).json(request);
        if let Some(token) = &self.csrf_token {
            builder = builder.header(CSRF_HEADER_NAME, token);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| ClaimError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let rejection = response
                .json::<ClaimRejection>()
                .await
                .unwrap_or_default();
            let message = rejection
                .message
                .unwrap_or_else(|| String::from("server error"));
            return Err(ClaimError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ClaimResponse>()
            .await
            .map_err(|e| ClaimError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{closed_base_url, OneShotServer};

    fn request() -> ClaimRequest {
        ClaimRequest {
            scooter_id: "3".to_string(),
            profit_amount: 1.5,
        }
    }

    fn client(base_url: &str, csrf_token: Option<&str>) -> HttpClaimClient {
        HttpClaimClient::new(
            reqwest::Client::new(),
            base_url,
            csrf_token.map(String::from),
        )
        .expect("test invariant failed: valid base url")
    }

    #[tokio::test]
    async fn test_claim_posts_json_with_csrf_header() {
        let server =
            OneShotServer::respond("200 OK", "application/json", r#"{"new_balance": 12.5}"#);
        let response = client(&server.base_url, Some("tok"))
            .claim(&request())
            .await
            .expect("claim should succeed");
        assert_eq!(response.new_balance, 12.5);

        let received = server.received();
        assert!(
            received.request_line().starts_with("POST /api/claim_profit/ "),
            "{}",
            received.request_line()
        );
        assert_eq!(received.header(CSRF_HEADER_NAME), Some("tok"));
        assert_eq!(received.header("content-type"), Some("application/json"));
        let body: serde_json::Value =
            serde_json::from_str(&received.body).expect("body should be json");
        assert_eq!(
            body,
            serde_json::json!({"scooter_id": "3", "profit_amount": 1.5})
        );
    }

    #[tokio::test]
    async fn test_claim_without_token_omits_header() {
        let server =
            OneShotServer::respond("200 OK", "application/json", r#"{"new_balance": 1.0}"#);
        client(&server.base_url, None)
            .claim(&request())
            .await
            .expect("claim should succeed");
        assert_eq!(server.received().header(CSRF_HEADER_NAME), None);
    }

    #[tokio::test]
    async fn test_rejection_without_message_falls_back_to_server_error() {
        let server = OneShotServer::respond(
            "500 Internal Server Error",
            "text/html",
            "<html><body>Server Error (500)</body></html>",
        );
        let result = client(&server.base_url, Some("tok")).claim(&request()).await;
        assert_eq!(
            result,
            Err(ClaimError::Rejected {
                status: 500,
                message: "server error".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_rejection_carries_server_message() {
        let server = OneShotServer::respond(
            "400 Bad Request",
            "application/json",
            r#"{"status": "error", "message": "Invalid profit amount"}"#,
        );
        let result = client(&server.base_url, Some("tok")).claim(&request()).await;
        let error = result.expect_err("claim should be rejected");
        assert_eq!(error.to_string(), "Invalid profit amount");
        assert!(matches!(error, ClaimError::Rejected { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_unparseable_success_body_is_invalid_response() {
        let server = OneShotServer::respond("200 OK", "application/json", r#"{"ok": true}"#);
        let result = client(&server.base_url, Some("tok")).claim(&request()).await;
        assert!(matches!(result, Err(ClaimError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_request_error() {
        let result = client(&closed_base_url(), Some("tok")).claim(&request()).await;
        assert!(matches!(result, Err(ClaimError::Request(_))));
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = HttpClaimClient::new(
            reqwest::Client::new(),
            "http://127.0.0.1:8000",
            Some("token".to_string()),
        )
        .expect("valid base url");
        assert_eq!(
            client.endpoint().as_str(),
            "http://127.0.0.1:8000/api/claim_profit/"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpClaimClient::new(reqwest::Client::new(), "not a url", None);
        assert!(matches!(result, Err(ClaimError::InvalidEndpoint { .. })));
    }
}
