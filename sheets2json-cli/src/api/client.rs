//! Sheets API client for reading value ranges

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tokio::time::sleep;

use super::auth::TokenProvider;
use super::models::{ApiErrorResponse, ValueRange, ValueRenderOption};
use super::resilience::{RetryConfig, RetryPolicy};
use crate::sheet::CellGrid;

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";

/// Client for `spreadsheets.values.get`
pub struct SheetsClient {
    http: Client,
    auth: Arc<dyn TokenProvider>,
    base_url: String,
    retry: RetryPolicy,
    render: ValueRenderOption,
}

impl SheetsClient {
    pub fn new(auth: Arc<dyn TokenProvider>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("sheets2json/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            auth,
            base_url: DEFAULT_API_BASE.to_string(),
            retry: RetryPolicy::default(),
            render: ValueRenderOption::default(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_retry(mut self, config: RetryConfig) -> Self {
        self.retry = RetryPolicy::new(config);
        self
    }

    pub fn with_render_option(mut self, render: ValueRenderOption) -> Self {
        self.render = render;
        self
    }

    /// Full request URL; spreadsheet id and range are percent-encoded
    pub fn values_url(&self, spreadsheet_id: &str, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}?majorDimension=ROWS&valueRenderOption={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(spreadsheet_id),
            urlencoding::encode(range),
            self.render.as_query_value()
        )
    }

    /// Fetch a range as rows of cells.
    ///
    /// A range without data yields an empty grid, not an error.
    pub async fn fetch_range(&self, spreadsheet_id: &str, range: &str) -> Result<CellGrid> {
        let url = self.values_url(spreadsheet_id, range);
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            debug!(
                "GET {} (attempt {}/{})",
                url,
                attempt,
                self.retry.max_attempts()
            );

            let token = self.auth.access_token().await?;
            let response = self.http.get(&url).bearer_auth(&token).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let value_range: ValueRange = resp
                        .json()
                        .await
                        .context("Failed to parse Sheets API response")?;

                    let grid = value_range.into_grid();
                    debug!("Fetched {} rows from {}", grid.len(), range);
                    return Ok(grid);
                }
                Ok(resp) => {
                    let status = resp.status();
                    let body = match resp.text().await {
                        Ok(body) => body,
                        Err(e) => {
                            debug!("Failed to read error body for {}: {}", status, e);
                            String::new()
                        }
                    };

                    if RetryPolicy::is_retryable_status(status)
                        && self.retry.has_attempts_left(attempt)
                    {
                        warn!("Sheets API returned {}, retrying", status);
                        sleep(self.retry.delay_for_attempt(attempt)).await;
                        continue;
                    }

                    bail!(describe_api_error(status, &body));
                }
                Err(e) if RetryPolicy::is_retryable_error(&e) && self.retry.has_attempts_left(attempt) => {
                    warn!("Request to Sheets API failed: {}, retrying", e);
                    sleep(self.retry.delay_for_attempt(attempt)).await;
                }
                Err(e) => {
                    return Err(e).context("Request to Sheets API failed");
                }
            }
        }
    }
}

/// Human-readable message for a failed response, preferring Google's own message
fn describe_api_error(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(parsed) => format!("Sheets API returned {}: {}", status, parsed.error.message),
        Err(_) if body.trim().is_empty() => format!("Sheets API returned {}", status),
        Err(_) => format!("Sheets API returned {}: {}", status, body.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::auth::StaticToken;
    use crate::sheet::CellValue;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn client() -> SheetsClient {
        SheetsClient::new(Arc::new(StaticToken::new("token"))).unwrap()
    }

    /// Local HTTP server answering one connection per scripted response.
    /// Returns its base URL and a counter of requests served.
    async fn serve(responses: Vec<(u16, &'static str)>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let served = Arc::clone(&hits);

        tokio::spawn(async move {
            for (status, body) in responses {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let mut request = vec![0u8; 8192];
                let _ = socket.read(&mut request).await;
                served.fetch_add(1, Ordering::SeqCst);

                let reply = format!(
                    "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(reply.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (format!("http://{}", addr), hits)
    }

    fn fast_retry(max_attempts: u32) -> RetryConfig {
        RetryConfig::builder()
            .max_attempts(max_attempts)
            .initial_delay(Duration::from_millis(10))
            .max_delay(Duration::from_millis(20))
            .build()
    }

    #[test]
    fn test_values_url_default() {
        let url = client().values_url("1AbC-xyz_9", "A:ZZ");
        assert_eq!(
            url,
            "https://sheets.googleapis.com/v4/spreadsheets/1AbC-xyz_9/values/A%3AZZ?majorDimension=ROWS&valueRenderOption=FORMATTED_VALUE"
        );
    }

    #[test]
    fn test_values_url_encodes_sheet_names() {
        let url = client()
            .with_base_url("http://localhost:8080/")
            .with_render_option(ValueRenderOption::Unformatted)
            .values_url("id", "Sales 2024!A1:D50");
        assert_eq!(
            url,
            "http://localhost:8080/v4/spreadsheets/id/values/Sales%202024%21A1%3AD50?majorDimension=ROWS&valueRenderOption=UNFORMATTED_VALUE"
        );
    }

    #[test]
    fn test_describe_google_error() {
        let body = r#"{"error": {"code": 403, "message": "The caller does not have permission", "status": "PERMISSION_DENIED"}}"#;
        assert_eq!(
            describe_api_error(StatusCode::FORBIDDEN, body),
            "Sheets API returned 403 Forbidden: The caller does not have permission"
        );
    }

    #[test]
    fn test_describe_plain_error() {
        assert_eq!(
            describe_api_error(StatusCode::BAD_GATEWAY, ""),
            "Sheets API returned 502 Bad Gateway"
        );
        assert_eq!(
            describe_api_error(StatusCode::NOT_FOUND, " not here \n"),
            "Sheets API returned 404 Not Found: not here"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_fails_without_retry() {
        let client = client()
            .with_base_url("http://127.0.0.1:1")
            .with_retry(RetryConfig::disabled());

        let err = client.fetch_range("id", "A:ZZ").await.unwrap_err();
        assert_eq!(err.to_string(), "Request to Sheets API failed");
    }

    #[tokio::test]
    async fn test_server_error_is_retried_then_succeeds() {
        let (base, hits) = serve(vec![
            (503, r#"{"error": {"code": 503, "message": "The service is currently unavailable.", "status": "UNAVAILABLE"}}"#),
            (200, r#"{"range": "Sheet1!A1:B2", "majorDimension": "ROWS", "values": [["Z", "A"], [1, true]]}"#),
        ])
        .await;

        let grid = client()
            .with_base_url(base)
            .with_retry(fast_retry(3))
            .fetch_range("id", "A:ZZ")
            .await
            .unwrap();

        assert_eq!(
            grid,
            vec![
                vec![CellValue::from("Z"), CellValue::from("A")],
                vec![CellValue::from(1i64), CellValue::Bool(true)],
            ]
        );
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_not_found_fails_immediately_with_google_message() {
        let (base, hits) = serve(vec![
            (404, r#"{"error": {"code": 404, "message": "Requested entity was not found.", "status": "NOT_FOUND"}}"#),
            (200, r#"{"values": [["unreachable"]]}"#),
        ])
        .await;

        let err = client()
            .with_base_url(base)
            .with_retry(fast_retry(3))
            .fetch_range("missing", "A:ZZ")
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Sheets API returned 404 Not Found: Requested entity was not found."
        );
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rate_limit_fails_after_last_attempt() {
        let (base, hits) = serve(vec![(429, ""), (429, "")]).await;

        let err = client()
            .with_base_url(base)
            .with_retry(fast_retry(2))
            .fetch_range("id", "A:ZZ")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Sheets API returned 429 Too Many Requests");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_missing_values_is_empty_grid() {
        let (base, _) = serve(vec![(
            200,
            r#"{"range": "Sheet1!A1:ZZ1000", "majorDimension": "ROWS"}"#,
        )])
        .await;

        let grid = client()
            .with_base_url(base)
            .fetch_range("id", "Sheet1!A:ZZ")
            .await
            .unwrap();

        assert!(grid.is_empty());
    }
}
