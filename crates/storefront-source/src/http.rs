//! Catalog fetched from a JSON HTTP endpoint.

use std::time::Duration;

use async_trait::async_trait;
use storefront_commerce::catalog::Product;
use storefront_commerce::{CatalogSource, SourceError};

use crate::record::decode_catalog;

/// Public demo catalog the storefront was built against.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the product list with a single GET.
///
/// Any non-2xx status, transport failure or malformed body fails the whole
/// fetch. There are no retries.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl Default for HttpCatalogSource {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

impl HttpCatalogSource {
    /// Create a source for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a preconfigured client (proxies, headers, ...).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        tracing::debug!(url = %self.url, timeout_ms = self.timeout.as_millis() as u64, "Fetching catalog");

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await.map_err(request_error)?;
        let products = decode_catalog(&body)?;
        tracing::debug!(url = %self.url, count = products.len(), "Catalog fetched");
        Ok(products)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

fn request_error(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        SourceError::Request(format!("timed out: {}", err))
    } else {
        SourceError::Request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port and return its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{}/products", addr)
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once(
            "200 OK",
            r#"[{"id":1,"title":"Backpack","price":109.95,"description":"","category":"men's clothing","image":"","rating":{"rate":3.9,"count":120}}]"#,
        )
        .await;

        let products = HttpCatalogSource::new(url).fetch_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price.cents, 10995);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let url = serve_once("503 Service Unavailable", "[]").await;
        let err = HttpCatalogSource::new(url.clone())
            .fetch_products()
            .await
            .unwrap_err();
        assert_eq!(err, SourceError::Http { status: 503, url });
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let url = serve_once("200 OK", r#"{"oops":true}"#).await;
        let err = HttpCatalogSource::new(url).fetch_products().await.unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind then drop so the port is free and nothing is listening.
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let source = HttpCatalogSource::new(format!("http://{}/products", addr))
            .with_timeout(Duration::from_secs(2));
        let err = source.fetch_products().await.unwrap_err();
        assert!(matches!(err, SourceError::Request(_)));
    }

    #[tokio::test]
    async fn test_fetch_with_custom_client() {
        let url = serve_once(
            "200 OK",
            r#"[{"id":4,"title":"Drive","price":64,"category":"electronics"}]"#,
        )
        .await;
        let client = reqwest::Client::builder()
            .user_agent("storefront-tests")
            .build()
            .unwrap();

        let products = HttpCatalogSource::new(url)
            .with_client(client)
            .fetch_products()
            .await
            .unwrap();
        assert_eq!(products[0].price.cents, 6400);
    }

    #[test]
    fn test_defaults() {
        let source = HttpCatalogSource::default();
        assert_eq!(source.url(), DEFAULT_CATALOG_URL);
        assert_eq!(source.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(source.describe(), DEFAULT_CATALOG_URL);
    }
}
