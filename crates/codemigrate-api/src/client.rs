//! reqwest implementation of [`MigrationBackend`]

use std::time::Duration;

use codemigrate_core::prelude::*;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::backend::MigrationBackend;
use crate::protocol::{
    endpoints, AnalyzeResponse, GenerateTestsRequest, GenerateTestsResponse, HealthResponse,
    MigrateRequest, MigrateResponse, UploadedFile, UPLOAD_FIELD,
};

/// Longest slice of an error body kept in [`Error::BackendStatus`]
const MAX_ERROR_BODY: usize = 200;

/// Connection settings for [`HttpBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` leaves requests unbounded
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the migration backend
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("codemigrate/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {}", e)))?;
        Self::with_client(client, &config.base_url)
    }

    /// Use a preconfigured `reqwest::Client`
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::invalid_url(format!("{}{}", self.base_url, path), e.to_string()))
    }

    async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        let text = read_success_body(response).await?;
        serde_json::from_str(&text).map_err(|e| Error::decode(format!("{} response: {}", path, e)))
    }
}

/// Parse the configured base URL so that relative endpoint joins append to its path
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|e| Error::invalid_url(trimmed, e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_url(trimmed, "scheme must be http or https"));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::transport(format!("request timed out: {}", e))
    } else if e.is_connect() {
        Error::transport(format!("could not connect to backend: {}", e))
    } else {
        Error::transport(e.to_string())
    }
}

async fn read_success_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let text = response.text().await.map_err(transport_error)?;
    if !status.is_success() {
        warn!("backend returned {}", status);
        let body: String = text.chars().take(MAX_ERROR_BODY).collect();
        return Err(Error::backend_status(status.as_u16(), body));
    }
    Ok(text)
}

impl MigrationBackend for HttpBackend {
    async fn analyze(&self, file: UploadedFile) -> Result<AnalyzeResponse> {
        let url = self.endpoint(endpoints::ANALYZE)?;
        info!("Uploading {} ({} bytes) for analysis", file.name, file.bytes.len());

        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str("application/octet-stream")
            .map_err(transport_error)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        let text = read_success_body(response).await?;
        AnalyzeResponse::from_json(&text)
    }

    async fn migrate(&self, code: String, target_lang: String) -> Result<MigrateResponse> {
        info!("Requesting migration to {}", target_lang);
        let request = MigrateRequest { code, target_lang };
        self.post_json(endpoints::MIGRATE, &request).await
    }

    async fn generate_tests(&self, migrated_code: String) -> Result<String> {
        info!("Requesting generated tests");
        let request = GenerateTestsRequest { migrated_code };
        let response: GenerateTestsResponse =
            self.post_json(endpoints::GENERATE_TESTS, &request).await?;
        Ok(response.test_code)
    }

    async fn health(&self) -> Result<HealthResponse> {
        let url = self.endpoint(endpoints::HEALTH)?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let text = read_success_body(response).await?;
        serde_json::from_str(&text).map_err(|e| Error::decode(format!("health response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Serve one canned response on a random local port, returning the raw request
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (format!("http://{}", addr), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            if headers.contains("transfer-encoding: chunked") {
                if buf.ends_with(b"0\r\n\r\n") {
                    break;
                }
                continue;
            }
            let content_length = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn backend(base: &str) -> HttpBackend {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpBackend::with_client(client, base).unwrap()
    }

    #[test]
    fn test_parse_base_url_appends_slash() {
        let url = parse_base_url("https://example.com/api").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/");
        assert_eq!(url.join("migrate").unwrap().as_str(), "https://example.com/api/migrate");
    }

    #[test]
    fn test_parse_base_url_root() {
        let url = parse_base_url("https://code-migrate-api.onrender.com").unwrap();
        assert_eq!(
            url.join("generate-tests").unwrap().as_str(),
            "https://code-migrate-api.onrender.com/generate-tests"
        );
    }

    #[test]
    fn test_parse_base_url_rejects_bad_input() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(Error::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(Error::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_migrate_posts_json() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"migrated_code":"const a = 1;","migration_steps":["Replace var"]}"#,
        )
        .await;

        let resp = backend(&base)
            .migrate("var a = 1;".into(), "JavaScript ES6+".into())
            .await
            .unwrap();
        assert_eq!(resp.migrated_code, "const a = 1;");
        assert_eq!(resp.steps_or_default(), vec!["Replace var".to_string()]);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /migrate "));
        assert!(request.contains(r#""code":"var a = 1;""#));
        assert!(request.contains(r#""target_lang":"JavaScript ES6+""#));
    }

    #[tokio::test]
    async fn test_generate_tests_returns_test_code() {
        let (base, server) = serve_once("200 OK", r#"{"test_code":"test('a', () => {});"}"#).await;

        let code = backend(&base)
            .generate_tests("export const a = 1;".into())
            .await
            .unwrap();
        assert_eq!(code, "test('a', () => {});");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /generate-tests "));
        assert!(request.contains(r#""migrated_code":"export const a = 1;""#));
    }

    #[tokio::test]
    async fn test_analyze_sends_multipart_file() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"filename":"old.js","analysis":"```json\n{\"language\":\"jQuery\"}\n```","source_code":"$(x)","source":"Groq AI"}"#,
        )
        .await;

        let resp = backend(&base)
            .analyze(UploadedFile::new("old.js", b"$(x)".to_vec()))
            .await
            .unwrap();
        assert_eq!(resp.analysis.language(), "jQuery");
        assert_eq!(resp.source_code, "$(x)");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /analyze "));
        assert!(request.to_lowercase().contains("multipart/form-data"));
        assert!(request.contains(r#"name="file""#));
        assert!(request.contains(r#"filename="old.js""#));
    }

    #[tokio::test]
    async fn test_error_status_maps_to_backend_status() {
        let (base, _server) =
            serve_once("500 Internal Server Error", r#"{"detail":"AI service failed"}"#).await;

        let err = backend(&base)
            .migrate("x".into(), "Python 3".into())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("AI service failed"));
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_decode() {
        let (base, _server) = serve_once("200 OK", r#"{"unexpected": true}"#).await;

        let err = backend(&base)
            .migrate("x".into(), "Python 3".into())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn test_health_probe() {
        let (base, server) =
            serve_once("200 OK", r#"{"status":"Online","ai_engine":"Groq Llama 3"}"#).await;

        let health = backend(&base).health().await.unwrap();
        assert_eq!(health.status, "Online");
        assert_eq!(health.ai_engine.as_deref(), Some("Groq Llama 3"));

        let request = server.await.unwrap();
        assert!(request.starts_with("GET / "));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = backend(&format!("http://{}", addr))
            .health()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
        assert!(err.is_recoverable());
    }
}
