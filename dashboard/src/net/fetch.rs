//! Browser HTTP transport via `gloo-net`.

use gloo_net::http::{Method as FetchMethod, RequestBuilder};
use souksync::ApiError;
use souksync::api::{HttpRequest, HttpResponse, HttpTransport, Method};

/// Sends API requests with the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait::async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = RequestBuilder::new(&request.url).method(fetch_method(request.method));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = prepared.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let status_text = response.status_text();
        let content_type = response.headers().get("content-type");
        let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, status_text, content_type, body })
    }
}

fn fetch_method(method: Method) -> FetchMethod {
    match method {
        Method::Get => FetchMethod::GET,
        Method::Post => FetchMethod::POST,
        Method::Put => FetchMethod::PUT,
        Method::Delete => FetchMethod::DELETE,
    }
}
