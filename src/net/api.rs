//! REST API helpers for the render and export endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs reporting a network failure, since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Render replies collapse into `RenderOutcome` so preview state can
//! apply success, rejection, and transport failure uniformly. Export
//! returns payload bytes or a printable error string.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use controls::request::FORM_CONTENT_TYPE;
use controls::request::{ExportRequest, RenderOutcome, RenderRequest};

/// Endpoint serving rendered banner markup.
pub const RENDER_ENDPOINT: &str = "/ascii-art";
/// Endpoint serving downloadable export payloads.
pub const EXPORT_ENDPOINT: &str = "/export";

#[cfg(any(test, feature = "hydrate"))]
fn export_failed_message(status: u16) -> String {
    format!("export failed: {status}")
}

/// Map a reply's status class and body read into a render outcome.
///
/// A readable body on a non-OK status is the service explaining itself;
/// it travels as a rejection so the preview can show it verbatim.
#[cfg(any(test, feature = "hydrate"))]
fn classify_render_reply(accepted: bool, body: Result<String, String>) -> RenderOutcome {
    match body {
        Ok(markup) if accepted => RenderOutcome::Rendered { markup },
        Ok(message) => RenderOutcome::Rejected { message },
        Err(message) => RenderOutcome::NetworkFailed { message },
    }
}

/// POST the render form to `/ascii-art` and classify the reply.
pub async fn render_banner(request: &RenderRequest) -> RenderOutcome {
    #[cfg(feature = "hydrate")]
    {
        let http_request = match gloo_net::http::Request::post(RENDER_ENDPOINT)
            .header("content-type", FORM_CONTENT_TYPE)
            .body(request.encode())
        {
            Ok(r) => r,
            Err(e) => {
                return RenderOutcome::NetworkFailed {
                    message: e.to_string(),
                };
            }
        };
        let response = match http_request.send().await {
            Ok(r) => r,
            Err(e) => {
                return RenderOutcome::NetworkFailed {
                    message: e.to_string(),
                };
            }
        };
        let accepted = response.ok();
        classify_render_reply(accepted, response.text().await.map_err(|e| e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        RenderOutcome::NetworkFailed {
            message: "not available on server".to_owned(),
        }
    }
}

/// POST the export form to `/export` and return the payload bytes.
///
/// # Errors
///
/// Returns a printable message when the request fails or the service
/// responds with a non-OK status.
pub async fn export_banner(request: &ExportRequest) -> Result<Vec<u8>, String> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::post(EXPORT_ENDPOINT)
            .header("content-type", FORM_CONTENT_TYPE)
            .body(request.encode())
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.ok() {
            return Err(export_failed_message(response.status()));
        }
        response.binary().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
