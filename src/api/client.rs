//! HTTP client for the monitoring backend.
//!
//! Thin fetch wrappers: build the request, send, check the status, decode
//! JSON. Failures collapse into [`ApiError`] and are rendered by the caller;
//! nothing here retries.

use gloo_net::http::Request;
use log::warn;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, HtmlScriptElement};

use super::types::{CloudMetrics, ComposeGraph, ContainerMetrics, VulnerabilityReport};

/// Backend used when no deploy-time override is present.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Failure of a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The request never completed or the response body did not decode.
	#[error("request failed: {0}")]
	Transport(#[from] gloo_net::Error),
	/// The server answered with a non-success status.
	#[error("server responded with status {0}")]
	Status(u16),
	/// The request could not be assembled (multipart form construction).
	#[error("could not build request: {0}")]
	Request(String),
}

/// Deploy-time override read from an optional `<script id="api-config">`
/// element: `{"base_url": "https://..."}`.
#[derive(Debug, Deserialize)]
struct ApiConfig {
	base_url: String,
}

/// Backend base URL: the DOM override if present and well-formed, the
/// localhost default otherwise.
fn base_url() -> String {
	read_config_element().unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn read_config_element() -> Option<String> {
	let window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("api-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let text = script.text().ok()?;

	match serde_json::from_str::<ApiConfig>(&text) {
		Ok(config) => Some(config.base_url.trim_end_matches('/').to_string()),
		Err(e) => {
			warn!("api: ignoring malformed api-config element: {e}");
			None
		}
	}
}

/// GET a JSON document from `path` (leading slash included).
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
	let response = Request::get(&format!("{}{path}", base_url())).send().await?;
	if !response.ok() {
		return Err(ApiError::Status(response.status()));
	}
	Ok(response.json().await?)
}

/// POST the picked Compose file as a multipart form to `path`.
async fn post_compose_file<T: DeserializeOwned>(path: &str, file: &File) -> Result<T, ApiError> {
	let form = FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
	form.append_with_blob("file", file)
		.map_err(|e| ApiError::Request(format!("{e:?}")))?;

	let response = Request::post(&format!("{}{path}", base_url()))
		.body(form)?
		.send()
		.await?;
	if !response.ok() {
		return Err(ApiError::Status(response.status()));
	}
	Ok(response.json().await?)
}

/// Parse the Compose file into the service/relation graph.
pub async fn upload_compose(file: &File) -> Result<ComposeGraph, ApiError> {
	post_compose_file("/upload-docker-compose/", file).await
}

/// Generate Markdown recommendations for the Compose file. The backend wraps
/// the text in a JSON string.
pub async fn request_recommendations(file: &File) -> Result<String, ApiError> {
	post_compose_file("/get-recommendations/", file).await
}

/// Current per-container runtime metrics.
pub async fn container_metrics() -> Result<Vec<ContainerMetrics>, ApiError> {
	get_json("/metrics/").await
}

/// Latest image vulnerability scan results.
pub async fn vulnerability_report() -> Result<VulnerabilityReport, ApiError> {
	get_json("/vulnerabilities/").await
}

/// CloudWatch instance metrics, keyed by namespace.
pub async fn cloud_metrics() -> Result<CloudMetrics, ApiError> {
	get_json("/get-ec2/").await
}
