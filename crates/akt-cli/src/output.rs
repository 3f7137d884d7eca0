//! # Request Rendering
//!
//! A composed query is rendered as a [`QueryRequest`]: where it would be sent
//! (`chain_id`, `node`, `height`, `route`) and the validated request body.
//! `text` output is YAML, `json` output is pretty-printed JSON.

use anyhow::{Context, Result};
use serde::Serialize;

use akt_core::PageRequest;

use crate::args::{OutputFormat, QueryArgs};

/// A fully validated query, ready to be sent.
#[derive(Debug, Serialize)]
pub struct QueryRequest<B> {
    pub chain_id: String,
    pub node: String,
    pub height: i64,
    pub route: &'static str,
    pub request: B,
}

impl<B: Serialize> QueryRequest<B> {
    /// Attach `body` to the connection settings in `query`.
    pub fn new(query: &QueryArgs, route: &'static str, body: B) -> Self {
        Self {
            chain_id: query.chain_id.clone(),
            node: query.node.clone(),
            height: query.height,
            route,
            request: body,
        }
    }
}

/// Body of a single-resource query.
#[derive(Debug, Serialize)]
pub struct GetRequest<T> {
    pub id: T,
}

/// Body of a list query.
#[derive(Debug, Serialize)]
pub struct ListRequest<T> {
    pub filters: T,
    pub pagination: PageRequest,
}

/// Render `value` in `format`, always ending with a newline.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Text => serde_yaml::to_string(value).context("failed to encode YAML")?,
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("failed to encode JSON")?
        }
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
