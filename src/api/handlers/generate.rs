use axum::{
    extract::{Query, State},
    http::{header, HeaderName},
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::models::with_membership_defaults;
use crate::services::{id_source_for, ClaimGenerator};

pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";
pub const XML_VALID_HEADER: HeaderName = HeaderName::from_static("x-xml-valid");

/// Everything the generate endpoint needs per request.
#[derive(Clone)]
pub struct ClaimState {
    pub generator: ClaimGenerator,
    pub requirement_path: PathBuf,
    pub output_path: PathBuf,
}

pub type SharedClaimState = Arc<ClaimState>;

impl ClaimState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            generator: ClaimGenerator::medicare(id_source_for(config.claim_seed)),
            requirement_path: config.requirement_path.clone(),
            output_path: config.output_path.clone(),
        }
    }
}

/// Generate a claim from query parameters.
///
/// Recognized keys fill the membership section; everything else is ignored.
/// The claim is written to the configured output path before it is returned,
/// and `X-XML-Valid` carries the structural check result.
pub async fn generate_claim(
    State(state): State<SharedClaimState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response> {
    let membership = with_membership_defaults(params);

    let claim = tokio::task::spawn_blocking(move || {
        state
            .generator
            .generate_and_save(&state.requirement_path, &membership, &state.output_path)
    })
    .await
    .map_err(|e| anyhow::anyhow!("Claim generation task failed: {}", e))??;

    let valid = if claim.report.is_valid() { "true" } else { "false" };

    Ok((
        [
            (header::CONTENT_TYPE, XML_CONTENT_TYPE),
            (XML_VALID_HEADER, valid),
        ],
        claim.xml,
    )
        .into_response())
}
