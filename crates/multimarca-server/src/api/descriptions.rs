//! The description-generation request boundary. All field validation happens
//! here (via the engine's `generate`), before any composition runs; the
//! composer itself never fails for valid input.

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use multimarca_descgen::{GenerateError, GenerationRequest};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(in crate::api) struct GenerateDescriptionRequest {
    name: Option<String>,
    category: Option<String>,
    subcategory: Option<String>,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct GenerateDescriptionResponse {
    description: String,
    detected_brand: Option<&'static str>,
    category: String,
    subcategory: String,
}

fn map_generate_error(request_id: &str, error: &GenerateError) -> ApiError {
    let code = match error {
        GenerateError::MissingName | GenerateError::MissingCategory => "validation_error",
        GenerateError::EmptyDescription => {
            tracing::error!(error = %error, "description generation failed");
            "internal_error"
        }
    };
    ApiError::new(request_id, code, error.to_string())
}

/// POST /api/v1/descriptions: compose a marketing description.
pub(in crate::api) async fn generate_description(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<GenerateDescriptionRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<GenerateDescriptionResponse>>, ApiError> {
    let rid = &req_id.0;

    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejecting malformed payload");
        ApiError::new(rid, "bad_request", "Error al procesar los datos enviados")
    })?;

    let request = GenerationRequest {
        name: body.name.unwrap_or_default(),
        category: body.category.unwrap_or_default(),
        subcategory: body.subcategory.unwrap_or_default(),
    };

    let generated = state
        .engine
        .generate(&request)
        .map_err(|e| map_generate_error(rid, &e))?;

    Ok(Json(ApiResponse {
        data: GenerateDescriptionResponse {
            description: generated.description,
            detected_brand: generated.detected_brand,
            category: request.category.trim().to_string(),
            subcategory: request.subcategory.trim().to_string(),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
