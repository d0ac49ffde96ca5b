//! The preference block
//!
//! Embeddable entry point: resolves the current user (anonymous when the
//! request carries no identity) and delegates to the preference form.

use axum::{Json, extract::State, http::StatusCode};

use crate::preference;
use crate::prelude::*;
use content_filter_core::extract::{OptionalAuth, OptionalRequestId};
use content_filter_core::form::FormView;

/// GET /api/content-filter/block
pub async fn get_block(
	State(app): State<App>,
	auth: OptionalAuth,
	OptionalRequestId(req_id): OptionalRequestId,
) -> CfResult<(StatusCode, Json<ApiResponse<FormView>>)> {
	let user_id = auth.user_id();
	let form = preference::build_form(&app, user_id).await?;

	let mut response = ApiResponse::new(form);
	if let Some(id) = req_id {
		response = response.with_req_id(id);
	}

	Ok((StatusCode::OK, Json(response)))
}

// vim: ts=4
