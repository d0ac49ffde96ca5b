//! Route authentication middleware
//!
//! Identity arrives from the fronting platform as trusted headers
//! (`x-user-id`, `x-user-roles`); the middleware turns them into an
//! `Auth` extension for the extractors in [`crate::extract`].

use axum::{extract::Request, middleware::Next, response::Response};

use crate::extract::{Auth, RequestId};
use crate::prelude::*;
use content_filter_types::auth::AuthCtx;

fn header_str<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
	req.headers().get(name).and_then(|v| v.to_str().ok())
}

fn auth_from_headers(req: &Request) -> Option<AuthCtx> {
	let user_id = header_str(req, "x-user-id")?.parse::<u32>().ok()?;
	let roles = header_str(req, "x-user-roles")
		.map(|s| {
			s.split(',')
				.map(str::trim)
				.filter(|r| !r.is_empty())
				.map(|r| r.to_owned().into_boxed_str())
				.collect()
		})
		.unwrap_or_default();
	Some(AuthCtx { user_id: UserId(user_id), roles })
}

/// Attach identity and request id when present; never rejects.
pub async fn optional_auth(mut req: Request, next: Next) -> Response {
	if let Some(req_id) = header_str(&req, "x-request-id") {
		let req_id = RequestId(req_id.to_owned());
		req.extensions_mut().insert(req_id);
	}
	if let Some(auth) = auth_from_headers(&req) {
		req.extensions_mut().insert(Auth(auth));
	}
	next.run(req).await
}

/// Reject requests that carry no identity.
pub async fn require_auth(req: Request, next: Next) -> Result<Response, Error> {
	if req.extensions().get::<Auth>().is_none() {
		return Err(Error::PermissionDenied);
	}
	Ok(next.run(req).await)
}

// vim: ts=4
