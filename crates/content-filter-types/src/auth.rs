//! Authenticated request identity.

use crate::types::UserId;

/// Identity attached to a request by the auth middleware.
#[derive(Clone, Debug)]
pub struct AuthCtx {
	pub user_id: UserId,
	pub roles: Vec<Box<str>>,
}

impl AuthCtx {
	pub fn anonymous() -> Self {
		Self { user_id: UserId::ANONYMOUS, roles: Vec::new() }
	}

	pub fn has_role(&self, role: &str) -> bool {
		self.roles.iter().any(|r| r.as_ref() == role)
	}
}

// vim: ts=4
