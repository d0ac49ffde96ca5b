//! Seam to the platform's access-control machinery.
//!
//! The node-access recomputation itself is owned by the host platform;
//! this module only triggers it.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::CfResult;

#[async_trait]
pub trait AccessAdapter: Debug + Send + Sync {
	/// Full recomputation of the node-access table. Long-running and
	/// blocking; callers await completion before responding.
	async fn rebuild_node_access(&self, force: bool) -> CfResult<()>;

	/// Route/menu rebuild, needed when the number of active access
	/// schemes changes.
	async fn rebuild_routes(&self) -> CfResult<()>;
}

// vim: ts=4
