//! Access-control trigger wiring
//!
//! The node-access recomputation and the route rebuild are host-platform
//! operations. This standalone server has no surrounding platform, so the
//! adapter only records that the triggers fired.

use async_trait::async_trait;
use tracing::info;

use content_filter_types::access_adapter::AccessAdapter;
use content_filter_types::error::CfResult;

#[derive(Debug)]
pub struct LogAccessAdapter;

#[async_trait]
impl AccessAdapter for LogAccessAdapter {
	async fn rebuild_node_access(&self, force: bool) -> CfResult<()> {
		info!("Node access rebuild triggered (force: {})", force);
		Ok(())
	}

	async fn rebuild_routes(&self) -> CfResult<()> {
		info!("Route rebuild triggered");
		Ok(())
	}
}

// vim: ts=4
