pub use crate::app::App;
pub use content_filter_types::error::{CfResult, Error};
pub use content_filter_types::types::{
	ApiResponse, DisplayStyle, TermId, Timestamp, UserId, VocabularySelection,
};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
