pub use crate::error::{CfResult, Error};
pub use crate::types::{ApiResponse, DisplayStyle, TermId, Timestamp, UserId, VocabularySelection};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
