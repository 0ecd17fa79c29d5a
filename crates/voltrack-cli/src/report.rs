use serde::Serialize;
use uuid::Uuid;

use voltrack_core::UtcDateTime;

/// Wrapper attached to every machine-readable output of the CLI.
///
/// The core library defines no wire format of its own; this envelope
/// belongs to the rendering collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct Report<T> {
    pub meta: ReportMeta,
    pub data: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub request_id: String,
    pub generated_at: UtcDateTime,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl<T> Report<T> {
    pub fn new(data: T) -> Self {
        Self {
            meta: ReportMeta {
                request_id: Uuid::new_v4().to_string(),
                generated_at: UtcDateTime::now(),
                warnings: Vec::new(),
            },
            data,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.meta.warnings.push(warning.into());
        self
    }
}
