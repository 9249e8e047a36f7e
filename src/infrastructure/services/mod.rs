mod content_understanding;
mod document_intelligence;

pub use content_understanding::{ContentUnderstandingService, DocumentSource};
pub use document_intelligence::{searchable_pdf_filename, DocumentIntelligenceService};

/// Shared-secret header both service families authenticate with.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
