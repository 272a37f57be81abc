use std::path::PathBuf;
use std::sync::Arc;

use rigor_core::{Auditor, BibliographicLookup};

use crate::store::SubmissionStore;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub store: SubmissionStore,
    pub auditor: Auditor,
    /// Same client the auditor verifies citations with; recommendation
    /// queries go through it directly.
    pub lookup: Arc<dyn BibliographicLookup>,
    pub upload_dir: PathBuf,
}
