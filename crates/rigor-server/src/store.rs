//! In-memory submission registry.
//!
//! Submissions live in a concurrent map for the lifetime of the
//! process. Ids are handed out before insertion so upload filenames can
//! embed them.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use rigor_core::report::{AuditReport, ScoreSummary};

/// Lifecycle of a submission. Uploads enter as `Processing` because the
/// audit task is spawned before the creation response is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

/// Audit output retained for report, correction, and recommendation
/// requests.
#[derive(Debug, Clone)]
pub struct StoredReport {
    pub scores: ScoreSummary,
    pub report: AuditReport,
    pub extracted_text: String,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub id: u64,
    pub title: String,
    pub domain: String,
    pub degree_level: String,
    pub repository_url: Option<String>,
    pub file_path: PathBuf,
    pub dataset_path: Option<PathBuf>,
    pub status: SubmissionStatus,
    pub created_at: String,
    pub report: Option<StoredReport>,
}

#[derive(Debug)]
pub struct SubmissionStore {
    records: DashMap<u64, SubmissionRecord>,
    next_id: AtomicU64,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Reserves the next submission id.
    pub fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn insert(&self, record: SubmissionRecord) {
        self.records.insert(record.id, record);
    }

    pub fn get(&self, id: u64) -> Option<SubmissionRecord> {
        self.records.get(&id).map(|entry| entry.value().clone())
    }

    /// All submissions, newest first.
    pub fn list(&self) -> Vec<SubmissionRecord> {
        let mut records: Vec<SubmissionRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| b.id.cmp(&a.id));
        records
    }

    /// Attaches a finished report and flips the record to `Completed`.
    /// Returns false when the id is unknown.
    pub fn complete(&self, id: u64, report: StoredReport) -> bool {
        match self.records.get_mut(&id) {
            Some(mut record) => {
                record.status = SubmissionStatus::Completed;
                record.report = Some(report);
                true
            }
            None => false,
        }
    }

    /// Marks a submission as failed. Returns false when the id is
    /// unknown.
    pub fn fail(&self, id: u64) -> bool {
        match self.records.get_mut(&id) {
            Some(mut record) => {
                record.status = SubmissionStatus::Failed;
                true
            }
            None => false,
        }
    }
}

impl Default for SubmissionStore {
    fn default() -> Self {
        Self::new()
    }
}
