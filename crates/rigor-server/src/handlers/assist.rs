use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use rigor_core::Issue;
use rigor_core::corrections;
use rigor_core::recommend::{self, SearchCriteria};

use crate::error::ApiError;
use crate::models::{CorrectionsJson, RecommendationsJson};
use crate::state::AppState;

/// GET /api/submissions/{id}/corrections
///
/// Style scan over the extracted text plus section-level corrections
/// derived from the audit's citation and methodology issues. Requires a
/// completed audit.
pub async fn corrections(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<CorrectionsJson>, ApiError> {
    let record = state
        .store
        .get(id)
        .ok_or(ApiError::SubmissionNotFound(id))?;
    let stored = record.report.ok_or(ApiError::ReportNotReady(id))?;

    let issues: Vec<Issue> = stored
        .report
        .citations
        .issues
        .iter()
        .chain(stored.report.methodology.issues.iter())
        .cloned()
        .collect();
    let corrections = corrections::suggest_corrections(&stored.extracted_text, &issues);
    let summary = corrections::summarize(&corrections);

    Ok(Json(CorrectionsJson {
        submission_id: id,
        total_corrections: corrections.len(),
        corrections,
        summary,
    }))
}

/// GET /api/submissions/{id}/recommendations
///
/// Literature suggestions searched by the submission title. Does not
/// require a completed audit.
pub async fn recommendations(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<RecommendationsJson>, ApiError> {
    let record = state
        .store
        .get(id)
        .ok_or(ApiError::SubmissionNotFound(id))?;

    let recommendations =
        recommend::recommend_references(state.lookup.as_ref(), &record.title, &[]).await;

    Ok(Json(RecommendationsJson {
        submission_id: id,
        total_recommendations: recommendations.len(),
        recommendations,
        search_criteria: SearchCriteria {
            title: record.title,
            keywords: Vec::new(),
        },
    }))
}
