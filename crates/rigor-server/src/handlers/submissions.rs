use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use rigor_core::report::utc_timestamp;
use rigor_core::{AuditInput, AuditReport};
use rigor_extract::DocumentFormat;

use crate::error::ApiError;
use crate::models::SubmissionJson;
use crate::state::AppState;
use crate::store::{StoredReport, SubmissionRecord, SubmissionStatus};
use crate::upload;

/// POST /api/submissions
///
/// Stores the upload, registers the submission as `Processing`, and
/// kicks off the audit in the background. Responds 201 immediately;
/// clients poll the submission for the final status.
pub async fn create(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = upload::parse_submission(multipart)
        .await
        .map_err(ApiError::BadRequest)?;

    let id = state.store.allocate_id();
    let file_path = state
        .upload_dir
        .join(upload::saved_filename(id, &form.file.filename));
    std::fs::write(&file_path, &form.file.data)?;

    let dataset_path = match &form.dataset {
        Some(dataset) => {
            let path = state
                .upload_dir
                .join(upload::saved_dataset_filename(id, &dataset.filename));
            std::fs::write(&path, &dataset.data)?;
            Some(path)
        }
        None => None,
    };

    let input = AuditInput {
        format: DocumentFormat::from_filename(&form.file.filename),
        data: form.file.data,
        repository_url: form.github_url.clone(),
        dataset_path: dataset_path.clone(),
    };

    let record = SubmissionRecord {
        id,
        title: form.title,
        domain: form.domain,
        degree_level: form.degree_level,
        repository_url: form.github_url,
        file_path,
        dataset_path,
        status: SubmissionStatus::Processing,
        created_at: utc_timestamp(),
        report: None,
    };
    state.store.insert(record.clone());
    tracing::info!(id, title = %record.title, "submission accepted");

    spawn_audit(Arc::clone(&state), id, input);

    Ok((StatusCode::CREATED, Json(SubmissionJson::from(&record))))
}

/// Runs the audit in a background task. The outer task awaits the
/// worker's join handle so a panic inside the pipeline marks the
/// submission failed instead of leaving it in `Processing` forever.
fn spawn_audit(state: Arc<AppState>, id: u64, input: AuditInput) {
    tokio::spawn(async move {
        let worker = {
            let state = Arc::clone(&state);
            tokio::spawn(async move { state.auditor.audit(input).await })
        };

        match worker.await {
            Ok(outcome) => {
                let stored = StoredReport {
                    scores: outcome.scores,
                    report: outcome.report,
                    extracted_text: outcome.extracted_text,
                    created_at: utc_timestamp(),
                };
                if state.store.complete(id, stored) {
                    tracing::info!(id, "audit completed");
                } else {
                    tracing::error!(id, "audit finished for unknown submission");
                }
            }
            Err(error) => {
                tracing::error!(id, %error, "audit task failed");
                state.store.fail(id);
            }
        }
    });
}

/// GET /api/submissions
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<SubmissionJson>> {
    let submissions: Vec<SubmissionJson> =
        state.store.list().iter().map(SubmissionJson::from).collect();
    Json(submissions)
}

/// GET /api/submissions/{id}
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<SubmissionJson>, ApiError> {
    let record = state
        .store
        .get(id)
        .ok_or(ApiError::SubmissionNotFound(id))?;
    Ok(Json(SubmissionJson::from(&record)))
}

/// GET /api/submissions/{id}/report
///
/// The full audit report, available once the audit has completed.
pub async fn report(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<AuditReport>, ApiError> {
    let record = state
        .store
        .get(id)
        .ok_or(ApiError::SubmissionNotFound(id))?;
    let stored = record.report.ok_or(ApiError::ReportNotReady(id))?;
    Ok(Json(stored.report))
}
