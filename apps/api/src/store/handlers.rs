use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::resume::{Resume, ResumeField, ResumePatch};
use crate::state::AppState;
use crate::store::ResumeSnapshot;

#[derive(Serialize)]
pub struct ResumeUpdateResponse {
    pub resume: Resume,
    pub revision: u64,
    pub updated_fields: Vec<ResumeField>,
}

#[derive(Deserialize)]
pub struct ChangesQuery {
    pub since: Option<u64>,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<Resume> {
    Json(state.store.get_resume())
}

/// PATCH /api/v1/resume
pub async fn handle_set_resume(
    State(state): State<AppState>,
    Json(patch): Json<ResumePatch>,
) -> Json<ResumeUpdateResponse> {
    let updated_fields = state.store.set_resume(patch);
    let snapshot = state.store.snapshot();
    Json(ResumeUpdateResponse {
        resume: snapshot.resume,
        revision: snapshot.revision,
        updated_fields,
    })
}

/// GET /api/v1/resume/changes?since=<revision>
/// Long-polls until the store revision differs from `since`. Without `since` the
/// current snapshot is returned immediately.
pub async fn handle_resume_changes(
    State(state): State<AppState>,
    Query(params): Query<ChangesQuery>,
) -> Json<ResumeSnapshot> {
    match params.since {
        Some(since) => Json(state.store.wait_for_revision(since).await),
        None => Json(state.store.snapshot()),
    }
}
