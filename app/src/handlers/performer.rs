use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use tracing::info;

use super::caller;
use crate::{
    core::state::AppState,
    dto::{
        comment::CommentDto,
        task::{parse_status, TaskDto},
    },
    middlewares::auth::Principal,
    services::{comment::CommentService, task::TaskService},
    utils::{response::APIError, validation::ValidatedJson},
};

/// Checks that the task exists and is assigned to the caller, returning the
/// caller's id.
async fn ensure_performer(
    state: &AppState,
    principal: &Principal,
    task_id: i32,
) -> Result<Option<i32>, APIError> {
    let user = caller(state, principal).await?;
    let tasks = TaskService::new(&state.database);
    tasks.get(task_id).await?;

    let assigned = match user.user_id {
        Some(user_id) => tasks.list_by_performer(user_id).await?,
        None => Vec::new(),
    };
    if assigned.is_empty() {
        return Err(APIError::BadRequest(
            "This user doesn't have assigned tasks".to_string(),
        ));
    }
    if !assigned.iter().any(|task| task.task_id == Some(task_id)) {
        return Err(APIError::Forbidden(format!(
            "This user is not assigned to perform this task with id: {}",
            task_id
        )));
    }

    Ok(user.user_id)
}

pub async fn change_status(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path((id, status)): Path<(i32, String)>,
) -> Result<Json<TaskDto>, APIError> {
    info!(
        "Request to change the Status={} for Task with ID={} by Performer={}",
        status, id, principal.email
    );
    let status = parse_status(&status)
        .ok_or_else(|| APIError::BadRequest("Invalid status value".to_string()))?;
    ensure_performer(&state, &principal, id).await?;

    let updated = TaskService::new(&state.database)
        .change_status(id, status.to_string())
        .await?;

    Ok(Json(updated))
}

pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(task_id): Path<i32>,
    ValidatedJson(mut comment): ValidatedJson<CommentDto>,
) -> Result<Json<CommentDto>, APIError> {
    info!(
        "Request to add new Comment {:?} by Performer {}",
        comment, principal.email
    );
    comment.user_id = ensure_performer(&state, &principal, task_id).await?;

    let created = CommentService::new(&state.database)
        .create(comment, task_id)
        .await?;

    Ok(Json(created))
}
