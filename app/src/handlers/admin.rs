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
        task::{parse_priority, parse_status, TaskDto},
        user::UserDto,
    },
    middlewares::auth::Principal,
    services::{comment::CommentService, task::TaskService, user::UserService},
    utils::{response::APIError, validation::ValidatedJson},
};

/// The calling administrator becomes the author.
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    ValidatedJson(mut task): ValidatedJson<TaskDto>,
) -> Result<Json<TaskDto>, APIError> {
    info!("Request to add new task: {:?}", task);
    task.author_id = caller(&state, &principal).await?.user_id;
    let created = TaskService::new(&state.database)
        .create(task.canonical())
        .await?;

    Ok(Json(created))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    ValidatedJson(task): ValidatedJson<TaskDto>,
) -> Result<Json<TaskDto>, APIError> {
    info!("Request to update the Task {}: {:?}", id, task);
    let updated = TaskService::new(&state.database)
        .update(id, task.canonical())
        .await?;

    Ok(Json(updated))
}

pub async fn change_task_status(
    State(state): State<Arc<AppState>>,
    Path((id, status)): Path<(i32, String)>,
) -> Result<Json<TaskDto>, APIError> {
    info!("Request to change the Status={} for Task with ID={}", status, id);
    let status = parse_status(&status)
        .ok_or_else(|| APIError::BadRequest("Invalid status value".to_string()))?;
    let updated = TaskService::new(&state.database)
        .change_status(id, status.to_string())
        .await?;

    Ok(Json(updated))
}

pub async fn change_task_priority(
    State(state): State<Arc<AppState>>,
    Path((id, priority)): Path<(i32, String)>,
) -> Result<Json<TaskDto>, APIError> {
    info!("Request to change the Priority={} for Task with ID={}", priority, id);
    let priority = parse_priority(&priority)
        .ok_or_else(|| APIError::BadRequest("Invalid priority value".to_string()))?;
    let updated = TaskService::new(&state.database)
        .change_priority(id, priority.to_string())
        .await?;

    Ok(Json(updated))
}

pub async fn change_task_performer(
    State(state): State<Arc<AppState>>,
    Path((id, performer_id)): Path<(i32, i32)>,
) -> Result<Json<TaskDto>, APIError> {
    info!("Request to change the Performer with ID={} for Task with ID={}", performer_id, id);
    let updated = TaskService::new(&state.database)
        .change_performer(id, performer_id)
        .await?;

    Ok(Json(updated))
}

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<TaskDto>, APIError> {
    info!("Request to delete the Task by id: {}", id);
    let deleted = TaskService::new(&state.database).delete(id).await?;

    Ok(Json(deleted))
}

/// The calling administrator becomes the comment's author.
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(task_id): Path<i32>,
    ValidatedJson(mut comment): ValidatedJson<CommentDto>,
) -> Result<Json<CommentDto>, APIError> {
    info!("Request to add new Comment to Task {}: {:?}", task_id, comment);
    comment.user_id = caller(&state, &principal).await?.user_id;
    let created = CommentService::new(&state.database)
        .create(comment, task_id)
        .await?;

    Ok(Json(created))
}

pub async fn update_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    ValidatedJson(comment): ValidatedJson<CommentDto>,
) -> Result<Json<CommentDto>, APIError> {
    info!("Request to update the Comment {}: {:?}", id, comment);
    let updated = CommentService::new(&state.database).update(id, comment).await?;

    Ok(Json(updated))
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<CommentDto>, APIError> {
    info!("Request to delete the Comment by id: {}", id);
    let deleted = CommentService::new(&state.database).delete(id).await?;

    Ok(Json(deleted))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    ValidatedJson(user): ValidatedJson<UserDto>,
) -> Result<Json<UserDto>, APIError> {
    info!("Request to update the User {}: {}", id, user.email);
    let updated = UserService::new(&state.database, state.config.bcrypt_cost)
        .update(id, user)
        .await?;

    Ok(Json(updated))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<UserDto>, APIError> {
    info!("Request to delete the User by id: {}", id);
    let deleted = UserService::new(&state.database, state.config.bcrypt_cost)
        .delete(id)
        .await?;

    Ok(Json(deleted))
}
