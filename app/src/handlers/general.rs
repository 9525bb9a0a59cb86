use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use tracing::info;

use super::caller;
use crate::{
    core::state::AppState,
    dto::{
        comment::CommentDto,
        page::{Page, PageParams},
        task::TaskDto,
        user::UserDto,
    },
    middlewares::auth::Principal,
    services::{comment::CommentService, task::TaskService, user::UserService},
    utils::response::APIError,
};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn welcome(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
) -> Result<String, APIError> {
    let user = caller(&state, &principal).await?;
    info!("welcome(): {}", user.email);

    Ok(format!("Welcome, {}!", user.email))
}

pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<TaskDto>, APIError> {
    info!("Request to find the Task by id: {}", id);
    let task = TaskService::new(&state.database).get(id).await?;

    Ok(Json(task))
}

pub async fn list_tasks(State(state): State<Arc<AppState>>) -> Result<Json<Vec<TaskDto>>, APIError> {
    info!("Request to find all Tasks");
    let tasks = TaskService::new(&state.database).list_all().await?;

    Ok(Json(tasks))
}

pub async fn page_tasks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<TaskDto>>, APIError> {
    info!("Request to find all Tasks with pagination: {:?}", params);
    let page = TaskService::new(&state.database)
        .list_paged(params.page, params.size)
        .await?;

    Ok(Json(page))
}

pub async fn tasks_by_author(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<TaskDto>>, APIError> {
    info!("Request to find all Tasks by authorId: {}", id);
    let tasks = TaskService::new(&state.database).list_by_author(id).await?;

    Ok(Json(tasks))
}

pub async fn tasks_by_performer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<TaskDto>>, APIError> {
    info!("Request to find all Tasks by performerId: {}", id);
    let tasks = TaskService::new(&state.database).list_by_performer(id).await?;

    Ok(Json(tasks))
}

pub async fn get_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<CommentDto>, APIError> {
    info!("Request to find the Comment by id: {}", id);
    let comment = CommentService::new(&state.database).get(id).await?;

    Ok(Json(comment))
}

pub async fn list_comments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CommentDto>>, APIError> {
    info!("Request to find all Comments");
    let comments = CommentService::new(&state.database).list_all().await?;

    Ok(Json(comments))
}

pub async fn comments_of_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<CommentDto>>, APIError> {
    info!("Request to find all Comments of Task with id: {}", id);
    let comments = CommentService::new(&state.database).list_for_task(id).await?;

    Ok(Json(comments))
}

pub async fn page_comments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<CommentDto>>, APIError> {
    info!("Request to find all Comments with pagination: {:?}", params);
    let page = CommentService::new(&state.database)
        .list_paged(params.page, params.size)
        .await?;

    Ok(Json(page))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<UserDto>, APIError> {
    info!("Request to find the User by id: {}", id);
    let user = UserService::new(&state.database, state.config.bcrypt_cost)
        .get_by_id(id)
        .await?;

    Ok(Json(user))
}

pub async fn find_user_by_email(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<UserDto>, APIError> {
    info!("Request to find the User by email: {}", query.email);
    let user = UserService::new(&state.database, state.config.bcrypt_cost)
        .get_by_email(&query.email)
        .await?;

    Ok(Json(user))
}

pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserDto>>, APIError> {
    info!("Request to find all Users");
    let users = UserService::new(&state.database, state.config.bcrypt_cost)
        .list_all()
        .await?;

    Ok(Json(users))
}

pub async fn page_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<UserDto>>, APIError> {
    info!("Request to find all Users with pagination: {:?}", params);
    let page = UserService::new(&state.database, state.config.bcrypt_cost)
        .list_paged(params.page, params.size)
        .await?;

    Ok(Json(page))
}
