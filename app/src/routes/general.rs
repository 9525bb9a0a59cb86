use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::general::{
        comments_of_task, find_user_by_email, get_comment, get_task, get_user, list_comments,
        list_tasks, list_users, page_comments, page_tasks, page_users, tasks_by_author,
        tasks_by_performer,
    },
};

pub fn general_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", get(list_tasks))
        .route("/tasks/:id", get(get_task))
        .route("/tasks/author/:id", get(tasks_by_author))
        .route("/tasks/performer/:id", get(tasks_by_performer))
        .route("/pageable_tasks", get(page_tasks))
        .route("/comments", get(list_comments))
        .route("/comments/:id", get(get_comment))
        .route("/comments/task/:id", get(comments_of_task))
        .route("/pageable_comments", get(page_comments))
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
        .route("/users/find_by_email", get(find_user_by_email))
        .route("/pageable_users", get(page_users))
}
