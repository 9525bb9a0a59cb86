use std::sync::Arc;

use axum::{
    routing::{post, put},
    Router,
};

use crate::{
    core::state::AppState,
    handlers::admin::{
        change_task_performer, change_task_priority, change_task_status, create_comment,
        create_task, delete_comment, delete_task, delete_user, update_comment, update_task,
        update_user,
    },
};

pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", post(create_task))
        .route("/tasks/:id", put(update_task).delete(delete_task))
        .route("/tasks/change_status/:id/:status", put(change_task_status))
        .route("/tasks/change_priority/:id/:priority", put(change_task_priority))
        .route("/tasks/:id/:performer_id", put(change_task_performer))
        .route("/comments/task/:id", post(create_comment))
        .route("/comments/:id", put(update_comment).delete(delete_comment))
        .route("/users/:id", put(update_user).delete(delete_user))
}
