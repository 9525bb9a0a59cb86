use sea_orm::ActiveValue::{NotSet, Set};

use crate::{
    dto::{comment::CommentDto, task::TaskDto},
    models::task::{ActiveModel, Model as Task},
};

pub fn to_dto(task: Task, comments: Vec<CommentDto>) -> TaskDto {
    TaskDto {
        task_id: Some(task.task_id),
        title: task.title,
        description: task.description,
        status: task.status,
        priority: task.priority,
        author_id: task.author_id,
        performer_id: task.performer_id,
        comment_list: comments,
    }
}

/// A transfer object without an id maps to id 0, which the store never assigns.
pub fn to_entity(dto: &TaskDto) -> Task {
    Task {
        task_id: dto.task_id.unwrap_or_default(),
        title: dto.title.clone(),
        description: dto.description.clone(),
        status: dto.status.clone(),
        priority: dto.priority.clone(),
        author_id: dto.author_id,
        performer_id: dto.performer_id,
    }
}

/// Insert form: the id is always left for the store to assign.
pub fn to_new_active_model(dto: TaskDto) -> ActiveModel {
    ActiveModel {
        task_id: NotSet,
        title: Set(dto.title),
        description: Set(dto.description),
        status: Set(dto.status),
        priority: Set(dto.priority),
        author_id: Set(dto.author_id),
        performer_id: Set(dto.performer_id),
    }
}
