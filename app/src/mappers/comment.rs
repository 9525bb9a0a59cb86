use crate::{dto::comment::CommentDto, models::comment::Model as Comment};

pub fn to_dto(comment: Comment) -> CommentDto {
    CommentDto {
        comment_id: Some(comment.comment_id),
        text: comment.text,
        task_id: Some(comment.task_id),
        user_id: comment.user_id,
    }
}

pub fn to_entity(dto: &CommentDto) -> Comment {
    Comment {
        comment_id: dto.comment_id.unwrap_or_default(),
        text: dto.text.clone(),
        task_id: dto.task_id.unwrap_or_default(),
        user_id: dto.user_id,
    }
}
