use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use super::{begin_read_only, error::ServiceError, user::check_page};
use crate::{
    dto::{comment::CommentDto, page::Page},
    mappers::comment::to_dto,
    repos::{comments::CommentsRepo, tasks::TasksRepo},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// A comment only exists attached to an existing task. `user_id` on the
    /// transfer object names the author and is set by the caller.
    pub async fn create(&self, comment: CommentDto, task_id: i32) -> Result<CommentDto, ServiceError> {
        info!("createComment(): task={} {:?}", task_id, comment);
        let txn = self.db.begin().await?;
        TasksRepo::new(&txn)
            .find(task_id)
            .await?
            .ok_or_else(|| ServiceError::task_not_found(task_id))?;
        let created = CommentsRepo::new(&txn)
            .create(comment.text, task_id, comment.user_id)
            .await?;
        txn.commit().await?;

        Ok(to_dto(created))
    }

    pub async fn get(&self, comment_id: i32) -> Result<CommentDto, ServiceError> {
        let comment = CommentsRepo::new(self.db)
            .find(comment_id)
            .await?
            .ok_or_else(|| ServiceError::comment_not_found(comment_id))?;
        info!("getCommentById(): {}", comment_id);

        Ok(to_dto(comment))
    }

    pub async fn list_all(&self) -> Result<Vec<CommentDto>, ServiceError> {
        let comments = CommentsRepo::new(self.db).get_all().await?;
        info!("getAllComments()");

        Ok(comments.into_iter().map(to_dto).collect())
    }

    pub async fn list_for_task(&self, task_id: i32) -> Result<Vec<CommentDto>, ServiceError> {
        let txn = begin_read_only(self.db).await?;
        TasksRepo::new(&txn)
            .find(task_id)
            .await?
            .ok_or_else(|| ServiceError::task_not_found(task_id))?;
        let comments = CommentsRepo::new(&txn).get_for_task(task_id).await?;
        txn.commit().await?;
        info!("getAllCommentsOfTask(): {}", task_id);

        Ok(comments.into_iter().map(to_dto).collect())
    }

    pub async fn list_paged(&self, page: u64, size: u64) -> Result<Page<CommentDto>, ServiceError> {
        check_page(page, size)?;

        let txn = begin_read_only(self.db).await?;
        let slice = CommentsRepo::new(&txn).get_page(page, size).await?;
        txn.commit().await?;
        info!("findAllCommentsNativeWithPagination(): page={} size={}", page, size);

        Ok(Page::from_slice(slice, page, size, to_dto))
    }

    /// Only the text changes; task and author stay as they were.
    pub async fn update(&self, comment_id: i32, details: CommentDto) -> Result<CommentDto, ServiceError> {
        let txn = self.db.begin().await?;
        let repo = CommentsRepo::new(&txn);
        let comment = repo
            .find(comment_id)
            .await?
            .ok_or_else(|| ServiceError::comment_not_found(comment_id))?;
        let updated = repo.change_text(comment, details.text).await?;
        txn.commit().await?;
        info!("updateComment(): {:?}", updated);

        Ok(to_dto(updated))
    }

    pub async fn delete(&self, comment_id: i32) -> Result<CommentDto, ServiceError> {
        let txn = self.db.begin().await?;
        let repo = CommentsRepo::new(&txn);
        let comment = repo
            .find(comment_id)
            .await?
            .ok_or_else(|| ServiceError::comment_not_found(comment_id))?;
        repo.delete(comment_id).await?;
        txn.commit().await?;
        info!("deleteComment(): {:?}", comment);

        Ok(to_dto(comment))
    }
}
