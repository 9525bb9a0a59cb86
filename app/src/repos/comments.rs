use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use super::PageSlice;
use crate::models::comment::{self, ActiveModel, Entity as CommentEntity, Model as Comment};

pub struct CommentsRepo<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentsRepo<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        text: String,
        task_id: i32,
        user_id: Option<i32>,
    ) -> Result<Comment, DbErr> {
        let comment_model = ActiveModel {
            text: Set(text),
            task_id: Set(task_id),
            user_id: Set(user_id),
            ..Default::default()
        };

        comment_model.insert(self.db).await
    }

    pub async fn find(&self, comment_id: i32) -> Result<Option<Comment>, DbErr> {
        CommentEntity::find_by_id(comment_id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<Comment>, DbErr> {
        CommentEntity::find()
            .order_by_asc(comment::Column::CommentId)
            .all(self.db)
            .await
    }

    pub async fn get_for_task(&self, task_id: i32) -> Result<Vec<Comment>, DbErr> {
        self.get_for_tasks(vec![task_id]).await
    }

    /// Comments of all the given tasks, ascending by id.
    pub async fn get_for_tasks(&self, task_ids: Vec<i32>) -> Result<Vec<Comment>, DbErr> {
        if task_ids.is_empty() {
            return Ok(Vec::new());
        }

        CommentEntity::find()
            .filter(comment::Column::TaskId.is_in(task_ids))
            .order_by_asc(comment::Column::CommentId)
            .all(self.db)
            .await
    }

    pub async fn get_page(&self, page: u64, size: u64) -> Result<PageSlice<Comment>, DbErr> {
        let paginator = CommentEntity::find()
            .order_by_asc(comment::Column::CommentId)
            .paginate(self.db, size);
        let totals = paginator.num_items_and_pages().await?;
        let items = paginator.fetch_page(page).await?;

        Ok(PageSlice {
            items,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }

    pub async fn change_text(&self, comment: Comment, text: String) -> Result<Comment, DbErr> {
        let mut comment: ActiveModel = comment.into();
        comment.text = Set(text);

        comment.update(self.db).await
    }

    pub async fn delete(&self, comment_id: i32) -> Result<(), DbErr> {
        CommentEntity::delete_by_id(comment_id).exec(self.db).await?;

        Ok(())
    }

    pub async fn delete_for_tasks(&self, task_ids: Vec<i32>) -> Result<u64, DbErr> {
        if task_ids.is_empty() {
            return Ok(0);
        }

        let result = CommentEntity::delete_many()
            .filter(comment::Column::TaskId.is_in(task_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Keeps the comments of a deleted user but forgets who wrote them.
    pub async fn detach_author(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = CommentEntity::update_many()
            .set(ActiveModel {
                user_id: Set(None),
                ..Default::default()
            })
            .filter(comment::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
