use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use super::PageSlice;
use crate::models::task::{self, ActiveModel, Entity as TaskEntity, Model as Task};

pub struct TasksRepo<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TasksRepo<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, task_model: ActiveModel) -> Result<Task, DbErr> {
        task_model.insert(self.db).await
    }

    pub async fn find(&self, task_id: i32) -> Result<Option<Task>, DbErr> {
        TaskEntity::find_by_id(task_id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<Task>, DbErr> {
        TaskEntity::find()
            .order_by_asc(task::Column::TaskId)
            .all(self.db)
            .await
    }

    pub async fn get_by_author(&self, author_id: i32) -> Result<Vec<Task>, DbErr> {
        TaskEntity::find()
            .filter(task::Column::AuthorId.eq(author_id))
            .order_by_asc(task::Column::TaskId)
            .all(self.db)
            .await
    }

    pub async fn get_assigned(&self, performer_id: i32) -> Result<Vec<Task>, DbErr> {
        TaskEntity::find()
            .filter(task::Column::PerformerId.eq(performer_id))
            .order_by_asc(task::Column::TaskId)
            .all(self.db)
            .await
    }

    pub async fn get_page(&self, page: u64, size: u64) -> Result<PageSlice<Task>, DbErr> {
        let paginator = TaskEntity::find()
            .order_by_asc(task::Column::TaskId)
            .paginate(self.db, size);
        let totals = paginator.num_items_and_pages().await?;
        let items = paginator.fetch_page(page).await?;

        Ok(PageSlice {
            items,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }

    pub async fn save(&self, task: ActiveModel) -> Result<Task, DbErr> {
        task.update(self.db).await
    }

    /// Detaches every task assigned to the performer instead of deleting it.
    pub async fn unassign_performer(&self, performer_id: i32) -> Result<u64, DbErr> {
        let result = TaskEntity::update_many()
            .set(ActiveModel {
                performer_id: Set(None),
                ..Default::default()
            })
            .filter(task::Column::PerformerId.eq(performer_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, task_id: i32) -> Result<(), DbErr> {
        TaskEntity::delete_by_id(task_id).exec(self.db).await?;

        Ok(())
    }

    pub async fn delete_by_author(&self, author_id: i32) -> Result<u64, DbErr> {
        let result = TaskEntity::delete_many()
            .filter(task::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
