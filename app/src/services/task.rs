use std::collections::HashMap;

use sea_orm::{ActiveValue::Set, ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use tracing::info;

use super::{begin_read_only, error::ServiceError, user::check_page};
use crate::{
    dto::{comment::CommentDto, page::Page, task::TaskDto},
    mappers::{comment as comment_mapper, task as task_mapper},
    models::task::{ActiveModel, Model as Task},
    repos::{comments::CommentsRepo, tasks::TasksRepo, users::UsersRepo},
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

async fn find_task<C: ConnectionTrait>(db: &C, task_id: i32) -> Result<Task, ServiceError> {
    TasksRepo::new(db)
        .find(task_id)
        .await?
        .ok_or_else(|| ServiceError::task_not_found(task_id))
}

async fn ensure_user_exists<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<(), ServiceError> {
    UsersRepo::new(db)
        .find(user_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ServiceError::user_not_found(user_id))
}

/// Converts tasks to transfer objects with their comments, in one comment query.
async fn with_comments<C: ConnectionTrait>(db: &C, tasks: Vec<Task>) -> Result<Vec<TaskDto>, DbErr> {
    let task_ids = tasks.iter().map(|task| task.task_id).collect();
    let comments = CommentsRepo::new(db).get_for_tasks(task_ids).await?;

    let mut by_task: HashMap<i32, Vec<CommentDto>> = HashMap::new();
    for comment in comments {
        by_task
            .entry(comment.task_id)
            .or_default()
            .push(comment_mapper::to_dto(comment));
    }

    Ok(tasks
        .into_iter()
        .map(|task| {
            let comments = by_task.remove(&task.task_id).unwrap_or_default();
            task_mapper::to_dto(task, comments)
        })
        .collect())
}

async fn one_with_comments<C: ConnectionTrait>(db: &C, task: Task) -> Result<TaskDto, DbErr> {
    let comments = CommentsRepo::new(db)
        .get_for_task(task.task_id)
        .await?
        .into_iter()
        .map(comment_mapper::to_dto)
        .collect();

    Ok(task_mapper::to_dto(task, comments))
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, task: TaskDto) -> Result<TaskDto, ServiceError> {
        info!("createTask(): {:?}", task);
        let txn = self.db.begin().await?;
        if let Some(performer_id) = task.performer_id {
            ensure_user_exists(&txn, performer_id).await?;
        }
        let created = TasksRepo::new(&txn)
            .create(task_mapper::to_new_active_model(task))
            .await?;
        txn.commit().await?;

        Ok(task_mapper::to_dto(created, Vec::new()))
    }

    pub async fn get(&self, task_id: i32) -> Result<TaskDto, ServiceError> {
        let txn = begin_read_only(self.db).await?;
        let task = find_task(&txn, task_id).await?;
        let dto = one_with_comments(&txn, task).await?;
        txn.commit().await?;
        info!("getTaskById(): {}", task_id);

        Ok(dto)
    }

    pub async fn list_all(&self) -> Result<Vec<TaskDto>, ServiceError> {
        let txn = begin_read_only(self.db).await?;
        let tasks = TasksRepo::new(&txn).get_all().await?;
        let dtos = with_comments(&txn, tasks).await?;
        txn.commit().await?;
        info!("getAllTasks()");

        Ok(dtos)
    }

    pub async fn list_by_author(&self, author_id: i32) -> Result<Vec<TaskDto>, ServiceError> {
        let txn = begin_read_only(self.db).await?;
        let tasks = TasksRepo::new(&txn).get_by_author(author_id).await?;
        let dtos = with_comments(&txn, tasks).await?;
        txn.commit().await?;
        info!("getTasksByAuthorId(): {}", author_id);

        Ok(dtos)
    }

    pub async fn list_by_performer(&self, performer_id: i32) -> Result<Vec<TaskDto>, ServiceError> {
        let txn = begin_read_only(self.db).await?;
        let tasks = TasksRepo::new(&txn).get_assigned(performer_id).await?;
        let dtos = with_comments(&txn, tasks).await?;
        txn.commit().await?;
        info!("getTasksByPerformerId(): {}", performer_id);

        Ok(dtos)
    }

    /// Page `page` (from zero) of `size` tasks, ascending by id.
    pub async fn list_paged(&self, page: u64, size: u64) -> Result<Page<TaskDto>, ServiceError> {
        check_page(page, size)?;

        let txn = begin_read_only(self.db).await?;
        let slice = TasksRepo::new(&txn).get_page(page, size).await?;
        let total_items = slice.total_items;
        let total_pages = slice.total_pages;
        let content = with_comments(&txn, slice.items).await?;
        txn.commit().await?;
        info!("findAllTasksNativeWithPagination(): page={} size={}", page, size);

        Ok(Page {
            content,
            number: page,
            size,
            total_elements: total_items,
            total_pages,
        })
    }

    /// Any string is accepted; the value set is checked by the callers.
    pub async fn change_status(&self, task_id: i32, status: String) -> Result<TaskDto, ServiceError> {
        self.modify(task_id, |task| task.status = Set(status)).await
    }

    pub async fn change_priority(
        &self,
        task_id: i32,
        priority: String,
    ) -> Result<TaskDto, ServiceError> {
        self.modify(task_id, |task| task.priority = Set(priority)).await
    }

    pub async fn change_performer(
        &self,
        task_id: i32,
        performer_id: i32,
    ) -> Result<TaskDto, ServiceError> {
        let txn = self.db.begin().await?;
        let task = find_task(&txn, task_id).await?;
        ensure_user_exists(&txn, performer_id).await?;

        let mut task: ActiveModel = task.into();
        task.performer_id = Set(Some(performer_id));
        let updated = TasksRepo::new(&txn).save(task).await?;
        let dto = one_with_comments(&txn, updated).await?;
        txn.commit().await?;
        info!("changeTaskPerformer(): task={} performer={}", task_id, performer_id);

        Ok(dto)
    }

    /// Overwrites title, description, status, priority and performer.
    pub async fn update(&self, task_id: i32, details: TaskDto) -> Result<TaskDto, ServiceError> {
        let txn = self.db.begin().await?;
        let task = find_task(&txn, task_id).await?;
        if let Some(performer_id) = details.performer_id {
            ensure_user_exists(&txn, performer_id).await?;
        }

        let mut task: ActiveModel = task.into();
        task.title = Set(details.title);
        task.description = Set(details.description);
        task.status = Set(details.status);
        task.priority = Set(details.priority);
        task.performer_id = Set(details.performer_id);
        let updated = TasksRepo::new(&txn).save(task).await?;
        let dto = one_with_comments(&txn, updated).await?;
        txn.commit().await?;
        info!("updateTask(): {:?}", dto);

        Ok(dto)
    }

    /// Removes the task and its comments, returning what was removed.
    pub async fn delete(&self, task_id: i32) -> Result<TaskDto, ServiceError> {
        let txn = self.db.begin().await?;
        let task = find_task(&txn, task_id).await?;
        let dto = one_with_comments(&txn, task).await?;

        CommentsRepo::new(&txn).delete_for_tasks(vec![task_id]).await?;
        TasksRepo::new(&txn).delete(task_id).await?;
        txn.commit().await?;
        info!("deleteTask(): {:?}", dto);

        Ok(dto)
    }

    async fn modify(
        &self,
        task_id: i32,
        change: impl FnOnce(&mut ActiveModel),
    ) -> Result<TaskDto, ServiceError> {
        let txn = self.db.begin().await?;
        let task = find_task(&txn, task_id).await?;

        let mut task: ActiveModel = task.into();
        change(&mut task);
        let updated = TasksRepo::new(&txn).save(task).await?;
        let dto = one_with_comments(&txn, updated).await?;
        txn.commit().await?;
        info!("changeTask(): {:?}", dto);

        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        services::{comment::CommentService, user::UserService},
        test_utils::{new_task, new_user, test_database, TEST_BCRYPT_COST},
    };

    #[tokio::test]
    async fn test_create_assigns_id() {
        let db = test_database().await;
        let service = TaskService::new(&db);

        let first = service.create(new_task("T")).await.unwrap();
        let second = service.create(new_task("T2")).await.unwrap();

        assert!(first.task_id.is_some());
        assert!(second.task_id > first.task_id);
        assert_eq!(second.title, "T2");
    }

    #[tokio::test]
    async fn test_create_with_unknown_performer_is_not_found() {
        let db = test_database().await;
        let service = TaskService::new(&db);
        let mut task = new_task("Orphan");
        task.performer_id = Some(999);

        let err = service.create(task).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "User wasn't found with id 999"));
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_task_is_not_found() {
        let db = test_database().await;
        let service = TaskService::new(&db);

        let err = service.get(404).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Task wasn't found with id 404"));
    }

    #[tokio::test]
    async fn test_service_accepts_any_status_and_priority() {
        let db = test_database().await;
        let service = TaskService::new(&db);
        let task_id = service.create(new_task("T")).await.unwrap().task_id.unwrap();

        let with_status = service
            .change_status(task_id, "INVALID_STATUS".to_string())
            .await
            .unwrap();
        let with_priority = service
            .change_priority(task_id, "WHENEVER".to_string())
            .await
            .unwrap();

        assert_eq!(with_status.status, "INVALID_STATUS");
        assert_eq!(with_priority.priority, "WHENEVER");
        assert_eq!(with_priority.status, "INVALID_STATUS");
    }

    #[tokio::test]
    async fn test_change_performer_requires_existing_user() {
        let db = test_database().await;
        let service = TaskService::new(&db);
        let users = UserService::new(&db, TEST_BCRYPT_COST);
        let task_id = service.create(new_task("T")).await.unwrap().task_id.unwrap();
        let performer = users.create(new_user("user1@mail.ru", "USER")).await.unwrap();

        let missing = service.change_performer(task_id, 77).await.unwrap_err();
        assert!(matches!(missing, ServiceError::NotFound(msg) if msg == "User wasn't found with id 77"));

        let assigned = service
            .change_performer(task_id, performer.user_id.unwrap())
            .await
            .unwrap();
        assert_eq!(assigned.performer_id, performer.user_id);

        let listed = service
            .list_by_performer(performer.user_id.unwrap())
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].task_id, Some(task_id));
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_but_keeps_author() {
        let db = test_database().await;
        let service = TaskService::new(&db);
        let users = UserService::new(&db, TEST_BCRYPT_COST);
        let author = users.create(new_user("admin@mail.ru", "ADMIN")).await.unwrap();

        let mut task = new_task("Old");
        task.author_id = author.user_id;
        let task_id = service.create(task).await.unwrap().task_id.unwrap();

        let mut details = new_task("New");
        details.description = "Fresh description".to_string();
        details.status = "COMPLETED".to_string();
        details.priority = "HIGH".to_string();
        let updated = service.update(task_id, details).await.unwrap();

        assert_eq!(updated.title, "New");
        assert_eq!(updated.description, "Fresh description");
        assert_eq!(updated.status, "COMPLETED");
        assert_eq!(updated.priority, "HIGH");
        assert_eq!(updated.author_id, author.user_id);
        assert_eq!(service.list_by_author(author.user_id.unwrap()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_task_with_comments() {
        let db = test_database().await;
        let service = TaskService::new(&db);
        let comments = CommentService::new(&db);
        let task_id = service.create(new_task("T")).await.unwrap().task_id.unwrap();
        comments
            .create(
                CommentDto {
                    text: "first".to_string(),
                    ..Default::default()
                },
                task_id,
            )
            .await
            .unwrap();

        let deleted = service.delete(task_id).await.unwrap();

        assert_eq!(deleted.comment_list.len(), 1);
        assert!(matches!(service.get(task_id).await, Err(ServiceError::NotFound(_))));
        assert!(comments.list_all().await.unwrap().is_empty());
        assert!(matches!(service.delete(task_id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_paged_and_comments_in_listing() {
        let db = test_database().await;
        let service = TaskService::new(&db);
        let comments = CommentService::new(&db);
        for title in ["T1", "T2", "T3", "T4", "T5"] {
            service.create(new_task(title)).await.unwrap();
        }
        comments
            .create(
                CommentDto {
                    text: "on T2".to_string(),
                    ..Default::default()
                },
                2,
            )
            .await
            .unwrap();

        let page = service.list_paged(0, 2).await.unwrap();

        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
        let titles: Vec<&str> = page.content.iter().map(|task| task.title.as_str()).collect();
        assert_eq!(titles, ["T1", "T2"]);
        assert_eq!(page.content[1].comment_list[0].text, "on T2");
        assert!(page.content[0].comment_list.is_empty());
        assert_eq!(service.list_all().await.unwrap().len(), 5);
    }
}
