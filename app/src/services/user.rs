use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use super::{begin_read_only, error::ServiceError};
use crate::{
    dto::{page::Page, user::UserDto},
    mappers::user::to_dto,
    models::user::Role,
    repos::{comments::CommentsRepo, tasks::TasksRepo, users::UsersRepo},
    utils::password::hash_password,
};

/// What the authentication flow needs to check a login attempt.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user_id: i32,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Stores a new user; `password` in the transfer object is the plain secret.
    pub async fn create(&self, user: UserDto) -> Result<UserDto, ServiceError> {
        let role = user.role.parse::<Role>().map_err(ServiceError::Validation)?;
        let password_hash = hash_password(&user.password, self.bcrypt_cost)?;
        info!("createUser(): {} as {}", user.email, role);

        let txn = self.db.begin().await?;
        let created = UsersRepo::new(&txn)
            .create(user.email, password_hash, role)
            .await?;
        txn.commit().await?;

        Ok(to_dto(created))
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<UserDto, ServiceError> {
        let user = UsersRepo::new(self.db)
            .find(user_id)
            .await?
            .ok_or_else(|| ServiceError::user_not_found(user_id))?;
        info!("getUsersById(): {}", user_id);

        Ok(to_dto(user))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<UserDto, ServiceError> {
        let user = UsersRepo::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("User wasn't found with email {}", email)))?;
        info!("getUsersByEmail(): {}", email);

        Ok(to_dto(user))
    }

    pub async fn load_credentials(&self, email: &str) -> Result<Credentials, ServiceError> {
        let user = UsersRepo::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("{} not found", email)))?;

        Ok(Credentials {
            user_id: user.user_id,
            email: user.email,
            password_hash: user.password,
            role: user.role,
        })
    }

    pub async fn list_all(&self) -> Result<Vec<UserDto>, ServiceError> {
        let users = UsersRepo::new(self.db).get_all().await?;
        info!("getAllUsers()");

        Ok(users.into_iter().map(to_dto).collect())
    }

    pub async fn list_paged(&self, page: u64, size: u64) -> Result<Page<UserDto>, ServiceError> {
        check_page(page, size)?;

        let txn = begin_read_only(self.db).await?;
        let slice = UsersRepo::new(&txn).get_page(page, size).await?;
        txn.commit().await?;
        info!("findAllUsersNativeWithPagination(): page={} size={}", page, size);

        Ok(Page::from_slice(slice, page, size, to_dto))
    }

    /// Overwrites email, secret and role. The secret is hashed again.
    pub async fn update(&self, user_id: i32, details: UserDto) -> Result<UserDto, ServiceError> {
        let role = details.role.parse::<Role>().map_err(ServiceError::Validation)?;
        let password_hash = hash_password(&details.password, self.bcrypt_cost)?;

        let txn = self.db.begin().await?;
        let repo = UsersRepo::new(&txn);
        let user = repo
            .find(user_id)
            .await?
            .ok_or_else(|| ServiceError::user_not_found(user_id))?;
        let updated = repo.update(user, details.email, password_hash, role).await?;
        txn.commit().await?;
        info!("updateUser(): {}", updated.user_id);

        Ok(to_dto(updated))
    }

    /// Authored tasks (with their comments) go with the user, assigned tasks
    /// and written comments stay behind without the reference.
    pub async fn delete(&self, user_id: i32) -> Result<UserDto, ServiceError> {
        let txn = self.db.begin().await?;
        let user = UsersRepo::new(&txn)
            .find(user_id)
            .await?
            .ok_or_else(|| ServiceError::user_not_found(user_id))?;

        let tasks_repo = TasksRepo::new(&txn);
        let comments_repo = CommentsRepo::new(&txn);
        let authored: Vec<i32> = tasks_repo
            .get_by_author(user_id)
            .await?
            .into_iter()
            .map(|task| task.task_id)
            .collect();

        comments_repo.delete_for_tasks(authored).await?;
        let removed = tasks_repo.delete_by_author(user_id).await?;
        let detached = tasks_repo.unassign_performer(user_id).await?;
        comments_repo.detach_author(user_id).await?;
        UsersRepo::new(&txn).delete(user_id).await?;
        txn.commit().await?;

        info!(
            "deleteUser(): {} removed {} authored tasks, detached {} assigned tasks",
            user_id, removed, detached
        );

        Ok(to_dto(user))
    }
}

/// Rejects pages the store cannot address: an empty size, or an offset
/// (`page * size`) beyond the signed 64-bit range.
pub(crate) fn check_page(page: u64, size: u64) -> Result<(), ServiceError> {
    if size == 0 {
        return Err(ServiceError::Validation(
            "Page size must not be less than one".to_string(),
        ));
    }

    let in_range = page
        .checked_mul(size)
        .and_then(|offset| offset.checked_add(size))
        .is_some_and(|end| end <= i64::MAX as u64);
    if !in_range {
        return Err(ServiceError::Validation(
            "Page index or size is out of range".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dto::{comment::CommentDto, task::TaskDto},
        services::{comment::CommentService, task::TaskService},
        test_utils::{new_user, test_database, TEST_BCRYPT_COST},
        utils::password::verify_password,
    };
    use rstest::rstest;

    #[tokio::test]
    async fn test_create_hashes_password() {
        let db = test_database().await;
        let service = UserService::new(&db, TEST_BCRYPT_COST);

        let created = service.create(new_user("user1@mail.ru", "USER")).await.unwrap();

        assert!(created.user_id.is_some());
        assert_ne!(created.password, "password");
        assert!(verify_password("password", &created.password));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_a_validation_error() {
        let db = test_database().await;
        let service = UserService::new(&db, TEST_BCRYPT_COST);
        service.create(new_user("user1@mail.ru", "USER")).await.unwrap();

        let err = service.create(new_user("user1@mail.ru", "ADMIN")).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let db = test_database().await;
        let service = UserService::new(&db, TEST_BCRYPT_COST);

        let by_id = service.get_by_id(42).await.unwrap_err();
        let by_email = service.get_by_email("ghost@mail.ru").await.unwrap_err();

        assert!(matches!(by_id, ServiceError::NotFound(msg) if msg == "User wasn't found with id 42"));
        assert!(matches!(by_email, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_overwrites_email_secret_and_role() {
        let db = test_database().await;
        let service = UserService::new(&db, TEST_BCRYPT_COST);
        let created = service.create(new_user("user1@mail.ru", "USER")).await.unwrap();

        let mut details = new_user("renamed@mail.ru", "ADMIN");
        details.password = "new-secret".to_string();
        let updated = service.update(created.user_id.unwrap(), details).await.unwrap();

        assert_eq!(updated.email, "renamed@mail.ru");
        assert_eq!(updated.role, "ADMIN");
        let credentials = service.load_credentials("renamed@mail.ru").await.unwrap();
        assert!(verify_password("new-secret", &credentials.password_hash));
        assert_eq!(credentials.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_list_paged_orders_by_id() {
        let db = test_database().await;
        let service = UserService::new(&db, TEST_BCRYPT_COST);
        for email in ["a@mail.ru", "b@mail.ru", "c@mail.ru"] {
            service.create(new_user(email, "USER")).await.unwrap();
        }

        let page = service.list_paged(1, 2).await.unwrap();

        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].email, "c@mail.ru");
        assert!(service.list_paged(0, 0).await.is_err());
    }

    #[rstest]
    #[case(0, 1, true)]
    #[case(3, 50, true)]
    #[case(0, 0, false)]
    #[case(u64::MAX, 4, false)]
    #[case(i64::MAX as u64, 4, false)]
    #[case(0, u64::MAX, false)]
    #[case(1, i64::MAX as u64, false)]
    fn test_check_page_bounds(#[case] page: u64, #[case] size: u64, #[case] accepted: bool) {
        assert_eq!(check_page(page, size).is_ok(), accepted);
    }

    #[tokio::test]
    async fn test_list_paged_rejects_offset_overflow() {
        let db = test_database().await;
        let service = UserService::new(&db, TEST_BCRYPT_COST);

        let err = service.list_paged(i64::MAX as u64, 4).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(msg) if msg == "Page index or size is out of range"));
    }

    #[tokio::test]
    async fn test_delete_cascades_authored_and_detaches_assigned() {
        let db = test_database().await;
        let users = UserService::new(&db, TEST_BCRYPT_COST);
        let tasks = TaskService::new(&db);
        let comments = CommentService::new(&db);

        let author = users.create(new_user("author@mail.ru", "ADMIN")).await.unwrap();
        let performer = users.create(new_user("performer@mail.ru", "USER")).await.unwrap();
        let author_id = author.user_id.unwrap();
        let performer_id = performer.user_id.unwrap();

        let authored = tasks
            .create(TaskDto {
                title: "Authored".to_string(),
                description: "Written by the author".to_string(),
                status: "PENDING".to_string(),
                priority: "LOW".to_string(),
                author_id: Some(author_id),
                performer_id: Some(performer_id),
                ..Default::default()
            })
            .await
            .unwrap();
        let other_author = users.create(new_user("other@mail.ru", "ADMIN")).await.unwrap();
        let assigned = tasks
            .create(TaskDto {
                title: "Assigned".to_string(),
                description: "Performed by the author".to_string(),
                status: "PENDING".to_string(),
                priority: "LOW".to_string(),
                author_id: other_author.user_id,
                performer_id: Some(author_id),
                ..Default::default()
            })
            .await
            .unwrap();
        let authored_id = authored.task_id.unwrap();
        let assigned_id = assigned.task_id.unwrap();
        comments
            .create(
                CommentDto {
                    text: "on authored".to_string(),
                    ..Default::default()
                },
                authored_id,
            )
            .await
            .unwrap();

        let deleted = users.delete(author_id).await.unwrap();
        assert_eq!(deleted.email, "author@mail.ru");

        assert!(matches!(tasks.get(authored_id).await, Err(ServiceError::NotFound(_))));
        assert!(comments.list_all().await.unwrap().is_empty());
        let survivor = tasks.get(assigned_id).await.unwrap();
        assert_eq!(survivor.performer_id, None);
        assert!(matches!(users.get_by_id(author_id).await, Err(ServiceError::NotFound(_))));
    }
}
