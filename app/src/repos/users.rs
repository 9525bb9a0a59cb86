use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use super::PageSlice;
use crate::models::user::{self, ActiveModel, Entity as UserEntity, Model as User, Role};

pub struct UsersRepo<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UsersRepo<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, email: String, password: String, role: Role) -> Result<User, DbErr> {
        let user_model = ActiveModel {
            email: Set(email),
            password: Set(password),
            role: Set(role),
            ..Default::default()
        };

        user_model.insert(self.db).await
    }

    pub async fn find(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        UserEntity::find_by_id(user_id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        UserEntity::find()
            .order_by_asc(user::Column::UserId)
            .all(self.db)
            .await
    }

    pub async fn get_page(&self, page: u64, size: u64) -> Result<PageSlice<User>, DbErr> {
        let paginator = UserEntity::find()
            .order_by_asc(user::Column::UserId)
            .paginate(self.db, size);
        let totals = paginator.num_items_and_pages().await?;
        let items = paginator.fetch_page(page).await?;

        Ok(PageSlice {
            items,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }

    pub async fn update(
        &self,
        user: User,
        email: String,
        password: String,
        role: Role,
    ) -> Result<User, DbErr> {
        let mut user: ActiveModel = user.into();
        user.email = Set(email);
        user.password = Set(password);
        user.role = Set(role);

        user.update(self.db).await
    }

    pub async fn delete(&self, user_id: i32) -> Result<(), DbErr> {
        UserEntity::delete_by_id(user_id).exec(self.db).await?;

        Ok(())
    }
}
