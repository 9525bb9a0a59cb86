use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table("users")
                    .if_not_exists()
                    .col(pk_auto("user_id"))
                    .col(string("email"))
                    .col(string("password"))
                    .col(string("role"))
                    .to_owned(),
            )
            .await?;

        // tasks: authored tasks go with their author, assigned ones only lose the performer
        manager
            .create_table(
                Table::create()
                    .table("tasks")
                    .if_not_exists()
                    .col(pk_auto("task_id"))
                    .col(string("title"))
                    .col(text("description"))
                    .col(string("status"))
                    .col(string("priority"))
                    .col(integer_null("author_id"))
                    .col(integer_null("performer_id"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_author")
                            .from("tasks", "author_id")
                            .to("users", "user_id")
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_performer")
                            .from("tasks", "performer_id")
                            .to("users", "user_id")
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // comments
        manager
            .create_table(
                Table::create()
                    .table("comments")
                    .if_not_exists()
                    .col(pk_auto("comment_id"))
                    .col(text("text"))
                    .col(integer("task_id"))
                    .col(integer_null("user_id"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_tasks")
                            .from("comments", "task_id")
                            .to("tasks", "task_id")
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_users")
                            .from("comments", "user_id")
                            .to("users", "user_id")
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table("comments").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("tasks").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("users").to_owned())
            .await?;

        Ok(())
    }
}
