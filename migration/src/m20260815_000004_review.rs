use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000002_user::Users, m20260815_000003_course::Courses};

static FK_REVIEW_COURSE_ID: &str = "fk_review_course_id";
static FK_REVIEW_USER_ID: &str = "fk_review_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(pk_auto(Reviews::Id))
                    .col(integer(Reviews::CourseId))
                    .col(integer(Reviews::UserId))
                    .col(integer(Reviews::Rating))
                    .col(text(Reviews::Text))
                    .col(timestamp(Reviews::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REVIEW_COURSE_ID)
                    .from_tbl(Reviews::Table)
                    .from_col(Reviews::CourseId)
                    .to_tbl(Courses::Table)
                    .to_col(Courses::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REVIEW_USER_ID)
                    .from_tbl(Reviews::Table)
                    .from_col(Reviews::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REVIEW_COURSE_ID)
                    .table(Reviews::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REVIEW_USER_ID)
                    .table(Reviews::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Reviews {
    Table,
    Id,
    CourseId,
    UserId,
    Rating,
    Text,
    CreatedAt,
}
