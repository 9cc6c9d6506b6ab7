use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_category::Categories, m20260815_000002_user::Users};

static FK_COURSE_CATEGORY_ID: &str = "fk_course_category_id";
static FK_COURSE_AUTHOR_ID: &str = "fk_course_author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(pk_auto(Courses::Id))
                    .col(string(Courses::Name))
                    .col(integer(Courses::CategoryId))
                    .col(integer(Courses::AuthorId))
                    .col(text(Courses::ShortDesc))
                    .col(text(Courses::FullDesc))
                    .col(string_null(Courses::BackgroundImageId))
                    .col(integer(Courses::RatingSum).default(0))
                    .col(integer(Courses::RatingNum).default(0))
                    .col(timestamp(Courses::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COURSE_CATEGORY_ID)
                    .from_tbl(Courses::Table)
                    .from_col(Courses::CategoryId)
                    .to_tbl(Categories::Table)
                    .to_col(Categories::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COURSE_AUTHOR_ID)
                    .from_tbl(Courses::Table)
                    .from_col(Courses::AuthorId)
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
                    .name(FK_COURSE_CATEGORY_ID)
                    .table(Courses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COURSE_AUTHOR_ID)
                    .table(Courses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Courses {
    Table,
    Id,
    Name,
    CategoryId,
    AuthorId,
    ShortDesc,
    FullDesc,
    BackgroundImageId,
    RatingSum,
    RatingNum,
    CreatedAt,
}
