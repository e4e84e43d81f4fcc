use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Course listings filter on department and level
        manager
            .create_index(
                Index::create()
                    .name("idx-courses-department")
                    .table(Courses::Table)
                    .col(Courses::Department)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-courses-level")
                    .table(Courses::Table)
                    .col(Courses::Level)
                    .to_owned(),
            )
            .await?;

        // Snapshot loading walks prerequisites by course
        manager
            .create_index(
                Index::create()
                    .name("idx-prerequisites-course_id")
                    .table(Prerequisites::Table)
                    .col(Prerequisites::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-clubs-category")
                    .table(Clubs::Table)
                    .col(Clubs::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx-courses-department")
                    .table(Courses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx-courses-level")
                    .table(Courses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx-prerequisites-course_id")
                    .table(Prerequisites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx-clubs-category")
                    .table(Clubs::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Department,
    Level,
}

#[derive(DeriveIden)]
enum Prerequisites {
    Table,
    CourseId,
}

#[derive(DeriveIden)]
enum Clubs {
    Table,
    Category,
}
