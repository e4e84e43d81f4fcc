use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Courses::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text())
                    .col(ColumnDef::new(Courses::Credits).integer().not_null())
                    .col(ColumnDef::new(Courses::Department).string().not_null())
                    .col(ColumnDef::new(Courses::Level).integer().not_null())
                    .col(ColumnDef::new(Courses::OfferedTerms).json().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create prerequisites table
        manager
            .create_table(
                Table::create()
                    .table(Prerequisites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prerequisites::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prerequisites::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(Prerequisites::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Prerequisites::TargetCode)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Prerequisites::GroupId).string())
                    .col(ColumnDef::new(Prerequisites::MinGrade).string())
                    .col(
                        ColumnDef::new(Prerequisites::Concurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Prerequisites::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Prerequisites::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-prerequisites-course_id")
                            .from(Prerequisites::Table, Prerequisites::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create clubs table
        manager
            .create_table(
                Table::create()
                    .table(Clubs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Clubs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Clubs::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Clubs::Description).text())
                    .col(ColumnDef::new(Clubs::Category).string().not_null())
                    .col(ColumnDef::new(Clubs::Tags).json().not_null())
                    .col(ColumnDef::new(Clubs::Email).string())
                    .col(ColumnDef::new(Clubs::Website).string())
                    .col(ColumnDef::new(Clubs::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Clubs::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prerequisites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Clubs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Code,
    Title,
    Description,
    Credits,
    Department,
    Level,
    OfferedTerms,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Prerequisites {
    Table,
    Id,
    CourseId,
    Position,
    TargetCode,
    GroupId,
    MinGrade,
    Concurrent,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Clubs {
    Table,
    Id,
    Name,
    Description,
    Category,
    Tags,
    Email,
    Website,
    CreatedAt,
    UpdatedAt,
}
