use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LawyerReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LawyerReviews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LawyerReviews::LawyerId).string().not_null())
                    .col(ColumnDef::new(LawyerReviews::Rating).integer().not_null())
                    .col(ColumnDef::new(LawyerReviews::Comment).text().not_null())
                    .col(ColumnDef::new(LawyerReviews::CaseId).uuid())
                    .col(ColumnDef::new(LawyerReviews::UserEmail).string().not_null())
                    .col(ColumnDef::new(LawyerReviews::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lawyer_reviews_lawyer_id")
                    .table(LawyerReviews::Table)
                    .col(LawyerReviews::LawyerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LawyerReviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LawyerReviews {
    Table,
    Id,
    LawyerId,
    Rating,
    Comment,
    CaseId,
    UserEmail,
    CreatedAt,
}
