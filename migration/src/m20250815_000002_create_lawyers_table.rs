use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lawyers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lawyers::BarCouncilId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lawyers::Name).string().not_null())
                    .col(ColumnDef::new(Lawyers::PreferredCaseTypes).json().not_null())
                    .col(ColumnDef::new(Lawyers::Fees).big_integer().not_null())
                    .col(ColumnDef::new(Lawyers::YearsOfExperience).integer().not_null())
                    .col(ColumnDef::new(Lawyers::AverageRating).double())
                    .col(
                        ColumnDef::new(Lawyers::ReviewCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lawyers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Lawyers {
    Table,
    BarCouncilId,
    Name,
    PreferredCaseTypes,
    Fees,
    YearsOfExperience,
    AverageRating,
    ReviewCount,
}
