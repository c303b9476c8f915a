use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cases::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cases::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Cases::CaseType).string().not_null())
                    .col(ColumnDef::new(Cases::CaseDescription).text().not_null())
                    .col(ColumnDef::new(Cases::LawyerName).string().not_null())
                    .col(ColumnDef::new(Cases::Address).string().not_null())
                    .col(ColumnDef::new(Cases::CourtType).string().not_null())
                    .col(ColumnDef::new(Cases::HearingDate).date().not_null())
                    .col(ColumnDef::new(Cases::Email).string().not_null())
                    // Nullable on purpose: cases imported from before
                    // status tracking have no value until setup backfill.
                    .col(ColumnDef::new(Cases::CurrentStatus).string())
                    .col(ColumnDef::new(Cases::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cases::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Cases {
    Table,
    Id,
    CaseType,
    CaseDescription,
    LawyerName,
    Address,
    CourtType,
    HearingDate,
    Email,
    CurrentStatus,
    CreatedAt,
}
