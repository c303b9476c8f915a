use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fees::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Fees::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Fees::LawyerName).string().not_null())
                    .col(ColumnDef::new(Fees::Fees).big_integer().not_null())
                    .col(ColumnDef::new(Fees::ConsultationFee).big_integer().not_null())
                    .col(ColumnDef::new(Fees::HearingFee).big_integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Fees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Fees {
    Table,
    Id,
    LawyerName,
    Fees,
    ConsultationFee,
    HearingFee,
}
