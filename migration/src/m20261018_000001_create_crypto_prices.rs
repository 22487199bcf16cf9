use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Append-only log of price observations; id and fetched_at are assigned by the database
        manager
            .create_table(
                Table::create()
                    .table(CryptoPrices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CryptoPrices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CryptoPrices::Symbol).string().not_null())
                    .col(ColumnDef::new(CryptoPrices::PriceUsd).double().not_null())
                    .col(
                        ColumnDef::new(CryptoPrices::FetchedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_crypto_prices_symbol")
                    .table(CryptoPrices::Table)
                    .col(CryptoPrices::Symbol)
                    .to_owned(),
            )
            .await?;

        // Serves the history query: ORDER BY fetched_at DESC, id DESC
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_crypto_prices_fetched_at")
                    .table(CryptoPrices::Table)
                    .col(CryptoPrices::FetchedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CryptoPrices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CryptoPrices {
    Table,
    Id,
    Symbol,
    PriceUsd,
    FetchedAt,
}
