use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum SubscriptionPayments {
    Table,
    Id,
    TenantId,
    SubscriptionId,
    Amount,
    HasPaid,
    PeriodStart,
    PeriodEnd,
    PaidAt,
    Status,
    Notes,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubscriptionPayments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubscriptionPayments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionPayments::TenantId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionPayments::SubscriptionId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionPayments::Amount)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionPayments::HasPaid)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SubscriptionPayments::PeriodStart)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionPayments::PeriodEnd)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionPayments::PaidAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(SubscriptionPayments::Status).string().not_null())
                    .col(ColumnDef::new(SubscriptionPayments::Notes).string().null())
                    .col(
                        ColumnDef::new(SubscriptionPayments::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subscription_payments_tenant_id")
                    .table(SubscriptionPayments::Table)
                    .col(SubscriptionPayments::TenantId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubscriptionPayments::Table).to_owned())
            .await
    }
}
