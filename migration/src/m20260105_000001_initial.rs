use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Identities {
    Table,
    Id,
    Email,
    PasswordHash,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum RegisterRequests {
    Table,
    Id,
    GymName,
    GymPhone,
    GymAddress,
    CompanyName,
    AdminName,
    AdminSurname1,
    AdminSurname2,
    AdminPhone,
    Email,
    RequestedPlan,
    State,
    Date,
    ReviewedBy,
    ReviewedAt,
    RejectionReason,
    GeneratedToken,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
    CompanyName,
    CompanyEmail,
    CompanyPhone,
    OwnerId,
    CurrentPlanId,
    SubscriptionEndDate,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TenantSubscriptions {
    Table,
    Id,
    TenantId,
    PlanId,
    Status,
    StartDate,
    EndDate,
    PaymentDate,
    PaymentAmount,
    AutoRenew,
    CancelledAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Gyms {
    Table,
    Id,
    TenantId,
    OwnerId,
    Code,
    Name,
    Email,
    Phone,
    Address,
    City,
    Country,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AdminUsers {
    Table,
    UserId,
    Email,
    Name,
    Surname1,
    Surname2,
    Phone,
    DateOfBirth,
    Roles,
    GymId,
    TenantId,
    Height,
    Weight,
    MembershipId,
    ProfilePictureUrl,
    Pin,
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
                    .table(Identities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Identities::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Identities::Email).string().not_null())
                    .col(ColumnDef::new(Identities::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Identities::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Identities::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_identities_email")
                    .table(Identities::Table)
                    .col(Identities::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RegisterRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RegisterRequests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RegisterRequests::GymName).string().not_null())
                    .col(ColumnDef::new(RegisterRequests::GymPhone).string().not_null())
                    .col(
                        ColumnDef::new(RegisterRequests::GymAddress)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegisterRequests::CompanyName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RegisterRequests::AdminName).string().not_null())
                    .col(
                        ColumnDef::new(RegisterRequests::AdminSurname1)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegisterRequests::AdminSurname2)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegisterRequests::AdminPhone)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RegisterRequests::Email).string().not_null())
                    .col(
                        ColumnDef::new(RegisterRequests::RequestedPlan)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RegisterRequests::State).string().not_null())
                    .col(
                        ColumnDef::new(RegisterRequests::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RegisterRequests::ReviewedBy).big_integer().null())
                    .col(
                        ColumnDef::new(RegisterRequests::ReviewedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RegisterRequests::RejectionReason)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RegisterRequests::GeneratedToken)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RegisterRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_register_requests_state")
                    .table(RegisterRequests::Table)
                    .col(RegisterRequests::State)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tenants::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tenants::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Tenants::CompanyName).string().not_null())
                    .col(ColumnDef::new(Tenants::CompanyEmail).string().not_null())
                    .col(ColumnDef::new(Tenants::CompanyPhone).string().not_null())
                    .col(ColumnDef::new(Tenants::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Tenants::CurrentPlanId).string().not_null())
                    .col(
                        ColumnDef::new(Tenants::SubscriptionEndDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tenants::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Tenants::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tenants_owner_id")
                    .table(Tenants::Table)
                    .col(Tenants::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TenantSubscriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TenantSubscriptions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TenantSubscriptions::TenantId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TenantSubscriptions::PlanId).string().not_null())
                    .col(ColumnDef::new(TenantSubscriptions::Status).string().not_null())
                    .col(
                        ColumnDef::new(TenantSubscriptions::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TenantSubscriptions::EndDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TenantSubscriptions::PaymentDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TenantSubscriptions::PaymentAmount)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TenantSubscriptions::AutoRenew)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(TenantSubscriptions::CancelledAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TenantSubscriptions::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tenant_subscriptions_tenant_id")
                    .table(TenantSubscriptions::Table)
                    .col(TenantSubscriptions::TenantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Gyms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gyms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Gyms::TenantId).string().not_null())
                    .col(ColumnDef::new(Gyms::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Gyms::Code).string().not_null())
                    .col(ColumnDef::new(Gyms::Name).string().not_null())
                    .col(ColumnDef::new(Gyms::Email).string().not_null())
                    .col(ColumnDef::new(Gyms::Phone).string().not_null())
                    .col(ColumnDef::new(Gyms::Address).string().not_null())
                    .col(ColumnDef::new(Gyms::City).string().not_null())
                    .col(ColumnDef::new(Gyms::Country).string().not_null())
                    .col(
                        ColumnDef::new(Gyms::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Gyms::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gyms_tenant_id")
                    .table(Gyms::Table)
                    .col(Gyms::TenantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gyms_code")
                    .table(Gyms::Table)
                    .col(Gyms::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AdminUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminUsers::UserId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AdminUsers::Email).string().not_null())
                    .col(ColumnDef::new(AdminUsers::Name).string().not_null())
                    .col(ColumnDef::new(AdminUsers::Surname1).string().not_null())
                    .col(ColumnDef::new(AdminUsers::Surname2).string().not_null())
                    .col(ColumnDef::new(AdminUsers::Phone).string().not_null())
                    .col(ColumnDef::new(AdminUsers::DateOfBirth).string().null())
                    .col(ColumnDef::new(AdminUsers::Roles).json().not_null())
                    .col(ColumnDef::new(AdminUsers::GymId).big_integer().not_null())
                    .col(ColumnDef::new(AdminUsers::TenantId).string().not_null())
                    .col(
                        ColumnDef::new(AdminUsers::Height)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AdminUsers::Weight)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(AdminUsers::MembershipId).string().null())
                    .col(ColumnDef::new(AdminUsers::ProfilePictureUrl).string().null())
                    .col(ColumnDef::new(AdminUsers::Pin).string().null())
                    .col(
                        ColumnDef::new(AdminUsers::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_admin_users_tenant_id")
                    .table(AdminUsers::Table)
                    .col(AdminUsers::TenantId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminUsers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Gyms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TenantSubscriptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tenants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RegisterRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Identities::Table).to_owned())
            .await
    }
}
