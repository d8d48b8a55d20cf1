pub use sea_orm_migration::prelude::*;

mod m20260105_000001_initial;
mod m20260120_000001_add_subscription_payments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_initial::Migration),
            Box::new(m20260120_000001_add_subscription_payments::Migration),
        ]
    }
}
