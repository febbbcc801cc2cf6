use sea_orm_migration::prelude::*;

pub use sea_orm_migration::MigratorTrait;

mod m20260110_000001_create_catalog_tables;
mod m20260110_000002_create_halls_and_sessions;
mod m20260110_000003_create_users_and_auth;
mod m20260110_000004_create_orders_and_tickets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
	fn migrations() -> Vec<Box<dyn MigrationTrait>> {
		vec![
			Box::new(m20260110_000001_create_catalog_tables::Migration),
			Box::new(m20260110_000002_create_halls_and_sessions::Migration),
			Box::new(m20260110_000003_create_users_and_auth::Migration),
			Box::new(m20260110_000004_create_orders_and_tickets::Migration),
		]
	}
}
