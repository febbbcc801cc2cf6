use sea_orm_migration::prelude::*;

use super::m20260110_000002_create_halls_and_sessions::MovieSessions;
use super::m20260110_000003_create_users_and_auth::Users;

#[derive(DeriveIden)]
pub enum Orders {
	Table,
	Id,
	User,
	CreatedAt,
}

#[derive(DeriveIden)]
pub enum Tickets {
	Table,
	Id,
	Row,
	Seat,
	MovieSession,
	Order,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.create_table(
				Table::create()
					.table(Orders::Table)
					.comment("a batch of tickets bought together by one user")
					.col(
						ColumnDef::new(Orders::Id)
							.big_integer()
							.not_null()
							.primary_key()
							.auto_increment()
					)
					.col(ColumnDef::new(Orders::User).big_integer().not_null())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-orders-user")
							.from(Orders::Table, Orders::User)
							.to(Users::Table, Users::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.col(ColumnDef::new(Orders::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
					.to_owned()
			)
			.await?;

		manager
			.create_index(Index::create().name("index-orders-user").table(Orders::Table).col(Orders::User).to_owned())
			.await?;

		manager
			.create_table(
				Table::create()
					.table(Tickets::Table)
					.comment("one reserved seat of one session, owned by an order")
					.col(
						ColumnDef::new(Tickets::Id)
							.big_integer()
							.not_null()
							.primary_key()
							.auto_increment()
					)
					.col(ColumnDef::new(Tickets::Row).integer().not_null())
					.col(ColumnDef::new(Tickets::Seat).integer().not_null())
					.col(ColumnDef::new(Tickets::MovieSession).big_integer().not_null())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-tickets-movie-session")
							.from(Tickets::Table, Tickets::MovieSession)
							.to(MovieSessions::Table, MovieSessions::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.col(ColumnDef::new(Tickets::Order).big_integer().not_null())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-tickets-order")
							.from(Tickets::Table, Tickets::Order)
							.to(Orders::Table, Orders::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.to_owned()
			)
			.await?;

		manager
			.create_index(Index::create().name("index-tickets-order").table(Tickets::Table).col(Tickets::Order).to_owned())
			.await?;

		// the double booking arbiter: concurrent orders may both pass the
		// in-app existence check, this index decides who wins
		manager
			.create_index(
				Index::create()
					.unique()
					.name("index-tickets-session-row-seat")
					.table(Tickets::Table)
					.col(Tickets::MovieSession)
					.col(Tickets::Row)
					.col(Tickets::Seat)
					.to_owned()
			).await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.drop_table(Table::drop().table(Tickets::Table).to_owned())
			.await?;

		manager
			.drop_table(Table::drop().table(Orders::Table).to_owned())
			.await?;

		Ok(())
	}
}
