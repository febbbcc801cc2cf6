use sea_orm_migration::prelude::*;

use super::m20260110_000001_create_catalog_tables::Movies;

#[derive(DeriveIden)]
pub enum CinemaHalls {
	Table,
	Id,
	Name,
	Rows,
	SeatsInRow,
}

#[derive(DeriveIden)]
pub enum MovieSessions {
	Table,
	Id,
	ShowTime,
	Movie,
	CinemaHall,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.create_table(
				Table::create()
					.table(CinemaHalls::Table)
					.comment("hall geometry: rows x seats_in_row is the capacity")
					.col(
						ColumnDef::new(CinemaHalls::Id)
							.big_integer()
							.not_null()
							.primary_key()
							.auto_increment()
					)
					.col(ColumnDef::new(CinemaHalls::Name).string().not_null())
					.col(ColumnDef::new(CinemaHalls::Rows).integer().not_null())
					.col(ColumnDef::new(CinemaHalls::SeatsInRow).integer().not_null())
					.to_owned()
			)
			.await?;

		manager
			.create_table(
				Table::create()
					.table(MovieSessions::Table)
					.comment("a movie showing in a hall at a time")
					.col(
						ColumnDef::new(MovieSessions::Id)
							.big_integer()
							.not_null()
							.primary_key()
							.auto_increment()
					)
					.col(ColumnDef::new(MovieSessions::ShowTime).timestamp_with_time_zone().not_null())
					.col(ColumnDef::new(MovieSessions::Movie).big_integer().not_null())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-movie-sessions-movie")
							.from(MovieSessions::Table, MovieSessions::Movie)
							.to(Movies::Table, Movies::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.col(ColumnDef::new(MovieSessions::CinemaHall).big_integer().not_null())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-movie-sessions-cinema-hall")
							.from(MovieSessions::Table, MovieSessions::CinemaHall)
							.to(CinemaHalls::Table, CinemaHalls::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.to_owned()
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("index-movie-sessions-show-time")
					.table(MovieSessions::Table)
					.col(MovieSessions::ShowTime)
					.to_owned()
			).await?;

		manager
			.create_index(
				Index::create()
					.name("index-movie-sessions-movie")
					.table(MovieSessions::Table)
					.col(MovieSessions::Movie)
					.to_owned()
			).await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.drop_table(Table::drop().table(MovieSessions::Table).to_owned())
			.await?;

		manager
			.drop_table(Table::drop().table(CinemaHalls::Table).to_owned())
			.await?;

		Ok(())
	}
}
