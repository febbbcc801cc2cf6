use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Genres {
	Table,
	Id,
	Name,
}

#[derive(DeriveIden)]
pub enum Actors {
	Table,
	Id,
	FirstName,
	LastName,
}

#[derive(DeriveIden)]
pub enum Movies {
	Table,
	Id,
	Title,
	Description,
	Duration,
}

#[derive(DeriveIden)]
pub enum MovieGenres {
	Table,
	Id,
	Movie,
	Genre,
}

#[derive(DeriveIden)]
pub enum MovieActors {
	Table,
	Id,
	Movie,
	Actor,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.create_table(
				Table::create()
					.table(Genres::Table)
					.comment("movie genres, unique by name")
					.col(
						ColumnDef::new(Genres::Id)
							.big_integer()
							.not_null()
							.primary_key()
							.auto_increment()
					)
					.col(ColumnDef::new(Genres::Name).string().not_null().unique_key())
					.to_owned()
			)
			.await?;

		manager
			.create_table(
				Table::create()
					.table(Actors::Table)
					.col(
						ColumnDef::new(Actors::Id)
							.big_integer()
							.not_null()
							.primary_key()
							.auto_increment()
					)
					.col(ColumnDef::new(Actors::FirstName).string().not_null())
					.col(ColumnDef::new(Actors::LastName).string().not_null())
					.to_owned()
			)
			.await?;

		manager
			.create_table(
				Table::create()
					.table(Movies::Table)
					.col(
						ColumnDef::new(Movies::Id)
							.big_integer()
							.not_null()
							.primary_key()
							.auto_increment()
					)
					.col(ColumnDef::new(Movies::Title).string().not_null())
					.col(ColumnDef::new(Movies::Description).text().not_null())
					.col(ColumnDef::new(Movies::Duration).integer().not_null())
					.to_owned()
			)
			.await?;

		manager
			.create_table(
				Table::create()
					.table(MovieGenres::Table)
					.comment("m2m movies <-> genres")
					.col(
						ColumnDef::new(MovieGenres::Id)
							.big_integer()
							.not_null()
							.primary_key()
							.auto_increment()
					)
					.col(ColumnDef::new(MovieGenres::Movie).big_integer().not_null())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-movie-genres-movie")
							.from(MovieGenres::Table, MovieGenres::Movie)
							.to(Movies::Table, Movies::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.col(ColumnDef::new(MovieGenres::Genre).big_integer().not_null())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-movie-genres-genre")
							.from(MovieGenres::Table, MovieGenres::Genre)
							.to(Genres::Table, Genres::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.to_owned()
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.unique()
					.name("index-movie-genres-movie-genre")
					.table(MovieGenres::Table)
					.col(MovieGenres::Movie)
					.col(MovieGenres::Genre)
					.to_owned()
			).await?;

		manager
			.create_table(
				Table::create()
					.table(MovieActors::Table)
					.comment("m2m movies <-> actors")
					.col(
						ColumnDef::new(MovieActors::Id)
							.big_integer()
							.not_null()
							.primary_key()
							.auto_increment()
					)
					.col(ColumnDef::new(MovieActors::Movie).big_integer().not_null())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-movie-actors-movie")
							.from(MovieActors::Table, MovieActors::Movie)
							.to(Movies::Table, Movies::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.col(ColumnDef::new(MovieActors::Actor).big_integer().not_null())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-movie-actors-actor")
							.from(MovieActors::Table, MovieActors::Actor)
							.to(Actors::Table, Actors::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.to_owned()
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.unique()
					.name("index-movie-actors-movie-actor")
					.table(MovieActors::Table)
					.col(MovieActors::Movie)
					.col(MovieActors::Actor)
					.to_owned()
			).await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.drop_table(Table::drop().table(MovieActors::Table).to_owned())
			.await?;

		manager
			.drop_table(Table::drop().table(MovieGenres::Table).to_owned())
			.await?;

		manager
			.drop_table(Table::drop().table(Movies::Table).to_owned())
			.await?;

		manager
			.drop_table(Table::drop().table(Actors::Table).to_owned())
			.await?;

		manager
			.drop_table(Table::drop().table(Genres::Table).to_owned())
			.await?;

		Ok(())
	}
}
