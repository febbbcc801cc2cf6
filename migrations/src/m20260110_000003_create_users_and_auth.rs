use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Users {
	Table,
	Id,
	Username,
	Password,
	Active,
}

#[derive(DeriveIden)]
pub enum Sessions {
	Table,
	Id,
	Secret,
	User,
	Expires,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.create_table(
				Table::create()
					.table(Users::Table)
					.col(
						ColumnDef::new(Users::Id)
							.big_integer()
							.not_null()
							.primary_key()
							.auto_increment()
					)
					.col(ColumnDef::new(Users::Username).string().not_null().unique_key())
					.col(ColumnDef::new(Users::Password).string().not_null())
					.col(ColumnDef::new(Users::Active).boolean().not_null().default(true))
					.to_owned()
			)
			.await?;

		manager
			.create_table(
				Table::create()
					.table(Sessions::Table)
					.comment("bearer login tokens")
					.col(
						ColumnDef::new(Sessions::Id)
							.big_integer()
							.not_null()
							.primary_key()
							.auto_increment()
					)
					.col(ColumnDef::new(Sessions::Secret).string().not_null().unique_key())
					.col(ColumnDef::new(Sessions::User).big_integer().not_null())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-sessions-user")
							.from(Sessions::Table, Sessions::User)
							.to(Users::Table, Users::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.col(ColumnDef::new(Sessions::Expires).timestamp_with_time_zone().not_null())
					.to_owned()
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("index-sessions-user")
					.table(Sessions::Table)
					.col(Sessions::User)
					.to_owned()
			).await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.drop_table(Table::drop().table(Sessions::Table).to_owned())
			.await?;

		manager
			.drop_table(Table::drop().table(Users::Table).to_owned())
			.await?;

		Ok(())
	}
}
