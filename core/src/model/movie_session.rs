use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "movie_sessions")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i64,
	pub show_time: ChronoDateTimeUtc,
	pub movie: i64,
	pub cinema_hall: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::movie::Entity",
		from = "Column::Movie",
		to = "super::movie::Column::Id",
		on_update = "Cascade",
		on_delete = "Cascade"
	)]
	Movies,
	#[sea_orm(
		belongs_to = "super::cinema_hall::Entity",
		from = "Column::CinemaHall",
		to = "super::cinema_hall::Column::Id",
		on_update = "Cascade",
		on_delete = "Cascade"
	)]
	CinemaHalls,
}

impl Related<super::movie::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Movies.def()
	}
}

impl Related<super::cinema_hall::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::CinemaHalls.def()
	}
}

impl Related<super::ticket::Entity> for Entity {
	fn to() -> RelationDef {
		super::ticket::Relation::MovieSessions.def().rev()
	}
}

impl ActiveModelBehavior for ActiveModel {}
