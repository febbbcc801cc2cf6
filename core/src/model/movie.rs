use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "movies")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i64,
	pub title: String,
	pub description: String,
	/// runtime in minutes
	pub duration: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_many = "super::movie_genre::Entity")]
	MovieGenres,
	#[sea_orm(has_many = "super::movie_actor::Entity")]
	MovieActors,
	#[sea_orm(has_many = "super::movie_session::Entity")]
	MovieSessions,
}

impl Related<super::movie_session::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::MovieSessions.def()
	}
}

impl Related<super::genre::Entity> for Entity {
	fn to() -> RelationDef {
		super::movie_genre::Relation::Genres.def()
	}

	fn via() -> Option<RelationDef> {
		Some(super::movie_genre::Relation::Movies.def().rev())
	}
}

impl Related<super::actor::Entity> for Entity {
	fn to() -> RelationDef {
		super::movie_actor::Relation::Actors.def()
	}

	fn via() -> Option<RelationDef> {
		Some(super::movie_actor::Relation::Movies.def().rev())
	}
}

impl ActiveModelBehavior for ActiveModel {}
