use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "movie_actors")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i64,
	pub movie: i64,
	pub actor: i64,
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
		belongs_to = "super::actor::Entity",
		from = "Column::Actor",
		to = "super::actor::Column::Id",
		on_update = "Cascade",
		on_delete = "Cascade"
	)]
	Actors,
}

impl Related<super::movie::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Movies.def()
	}
}

impl Related<super::actor::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Actors.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}
