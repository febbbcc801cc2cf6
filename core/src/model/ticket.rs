use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i64,
	/// 1-indexed
	pub row: i32,
	/// 1-indexed
	pub seat: i32,
	pub movie_session: i64,
	pub order: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::movie_session::Entity",
		from = "Column::MovieSession",
		to = "super::movie_session::Column::Id",
		on_update = "Cascade",
		on_delete = "Cascade"
	)]
	MovieSessions,
	#[sea_orm(
		belongs_to = "super::order::Entity",
		from = "Column::Order",
		to = "super::order::Column::Id",
		on_update = "Cascade",
		on_delete = "Cascade"
	)]
	Orders,
}

impl Related<super::movie_session::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::MovieSessions.def()
	}
}

impl Related<super::order::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Orders.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
	pub fn find_by_place(movie_session: i64, row: i32, seat: i32) -> Select<Entity> {
		Entity::find()
			.filter(Column::MovieSession.eq(movie_session))
			.filter(Column::Row.eq(row))
			.filter(Column::Seat.eq(seat))
	}
}
