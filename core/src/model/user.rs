use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i64,
	#[sea_orm(unique)]
	pub username: String,
	/// sha256 digest of the password
	pub password: String,
	pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_many = "super::order::Entity")]
	Orders,
	#[sea_orm(has_many = "super::session::Entity")]
	Sessions,
}

impl Related<super::order::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Orders.def()
	}
}

impl Related<super::session::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Sessions.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}
