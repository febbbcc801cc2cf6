use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "orders")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i64,
	pub user: i64,
	pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::user::Entity",
		from = "Column::User",
		to = "super::user::Column::Id",
		on_update = "Cascade",
		on_delete = "Cascade"
	)]
	Users,
}

impl Related<super::user::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Users.def()
	}
}

impl Related<super::ticket::Entity> for Entity {
	fn to() -> RelationDef {
		super::ticket::Relation::Orders.def().rev()
	}
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
	/// orders are only ever visible to their owner
	pub fn find_mine(user: i64) -> Select<Entity> {
		Entity::find().filter(Column::User.eq(user))
	}
}
