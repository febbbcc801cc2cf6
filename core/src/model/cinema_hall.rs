use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "cinema_halls")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i64,
	pub name: String,
	pub rows: i32,
	pub seats_in_row: i32,
}

impl Model {
	pub fn capacity(&self) -> i64 {
		self.rows as i64 * self.seats_in_row as i64
	}
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_many = "super::movie_session::Entity")]
	MovieSessions,
}

impl Related<super::movie_session::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::MovieSessions.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod test {
	#[test]
	fn capacity_is_rows_times_seats() {
		let hall = super::Model {
			id: 1,
			name: "blue".to_string(),
			rows: 5,
			seats_in_row: 10,
		};
		assert_eq!(hall.capacity(), 50);
	}
}
