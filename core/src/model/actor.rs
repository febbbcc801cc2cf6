use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "actors")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i64,
	pub first_name: String,
	pub last_name: String,
}

impl Model {
	pub fn full_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_many = "super::movie_actor::Entity")]
	MovieActors,
}

impl Related<super::movie_actor::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::MovieActors.def()
	}
}

impl Related<super::movie::Entity> for Entity {
	fn to() -> RelationDef {
		super::movie_actor::Relation::Movies.def()
	}

	fn via() -> Option<RelationDef> {
		Some(super::movie_actor::Relation::Actors.def().rev())
	}
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod test {
	#[test]
	fn full_name_joins_with_single_space() {
		let actor = super::Model {
			id: 1,
			first_name: "Maya".to_string(),
			last_name: "Hawke".to_string(),
		};
		assert_eq!(actor.full_name(), "Maya Hawke");
	}
}
