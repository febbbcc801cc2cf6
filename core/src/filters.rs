use sea_orm::{ColumnTrait, JoinType, QueryFilter, QuerySelect, RelationTrait, Select};
use sea_orm::sea_query::{Expr, Func};

use crate::errors::Error;
use crate::model::{genre, movie, movie_actor, movie_genre, movie_session};

/// recognized query options for the movie collection, each independently
/// applicable and ANDed together
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct MovieFilter {
	/// comma separated actor ids, membership match
	pub actors: Option<String>,
	/// case insensitive substring over genre names
	pub genres: Option<String>,
	/// case insensitive substring over the title
	pub title: Option<String>,
}

impl MovieFilter {
	pub fn actor_ids(&self) -> Result<Option<Vec<i64>>, Error> {
		// an empty query value means the filter was not given at all
		let Some(ref raw) = self.actors else { return Ok(None) };
		if raw.is_empty() {
			return Ok(None);
		}
		let mut ids = Vec::new();
		for chunk in raw.split(',') {
			ids.push(chunk.trim().parse::<i64>().map_err(|_| Error::Invalid("actors"))?);
		}
		Ok(Some(ids))
	}

	pub fn apply(&self, mut select: Select<movie::Entity>) -> Result<Select<movie::Entity>, Error> {
		// joins over m2m tables can multiply rows, dedup at the end
		let mut joined = false;

		if let Some(ids) = self.actor_ids()? {
			select = select
				.join(JoinType::InnerJoin, movie::Relation::MovieActors.def())
				.filter(movie_actor::Column::Actor.is_in(ids));
			joined = true;
		}

		if let Some(fragment) = self.genres.as_deref().filter(|f| !f.is_empty()) {
			select = select
				.join(JoinType::InnerJoin, movie::Relation::MovieGenres.def())
				.join(JoinType::InnerJoin, movie_genre::Relation::Genres.def())
				.filter(
					Expr::expr(Func::lower(Expr::col((genre::Entity, genre::Column::Name))))
						.like(format!("%{}%", fragment.to_lowercase()))
				);
			joined = true;
		}

		if let Some(fragment) = self.title.as_deref().filter(|f| !f.is_empty()) {
			select = select.filter(
				Expr::expr(Func::lower(Expr::col((movie::Entity, movie::Column::Title))))
					.like(format!("%{}%", fragment.to_lowercase()))
			);
		}

		if joined {
			select = select.distinct();
		}

		Ok(select)
	}
}

/// recognized query options for the movie session collection
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct SessionFilter {
	/// exact calendar date of show_time, YYYY-MM-DD
	pub date: Option<String>,
	/// movie id
	pub movie: Option<i64>,
}

impl SessionFilter {
	pub fn apply(&self, mut select: Select<movie_session::Entity>) -> Result<Select<movie_session::Entity>, Error> {
		if let Some(raw) = self.date.as_deref().filter(|d| !d.is_empty()) {
			let date = raw.parse::<chrono::NaiveDate>().map_err(|_| Error::Invalid("date"))?;
			let start = date.and_time(chrono::NaiveTime::MIN).and_utc();
			let end = date.succ_opt()
				.ok_or(Error::Invalid("date"))?
				.and_time(chrono::NaiveTime::MIN)
				.and_utc();
			select = select
				.filter(movie_session::Column::ShowTime.gte(start))
				.filter(movie_session::Column::ShowTime.lt(end));
		}

		if let Some(movie) = self.movie {
			select = select.filter(movie_session::Column::Movie.eq(movie));
		}

		Ok(select)
	}
}

#[cfg(test)]
mod test {
	use sea_orm::{DbBackend, EntityTrait, QueryTrait};
	use crate::model::{movie, movie_session};

	#[test]
	fn movie_filters_compose_and_dedup() {
		let filter = super::MovieFilter {
			actors: Some("1, 2".to_string()),
			genres: Some("Act".to_string()),
			title: Some("Ink".to_string()),
		};
		let sql = filter.apply(movie::Entity::find()).unwrap()
			.build(DbBackend::Sqlite)
			.to_string();
		assert!(sql.contains("DISTINCT"));
		assert!(sql.contains("%act%"));
		assert!(sql.contains("%ink%"));
		assert!(sql.contains("IN (1, 2)"));
		assert!(sql.contains("LOWER"));
	}

	#[test]
	fn malformed_actor_ids_are_rejected() {
		let filter = super::MovieFilter {
			actors: Some("1,zz".to_string()),
			..Default::default()
		};
		assert!(matches!(
			filter.apply(movie::Entity::find()),
			Err(crate::Error::Invalid("actors")),
		));
	}

	#[test]
	fn empty_values_mean_no_filter() {
		let filter = super::MovieFilter {
			actors: Some("".to_string()),
			genres: Some("".to_string()),
			title: Some("".to_string()),
		};
		let sql = filter.apply(movie::Entity::find()).unwrap()
			.build(DbBackend::Sqlite)
			.to_string();
		assert!(!sql.contains("JOIN"));
		assert!(!sql.contains("LIKE"));
		assert!(!sql.contains("DISTINCT"));

		let filter = super::SessionFilter {
			date: Some("".to_string()),
			movie: None,
		};
		let sql = filter.apply(movie_session::Entity::find()).unwrap()
			.build(DbBackend::Sqlite)
			.to_string();
		assert!(!sql.contains("WHERE"));
	}

	#[test]
	fn no_filters_no_distinct() {
		let sql = super::MovieFilter::default().apply(movie::Entity::find()).unwrap()
			.build(DbBackend::Sqlite)
			.to_string();
		assert!(!sql.contains("DISTINCT"));
		assert!(!sql.contains("JOIN"));
	}

	#[test]
	fn date_filter_is_a_day_wide_range() {
		let filter = super::SessionFilter {
			date: Some("2026-01-31".to_string()),
			movie: None,
		};
		let sql = filter.apply(movie_session::Entity::find()).unwrap()
			.build(DbBackend::Sqlite)
			.to_string();
		assert!(sql.contains("2026-01-31"));
		assert!(sql.contains("2026-02-01"));
	}

	#[test]
	fn bad_date_is_rejected() {
		let filter = super::SessionFilter {
			date: Some("not-a-date".to_string()),
			movie: None,
		};
		assert!(matches!(
			filter.apply(movie_session::Entity::find()),
			Err(crate::Error::Invalid("date")),
		));
	}
}
