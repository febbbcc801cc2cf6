use std::collections::BTreeSet;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{
	ActiveModelTrait,
	ActiveValue::{NotSet, Set},
	ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, LoaderTrait, ModelTrait,
	QueryFilter, QueryOrder, TransactionTrait,
};

use kassa::filters::MovieFilter;
use kassa::model::{actor, genre, movie, movie_actor, movie_genre};
use kassa::Context;

use crate::actors::ActorView;
use crate::genres::GenreView;
use crate::ApiResult;

/// list shape: related entities reduced to their slugs
#[derive(Debug, Clone, serde::Serialize)]
pub struct MovieListView {
	pub id: i64,
	pub title: String,
	pub description: String,
	pub duration: i32,
	pub genres: Vec<String>,
	pub actors: Vec<String>,
}

/// detail shape: related entities expanded to full objects
#[derive(Debug, Clone, serde::Serialize)]
pub struct MovieDetailView {
	pub id: i64,
	pub title: String,
	pub description: String,
	pub duration: i32,
	pub genres: Vec<GenreView>,
	pub actors: Vec<ActorView>,
}

/// mutation shape: related entities as id sets
#[derive(Debug, Clone, serde::Serialize)]
pub struct MovieView {
	pub id: i64,
	pub title: String,
	pub description: String,
	pub duration: i32,
	pub genres: Vec<i64>,
	pub actors: Vec<i64>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct MovieForm {
	pub title: String,
	pub description: String,
	pub duration: i32,
	#[serde(default)]
	pub genres: Vec<i64>,
	#[serde(default)]
	pub actors: Vec<i64>,
}

pub async fn list(
	State(ctx): State<Context>,
	Query(filter): Query<MovieFilter>,
) -> ApiResult<Json<Vec<MovieListView>>> {
	let movies = filter.apply(movie::Entity::find())?
		.order_by_asc(movie::Column::Id)
		.all(ctx.db())
		.await?;

	let genres = movies.load_many_to_many(genre::Entity, movie_genre::Entity, ctx.db()).await?;
	let actors = movies.load_many_to_many(actor::Entity, movie_actor::Entity, ctx.db()).await?;

	let out = movies.into_iter()
		.zip(genres)
		.zip(actors)
		.map(|((movie, genres), actors)| MovieListView {
			id: movie.id,
			title: movie.title,
			description: movie.description,
			duration: movie.duration,
			genres: genres.into_iter().map(|g| g.name).collect(),
			actors: actors.iter().map(|a| a.full_name()).collect(),
		})
		.collect();

	Ok(Json(out))
}

pub async fn view(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
) -> ApiResult<Json<MovieDetailView>> {
	let movie = movie::Entity::find_by_id(id)
		.one(ctx.db())
		.await?
		.ok_or(kassa::Error::NotFound("movie"))?;

	let genres = movie.find_related(genre::Entity).all(ctx.db()).await?;
	let actors = movie.find_related(actor::Entity).all(ctx.db()).await?;

	Ok(Json(MovieDetailView {
		id: movie.id,
		title: movie.title,
		description: movie.description,
		duration: movie.duration,
		genres: genres.into_iter().map(GenreView::from).collect(),
		actors: actors.into_iter().map(ActorView::from).collect(),
	}))
}

async fn existing_genres(db: &impl ConnectionTrait, ids: &[i64]) -> Result<Vec<i64>, kassa::Error> {
	let wanted = ids.iter().copied().collect::<BTreeSet<_>>();
	let found = genre::Entity::find()
		.filter(genre::Column::Id.is_in(wanted.iter().copied()))
		.all(db)
		.await?;
	if found.len() != wanted.len() {
		return Err(kassa::Error::NotFound("genre"));
	}
	Ok(wanted.into_iter().collect())
}

async fn existing_actors(db: &impl ConnectionTrait, ids: &[i64]) -> Result<Vec<i64>, kassa::Error> {
	let wanted = ids.iter().copied().collect::<BTreeSet<_>>();
	let found = actor::Entity::find()
		.filter(actor::Column::Id.is_in(wanted.iter().copied()))
		.all(db)
		.await?;
	if found.len() != wanted.len() {
		return Err(kassa::Error::NotFound("actor"));
	}
	Ok(wanted.into_iter().collect())
}

/// full replacement of a movie's m2m rows, caller provides the transaction
async fn set_relations(
	tx: &impl ConnectionTrait,
	movie: i64,
	genres: &[i64],
	actors: &[i64],
) -> Result<(), kassa::Error> {
	movie_genre::Entity::delete_many()
		.filter(movie_genre::Column::Movie.eq(movie))
		.exec(tx)
		.await?;
	movie_actor::Entity::delete_many()
		.filter(movie_actor::Column::Movie.eq(movie))
		.exec(tx)
		.await?;

	if !genres.is_empty() {
		movie_genre::Entity::insert_many(
			genres.iter().map(|genre| movie_genre::ActiveModel {
				id: NotSet,
				movie: Set(movie),
				genre: Set(*genre),
			})
		)
			.exec(tx)
			.await?;
	}

	if !actors.is_empty() {
		movie_actor::Entity::insert_many(
			actors.iter().map(|actor| movie_actor::ActiveModel {
				id: NotSet,
				movie: Set(movie),
				actor: Set(*actor),
			})
		)
			.exec(tx)
			.await?;
	}

	Ok(())
}

pub async fn create(
	State(ctx): State<Context>,
	Json(form): Json<MovieForm>,
) -> ApiResult<(StatusCode, Json<MovieView>)> {
	let tx = ctx.db().begin().await.map_err(kassa::Error::from)?;

	let genres = existing_genres(&tx, &form.genres).await?;
	let actors = existing_actors(&tx, &form.actors).await?;

	let movie = movie::ActiveModel {
		id: NotSet,
		title: Set(form.title),
		description: Set(form.description),
		duration: Set(form.duration),
	}
		.insert(&tx)
		.await
		.map_err(kassa::Error::from)?;

	set_relations(&tx, movie.id, &genres, &actors).await?;

	tx.commit().await.map_err(kassa::Error::from)?;

	Ok((StatusCode::CREATED, Json(MovieView {
		id: movie.id,
		title: movie.title,
		description: movie.description,
		duration: movie.duration,
		genres,
		actors,
	})))
}

pub async fn update(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
	Json(form): Json<MovieForm>,
) -> ApiResult<Json<MovieView>> {
	let tx = ctx.db().begin().await.map_err(kassa::Error::from)?;

	let movie = movie::Entity::find_by_id(id)
		.one(&tx)
		.await
		.map_err(kassa::Error::from)?
		.ok_or(kassa::Error::NotFound("movie"))?;

	let genres = existing_genres(&tx, &form.genres).await?;
	let actors = existing_actors(&tx, &form.actors).await?;

	let mut movie = movie.into_active_model();
	movie.title = Set(form.title);
	movie.description = Set(form.description);
	movie.duration = Set(form.duration);
	let movie = movie.update(&tx).await.map_err(kassa::Error::from)?;

	set_relations(&tx, movie.id, &genres, &actors).await?;

	tx.commit().await.map_err(kassa::Error::from)?;

	Ok(Json(MovieView {
		id: movie.id,
		title: movie.title,
		description: movie.description,
		duration: movie.duration,
		genres,
		actors,
	}))
}

pub async fn remove(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
	let res = movie::Entity::delete_by_id(id).exec(ctx.db()).await?;
	if res.rows_affected == 0 {
		return Err(kassa::Error::NotFound("movie").into());
	}
	Ok(StatusCode::NO_CONTENT)
}
