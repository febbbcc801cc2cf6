use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{
	ActiveModelTrait,
	ActiveValue::{NotSet, Set},
	EntityTrait, IntoActiveModel, ModelTrait,
};

use kassa::booking::{self, Place, SessionAvailability};
use kassa::filters::SessionFilter;
use kassa::model::{actor, cinema_hall, genre, movie, movie_session};
use kassa::Context;

use crate::halls::HallView;
use crate::movies::MovieListView;
use crate::ApiResult;

/// list shape, annotated with availability computed alongside the filter
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionListView {
	pub id: i64,
	pub show_time: chrono::DateTime<chrono::Utc>,
	pub movie_title: String,
	pub cinema_hall_name: String,
	pub cinema_hall_capacity: i32,
	pub tickets_available: i64,
}

impl From<SessionAvailability> for SessionListView {
	fn from(value: SessionAvailability) -> Self {
		SessionListView {
			id: value.id,
			show_time: value.show_time,
			movie_title: value.movie_title,
			cinema_hall_name: value.cinema_hall_name,
			cinema_hall_capacity: value.cinema_hall_capacity,
			tickets_available: value.tickets_available,
		}
	}
}

/// detail shape, enough to render a seat map
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionDetailView {
	pub id: i64,
	pub show_time: chrono::DateTime<chrono::Utc>,
	pub movie: MovieListView,
	pub cinema_hall: HallView,
	pub taken_places: Vec<Place>,
}

/// mutation shape, flat references
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionView {
	pub id: i64,
	pub show_time: chrono::DateTime<chrono::Utc>,
	pub movie: i64,
	pub cinema_hall: i64,
}

impl From<movie_session::Model> for SessionView {
	fn from(value: movie_session::Model) -> Self {
		SessionView {
			id: value.id,
			show_time: value.show_time,
			movie: value.movie,
			cinema_hall: value.cinema_hall,
		}
	}
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SessionForm {
	pub show_time: chrono::DateTime<chrono::Utc>,
	pub movie: i64,
	pub cinema_hall: i64,
}

impl SessionForm {
	async fn check_refs(&self, ctx: &Context) -> Result<(), kassa::Error> {
		if movie::Entity::find_by_id(self.movie).one(ctx.db()).await?.is_none() {
			return Err(kassa::Error::NotFound("movie"));
		}
		if cinema_hall::Entity::find_by_id(self.cinema_hall).one(ctx.db()).await?.is_none() {
			return Err(kassa::Error::NotFound("cinema_hall"));
		}
		Ok(())
	}
}

pub async fn list(
	State(ctx): State<Context>,
	Query(filter): Query<SessionFilter>,
) -> ApiResult<Json<Vec<SessionListView>>> {
	let sessions = booking::sessions_with_availability(&filter)?
		.all(ctx.db())
		.await
		.map_err(kassa::Error::from)?;
	Ok(Json(sessions.into_iter().map(SessionListView::from).collect()))
}

pub async fn view(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
) -> ApiResult<Json<SessionDetailView>> {
	let (session, hall) = booking::session_with_hall(ctx.db(), id).await?;

	let movie = movie::Entity::find_by_id(session.movie)
		.one(ctx.db())
		.await?
		.ok_or(kassa::Error::NotFound("movie"))?;
	let genres = movie.find_related(genre::Entity).all(ctx.db()).await?;
	let actors = movie.find_related(actor::Entity).all(ctx.db()).await?;

	let taken_places = booking::taken_places(ctx.db(), session.id).await?;

	Ok(Json(SessionDetailView {
		id: session.id,
		show_time: session.show_time,
		movie: MovieListView {
			id: movie.id,
			title: movie.title,
			description: movie.description,
			duration: movie.duration,
			genres: genres.into_iter().map(|g| g.name).collect(),
			actors: actors.iter().map(|a| a.full_name()).collect(),
		},
		cinema_hall: hall.into(),
		taken_places,
	}))
}

pub async fn create(
	State(ctx): State<Context>,
	Json(form): Json<SessionForm>,
) -> ApiResult<(StatusCode, Json<SessionView>)> {
	form.check_refs(&ctx).await?;
	let session = movie_session::ActiveModel {
		id: NotSet,
		show_time: Set(form.show_time),
		movie: Set(form.movie),
		cinema_hall: Set(form.cinema_hall),
	}
		.insert(ctx.db())
		.await?;
	Ok((StatusCode::CREATED, Json(session.into())))
}

pub async fn update(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
	Json(form): Json<SessionForm>,
) -> ApiResult<Json<SessionView>> {
	let session = movie_session::Entity::find_by_id(id)
		.one(ctx.db())
		.await?
		.ok_or(kassa::Error::NotFound("movie_session"))?;

	form.check_refs(&ctx).await?;

	let mut session = session.into_active_model();
	session.show_time = Set(form.show_time);
	session.movie = Set(form.movie);
	session.cinema_hall = Set(form.cinema_hall);
	let session = session.update(ctx.db()).await?;

	Ok(Json(session.into()))
}

pub async fn remove(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
	let res = movie_session::Entity::delete_by_id(id).exec(ctx.db()).await?;
	if res.rows_affected == 0 {
		return Err(kassa::Error::NotFound("movie_session").into());
	}
	Ok(StatusCode::NO_CONTENT)
}
