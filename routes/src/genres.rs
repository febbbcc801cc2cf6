use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{ActiveValue::{NotSet, Set}, ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder};

use kassa::{model::genre, Context};

use crate::ApiResult;

#[derive(Debug, Clone, serde::Serialize)]
pub struct GenreView {
	pub id: i64,
	pub name: String,
}

impl From<genre::Model> for GenreView {
	fn from(value: genre::Model) -> Self {
		GenreView { id: value.id, name: value.name }
	}
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct GenreForm {
	pub name: String,
}

pub async fn list(State(ctx): State<Context>) -> ApiResult<Json<Vec<GenreView>>> {
	let genres = genre::Entity::find()
		.order_by_asc(genre::Column::Id)
		.all(ctx.db())
		.await?;
	Ok(Json(genres.into_iter().map(GenreView::from).collect()))
}

pub async fn view(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
) -> ApiResult<Json<GenreView>> {
	let genre = genre::Entity::find_by_id(id)
		.one(ctx.db())
		.await?
		.ok_or(kassa::Error::NotFound("genre"))?;
	Ok(Json(genre.into()))
}

pub async fn create(
	State(ctx): State<Context>,
	Json(form): Json<GenreForm>,
) -> ApiResult<(StatusCode, Json<GenreView>)> {
	let genre = genre::ActiveModel {
		id: NotSet,
		name: Set(form.name),
	}
		.insert(ctx.db())
		.await?;
	Ok((StatusCode::CREATED, Json(genre.into())))
}

pub async fn update(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
	Json(form): Json<GenreForm>,
) -> ApiResult<Json<GenreView>> {
	let genre = genre::Entity::find_by_id(id)
		.one(ctx.db())
		.await?
		.ok_or(kassa::Error::NotFound("genre"))?;

	let mut genre = genre.into_active_model();
	genre.name = Set(form.name);
	let genre = genre.update(ctx.db()).await?;

	Ok(Json(genre.into()))
}

pub async fn remove(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
	let res = genre::Entity::delete_by_id(id).exec(ctx.db()).await?;
	if res.rows_affected == 0 {
		return Err(kassa::Error::NotFound("genre").into());
	}
	Ok(StatusCode::NO_CONTENT)
}
