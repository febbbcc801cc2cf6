use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{ActiveValue::{NotSet, Set}, ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder};

use kassa::{model::actor, Context};

use crate::ApiResult;

#[derive(Debug, Clone, serde::Serialize)]
pub struct ActorView {
	pub id: i64,
	pub first_name: String,
	pub last_name: String,
	pub full_name: String,
}

impl From<actor::Model> for ActorView {
	fn from(value: actor::Model) -> Self {
		ActorView {
			id: value.id,
			full_name: value.full_name(),
			first_name: value.first_name,
			last_name: value.last_name,
		}
	}
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ActorForm {
	pub first_name: String,
	pub last_name: String,
}

pub async fn list(State(ctx): State<Context>) -> ApiResult<Json<Vec<ActorView>>> {
	let actors = actor::Entity::find()
		.order_by_asc(actor::Column::Id)
		.all(ctx.db())
		.await?;
	Ok(Json(actors.into_iter().map(ActorView::from).collect()))
}

pub async fn view(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
) -> ApiResult<Json<ActorView>> {
	let actor = actor::Entity::find_by_id(id)
		.one(ctx.db())
		.await?
		.ok_or(kassa::Error::NotFound("actor"))?;
	Ok(Json(actor.into()))
}

pub async fn create(
	State(ctx): State<Context>,
	Json(form): Json<ActorForm>,
) -> ApiResult<(StatusCode, Json<ActorView>)> {
	let actor = actor::ActiveModel {
		id: NotSet,
		first_name: Set(form.first_name),
		last_name: Set(form.last_name),
	}
		.insert(ctx.db())
		.await?;
	Ok((StatusCode::CREATED, Json(actor.into())))
}

pub async fn update(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
	Json(form): Json<ActorForm>,
) -> ApiResult<Json<ActorView>> {
	let actor = actor::Entity::find_by_id(id)
		.one(ctx.db())
		.await?
		.ok_or(kassa::Error::NotFound("actor"))?;

	let mut actor = actor.into_active_model();
	actor.first_name = Set(form.first_name);
	actor.last_name = Set(form.last_name);
	let actor = actor.update(ctx.db()).await?;

	Ok(Json(actor.into()))
}

pub async fn remove(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
	let res = actor::Entity::delete_by_id(id).exec(ctx.db()).await?;
	if res.rows_affected == 0 {
		return Err(kassa::Error::NotFound("actor").into());
	}
	Ok(StatusCode::NO_CONTENT)
}
