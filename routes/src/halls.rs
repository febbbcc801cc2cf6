use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{ActiveValue::{NotSet, Set}, ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder};

use kassa::{model::cinema_hall, Context};

use crate::ApiResult;

#[derive(Debug, Clone, serde::Serialize)]
pub struct HallView {
	pub id: i64,
	pub name: String,
	pub rows: i32,
	pub seats_in_row: i32,
	pub capacity: i64,
}

impl From<cinema_hall::Model> for HallView {
	fn from(value: cinema_hall::Model) -> Self {
		HallView {
			id: value.id,
			capacity: value.capacity(),
			rows: value.rows,
			seats_in_row: value.seats_in_row,
			name: value.name,
		}
	}
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct HallForm {
	pub name: String,
	pub rows: i32,
	pub seats_in_row: i32,
}

impl HallForm {
	fn validated(self) -> Result<Self, kassa::Error> {
		if self.rows < 1 {
			return Err(kassa::Error::Invalid("rows"));
		}
		if self.seats_in_row < 1 {
			return Err(kassa::Error::Invalid("seats_in_row"));
		}
		Ok(self)
	}
}

pub async fn list(State(ctx): State<Context>) -> ApiResult<Json<Vec<HallView>>> {
	let halls = cinema_hall::Entity::find()
		.order_by_asc(cinema_hall::Column::Id)
		.all(ctx.db())
		.await?;
	Ok(Json(halls.into_iter().map(HallView::from).collect()))
}

pub async fn view(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
) -> ApiResult<Json<HallView>> {
	let hall = cinema_hall::Entity::find_by_id(id)
		.one(ctx.db())
		.await?
		.ok_or(kassa::Error::NotFound("cinema_hall"))?;
	Ok(Json(hall.into()))
}

pub async fn create(
	State(ctx): State<Context>,
	Json(form): Json<HallForm>,
) -> ApiResult<(StatusCode, Json<HallView>)> {
	let form = form.validated()?;
	let hall = cinema_hall::ActiveModel {
		id: NotSet,
		name: Set(form.name),
		rows: Set(form.rows),
		seats_in_row: Set(form.seats_in_row),
	}
		.insert(ctx.db())
		.await?;
	Ok((StatusCode::CREATED, Json(hall.into())))
}

pub async fn update(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
	Json(form): Json<HallForm>,
) -> ApiResult<Json<HallView>> {
	let form = form.validated()?;
	let hall = cinema_hall::Entity::find_by_id(id)
		.one(ctx.db())
		.await?
		.ok_or(kassa::Error::NotFound("cinema_hall"))?;

	let mut hall = hall.into_active_model();
	hall.name = Set(form.name);
	hall.rows = Set(form.rows);
	hall.seats_in_row = Set(form.seats_in_row);
	let hall = hall.update(ctx.db()).await?;

	Ok(Json(hall.into()))
}

pub async fn remove(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
	let res = cinema_hall::Entity::delete_by_id(id).exec(ctx.db()).await?;
	if res.rows_affected == 0 {
		return Err(kassa::Error::NotFound("cinema_hall").into());
	}
	Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod test {
	#[test]
	fn hall_geometry_must_be_positive() {
		let form = super::HallForm { name: "red".into(), rows: 0, seats_in_row: 10 };
		assert!(matches!(form.validated(), Err(kassa::Error::Invalid("rows"))));
		let form = super::HallForm { name: "red".into(), rows: 10, seats_in_row: -1 };
		assert!(matches!(form.validated(), Err(kassa::Error::Invalid("seats_in_row"))));
		let form = super::HallForm { name: "red".into(), rows: 10, seats_in_row: 12 };
		assert!(form.validated().is_ok());
	}
}
