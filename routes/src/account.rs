use axum::extract::State;
use axum::Json;
use rand::Rng;
use sea_orm::{ActiveValue::{NotSet, Set}, ColumnTrait, Condition, EntityTrait, QueryFilter};

use kassa::{model, Context};

use crate::{ApiError, ApiResult};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginForm {
	username: String,
	password: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct AuthSuccess {
	token: String,
	user: String,
	expires: chrono::DateTime<chrono::Utc>,
}

fn token() -> String {
	rand::rng()
		.sample_iter(rand::distr::Alphanumeric)
		.take(128)
		.map(char::from)
		.collect()
}

pub async fn login(
	State(ctx): State<Context>,
	Json(login): Json<LoginForm>,
) -> ApiResult<Json<AuthSuccess>> {
	match model::user::Entity::find()
		.filter(Condition::all()
			.add(model::user::Column::Username.eq(&login.username))
			.add(model::user::Column::Password.eq(sha256::digest(login.password)))
			.add(model::user::Column::Active.eq(true))
		)
		.one(ctx.db())
		.await?
	{
		Some(x) => {
			let token = token();
			let expires = chrono::Utc::now() + chrono::Duration::hours(ctx.cfg().security.session_duration_hours);
			model::session::Entity::insert(
				model::session::ActiveModel {
					id: NotSet,
					secret: Set(token.clone()),
					user: Set(x.id),
					expires: Set(expires),
				}
			)
				.exec(ctx.db())
				.await?;
			Ok(Json(AuthSuccess {
				token, expires,
				user: x.username,
			}))
		},
		None => Err(ApiError::unauthorized()),
	}
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RefreshForm {
	token: String,
}

pub async fn refresh(
	State(ctx): State<Context>,
	Json(refresh): Json<RefreshForm>,
) -> ApiResult<Json<AuthSuccess>> {
	if !ctx.cfg().security.allow_login_refresh {
		return Err(ApiError::forbidden());
	}

	let prev = model::session::Entity::find()
		.filter(model::session::Column::Secret.eq(refresh.token))
		.find_also_related(model::user::Entity)
		.one(ctx.db())
		.await?
		.ok_or_else(ApiError::unauthorized)?;

	let (prev, Some(user)) = prev else {
		return Err(ApiError::unauthorized());
	};

	// allow refreshing a bit before expiry, namely 1/4 of the session lifespan
	let quarter_lifespan = chrono::Duration::hours(ctx.cfg().security.session_duration_hours) / 4;
	if prev.expires - quarter_lifespan > chrono::Utc::now() {
		return Ok(Json(AuthSuccess { token: prev.secret, user: user.username, expires: prev.expires }));
	}

	let token = token();
	let expires = chrono::Utc::now() + chrono::Duration::hours(ctx.cfg().security.session_duration_hours);
	model::session::Entity::insert(model::session::ActiveModel {
		id: NotSet,
		secret: Set(token.clone()),
		user: Set(user.id),
		expires: Set(expires),
	})
		.exec(ctx.db())
		.await?;

	Ok(Json(AuthSuccess { token, expires, user: user.username }))
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegisterForm {
	username: String,
	password: String,
}

pub async fn register(
	State(ctx): State<Context>,
	Json(registration): Json<RegisterForm>,
) -> ApiResult<Json<String>> {
	if !ctx.cfg().security.allow_registration {
		return Err(ApiError::forbidden());
	}

	if registration.username.is_empty() {
		return Err(kassa::Error::Invalid("username").into());
	}

	model::user::Entity::insert(model::user::ActiveModel {
		id: NotSet,
		username: Set(registration.username.clone()),
		password: Set(sha256::digest(registration.password)),
		active: Set(true),
	})
		.exec(ctx.db())
		.await?;

	Ok(Json(registration.username))
}
