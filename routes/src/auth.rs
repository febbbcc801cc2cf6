use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header, request::Parts};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter};

use kassa::{model, Context};

use crate::ApiError;

#[derive(Debug, Clone, Copy)]
pub enum Identity {
	Anonymous,
	User(i64),
}

impl Identity {
	/// the authenticated user id, or a 401 to bubble up
	pub fn require_user(&self) -> Result<i64, ApiError> {
		match self {
			Self::User(id) => Ok(*id),
			Self::Anonymous => Err(ApiError::unauthorized()),
		}
	}
}

pub struct AuthIdentity(pub Identity);

impl<S> FromRequestParts<S> for AuthIdentity
where
	Context: FromRef<S>,
	S: Send + Sync,
{
	type Rejection = ApiError;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		let ctx = Context::from_ref(state);
		let mut identity = Identity::Anonymous;

		let auth_header = parts
			.headers
			.get(header::AUTHORIZATION)
			.map(|v| v.to_str().unwrap_or(""))
			.unwrap_or("");

		if auth_header.starts_with("Bearer ") {
			match model::session::Entity::find()
				.filter(Condition::all()
					.add(model::session::Column::Secret.eq(auth_header.replace("Bearer ", "")))
					.add(model::session::Column::Expires.gt(chrono::Utc::now()))
				)
				.one(ctx.db())
				.await
			{
				Ok(Some(x)) => identity = Identity::User(x.user),
				Ok(None) => return Err(ApiError::unauthorized()),
				Err(e) => {
					tracing::error!("failed querying user session: {e}");
					return Err(ApiError::internal_server_error())
				},
			}
		}

		Ok(AuthIdentity(identity))
	}
}

#[cfg(test)]
mod test {
	use super::Identity;

	#[test]
	fn anonymous_callers_get_401() {
		assert_eq!(Identity::User(7).require_user().unwrap(), 7);
		assert!(Identity::Anonymous.require_user().is_err());
	}
}
