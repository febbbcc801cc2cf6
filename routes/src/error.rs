use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("{0}")]
	Kassa(#[from] kassa::Error),

	#[error("{0}")]
	Status(StatusCode),
}

impl ApiError {
	pub fn bad_request() -> Self {
		Self::Status(StatusCode::BAD_REQUEST)
	}

	pub fn not_found() -> Self {
		Self::Status(StatusCode::NOT_FOUND)
	}

	pub fn forbidden() -> Self {
		Self::Status(StatusCode::FORBIDDEN)
	}

	pub fn unauthorized() -> Self {
		Self::Status(StatusCode::UNAUTHORIZED)
	}

	pub fn internal_server_error() -> Self {
		Self::Status(StatusCode::INTERNAL_SERVER_ERROR)
	}
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<StatusCode> for ApiError {
	fn from(value: StatusCode) -> Self {
		ApiError::Status(value)
	}
}

impl From<sea_orm::DbErr> for ApiError {
	fn from(value: sea_orm::DbErr) -> Self {
		ApiError::Kassa(kassa::Error::Database(value))
	}
}

fn status_of(e: &kassa::Error) -> StatusCode {
	match e {
		kassa::Error::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
		kassa::Error::SeatTaken { .. } => StatusCode::CONFLICT,
		kassa::Error::NotFound(_) => StatusCode::NOT_FOUND,
		kassa::Error::Unauthorized => StatusCode::UNAUTHORIZED,
		kassa::Error::Forbidden => StatusCode::FORBIDDEN,
		_ => StatusCode::BAD_REQUEST,
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> axum::response::Response {
		let descr = self.to_string();
		match self {
			ApiError::Status(status) => (status, descr).into_response(),
			ApiError::Kassa(e) => {
				let body = match e.field() {
					Some(field) => serde_json::json!({ "field": field, "error": descr }),
					None => serde_json::json!({ "error": descr }),
				};
				(status_of(&e), Json(body)).into_response()
			},
		}
	}
}

#[cfg(test)]
mod test {
	use axum::http::StatusCode;

	fn status(e: kassa::Error) -> StatusCode {
		super::status_of(&e)
	}

	#[test]
	fn domain_errors_map_to_client_statuses() {
		assert_eq!(status(kassa::Error::SeatTaken { row: 1, seat: 1 }), StatusCode::CONFLICT);
		assert_eq!(status(kassa::Error::RowOutOfRange { row: 0, rows: 5 }), StatusCode::BAD_REQUEST);
		assert_eq!(status(kassa::Error::EmptyOrder), StatusCode::BAD_REQUEST);
		assert_eq!(status(kassa::Error::NotFound("movie")), StatusCode::NOT_FOUND);
	}

	#[test]
	fn validation_errors_carry_their_field() {
		assert_eq!(kassa::Error::RowOutOfRange { row: 0, rows: 5 }.field(), Some("row"));
		assert_eq!(kassa::Error::SeatOutOfRange { seat: 0, seats_in_row: 9 }.field(), Some("seat"));
		assert_eq!(kassa::Error::EmptyOrder.field(), Some("tickets"));
		assert_eq!(kassa::Error::SeatTaken { row: 1, seat: 1 }.field(), None);
	}
}
