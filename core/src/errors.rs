#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("database error: {0}")]
	Database(#[from] sea_orm::DbErr),

	#[error("row number must be in range: (1, {rows})")]
	RowOutOfRange { row: i32, rows: i32 },

	#[error("seat number must be in range: (1, {seats_in_row})")]
	SeatOutOfRange { seat: i32, seats_in_row: i32 },

	#[error("seat {seat} in row {row} is already taken")]
	SeatTaken { row: i32, seat: i32 },

	#[error("an order must contain at least one ticket")]
	EmptyOrder,

	#[error("at most {limit} tickets per order")]
	OrderTooLarge { limit: usize },

	#[error("invalid value for field '{0}'")]
	Invalid(&'static str),

	#[error("no such {0}")]
	NotFound(&'static str),

	#[error("valid credentials required")]
	Unauthorized,

	#[error("operation not allowed")]
	Forbidden,
}

impl Error {
	/// name of the field a validation error refers to, if any
	pub fn field(&self) -> Option<&'static str> {
		match self {
			Error::RowOutOfRange { .. } => Some("row"),
			Error::SeatOutOfRange { .. } => Some("seat"),
			Error::EmptyOrder | Error::OrderTooLarge { .. } => Some("tickets"),
			Error::Invalid(field) => Some(field),
			_ => None,
		}
	}

	/// map unique index violations on (movie_session, row, seat) back to the
	/// same conflict the pre-check reports, so a lost race is not a server fault
	pub fn or_seat_taken(e: sea_orm::DbErr, row: i32, seat: i32) -> Self {
		match e.sql_err() {
			Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => Error::SeatTaken { row, seat },
			_ => Error::Database(e),
		}
	}
}

pub trait LoggableError {
	fn info_failed(self, msg: &str);
	fn warn_failed(self, msg: &str);
	fn err_failed(self, msg: &str);
}

impl<T, E: std::error::Error> LoggableError for Result<T, E> {
	fn info_failed(self, msg: &str) {
		if let Err(e) = self {
			tracing::info!("{} : {}", msg, e);
		}
	}

	fn warn_failed(self, msg: &str) {
		if let Err(e) = self {
			tracing::warn!("{} : {}", msg, e);
		}
	}

	fn err_failed(self, msg: &str) {
		if let Err(e) = self {
			tracing::error!("{} : {}", msg, e);
		}
	}
}
