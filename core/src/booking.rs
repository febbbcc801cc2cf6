use sea_orm::{
	ActiveModelTrait,
	ActiveValue::{NotSet, Set},
	ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
	QuerySelect, RelationTrait, SelectModel, Selector, TransactionTrait,
};
use sea_orm::sea_query::Expr;

use crate::context::Context;
use crate::errors::Error;
use crate::filters::SessionFilter;
use crate::model::{cinema_hall, movie, movie_session, order, ticket};

/// one requested seat, in the order the client submitted it
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct TicketRequest {
	pub row: i32,
	pub seat: i32,
	pub movie_session: i64,
}

/// range checks against hall geometry, no storage involved
pub fn validate_seat(hall: &cinema_hall::Model, row: i32, seat: i32) -> Result<(), Error> {
	if !(1..=hall.rows).contains(&row) {
		return Err(Error::RowOutOfRange { row, rows: hall.rows });
	}
	if !(1..=hall.seats_in_row).contains(&seat) {
		return Err(Error::SeatOutOfRange { seat, seats_in_row: hall.seats_in_row });
	}
	Ok(())
}

/// pure check, persists nothing: geometry first, then occupancy, so a
/// malformed seat reference never surfaces as a false conflict
pub async fn validate_ticket(
	db: &impl ConnectionTrait,
	session: &movie_session::Model,
	hall: &cinema_hall::Model,
	row: i32,
	seat: i32,
) -> Result<(), Error> {
	validate_seat(hall, row, seat)?;

	if ticket::Entity::find_by_place(session.id, row, seat).one(db).await?.is_some() {
		return Err(Error::SeatTaken { row, seat });
	}

	Ok(())
}

pub async fn session_with_hall(
	db: &impl ConnectionTrait,
	id: i64,
) -> Result<(movie_session::Model, cinema_hall::Model), Error> {
	match movie_session::Entity::find_by_id(id)
		.find_also_related(cinema_hall::Entity)
		.one(db)
		.await?
	{
		Some((session, Some(hall))) => Ok((session, hall)),
		_ => Err(Error::NotFound("movie_session")),
	}
}

/// all-or-nothing: validates every request inside one transaction, writes the
/// order and its tickets, and leans on the (movie_session, row, seat) unique
/// index as the final arbiter when two requests race past the pre-check
pub async fn create_order(
	ctx: &Context,
	user: i64,
	requests: &[TicketRequest],
) -> Result<(order::Model, Vec<ticket::Model>), Error> {
	if requests.is_empty() {
		return Err(Error::EmptyOrder);
	}

	let limit = ctx.cfg().booking.max_tickets_per_order;
	if requests.len() > limit {
		return Err(Error::OrderTooLarge { limit });
	}

	let tx = ctx.db().begin().await?;

	for request in requests {
		let (session, hall) = session_with_hall(&tx, request.movie_session).await?;
		validate_ticket(&tx, &session, &hall, request.row, request.seat).await?;
	}

	let order = order::ActiveModel {
		id: NotSet,
		user: Set(user),
		created_at: Set(chrono::Utc::now()),
	}
		.insert(&tx)
		.await?;

	let mut tickets = Vec::with_capacity(requests.len());
	for request in requests {
		let ticket = ticket::ActiveModel {
			id: NotSet,
			row: Set(request.row),
			seat: Set(request.seat),
			movie_session: Set(request.movie_session),
			order: Set(order.id),
		}
			.insert(&tx)
			.await
			.map_err(|e| Error::or_seat_taken(e, request.row, request.seat))?;
		tickets.push(ticket);
	}

	tx.commit().await?;

	Ok((order, tickets))
}

/// a movie session as listed, with availability computed in the same
/// statement as the filter so capacity and ticket count cannot skew
#[derive(Debug, Clone, FromQueryResult, serde::Serialize)]
pub struct SessionAvailability {
	pub id: i64,
	pub show_time: chrono::DateTime<chrono::Utc>,
	pub movie_title: String,
	pub cinema_hall_name: String,
	pub cinema_hall_capacity: i32,
	pub tickets_available: i64,
}

fn availability_select(filter: &SessionFilter) -> Result<sea_orm::Select<movie_session::Entity>, Error> {
	let capacity = Expr::col((cinema_hall::Entity, cinema_hall::Column::Rows))
		.mul(Expr::col((cinema_hall::Entity, cinema_hall::Column::SeatsInRow)));

	let select = filter.apply(movie_session::Entity::find())?
		.join(JoinType::InnerJoin, movie_session::Relation::Movies.def())
		.join(JoinType::InnerJoin, movie_session::Relation::CinemaHalls.def())
		.join_rev(JoinType::LeftJoin, ticket::Relation::MovieSessions.def())
		.select_only()
		.column(movie_session::Column::Id)
		.column(movie_session::Column::ShowTime)
		.column_as(movie::Column::Title, "movie_title")
		.column_as(cinema_hall::Column::Name, "cinema_hall_name")
		.column_as(capacity.clone(), "cinema_hall_capacity")
		.column_as(
			capacity.sub(Expr::col((ticket::Entity, ticket::Column::Id)).count()),
			"tickets_available",
		)
		.group_by(movie_session::Column::Id)
		.group_by(movie_session::Column::ShowTime)
		.group_by(movie::Column::Title)
		.group_by(cinema_hall::Column::Name)
		.group_by(cinema_hall::Column::Rows)
		.group_by(cinema_hall::Column::SeatsInRow)
		.order_by_asc(movie_session::Column::Id);

	Ok(select)
}

pub fn sessions_with_availability(
	filter: &SessionFilter,
) -> Result<Selector<SelectModel<SessionAvailability>>, Error> {
	Ok(availability_select(filter)?.into_model::<SessionAvailability>())
}

pub async fn session_availability(
	db: &impl ConnectionTrait,
	id: i64,
) -> Result<SessionAvailability, Error> {
	availability_select(&SessionFilter::default())?
		.filter(movie_session::Column::Id.eq(id))
		.into_model::<SessionAvailability>()
		.one(db)
		.await?
		.ok_or(Error::NotFound("movie_session"))
}

/// an already ticketed (row, seat) pair of a session, for seat map rendering
#[derive(Debug, Clone, Copy, FromQueryResult, serde::Serialize)]
pub struct Place {
	// `row` must stay the last field: the FromQueryResult derive binds each
	// field with `let <field> = row.try_get_nullable(..)`, so a field named
	// `row` shadows the macro's query-result parameter for later fields
	pub seat: i32,
	pub row: i32,
}

pub async fn taken_places(db: &impl ConnectionTrait, movie_session: i64) -> Result<Vec<Place>, Error> {
	let places = ticket::Entity::find()
		.filter(ticket::Column::MovieSession.eq(movie_session))
		.select_only()
		.column(ticket::Column::Row)
		.column(ticket::Column::Seat)
		.order_by_asc(ticket::Column::Row)
		.order_by_asc(ticket::Column::Seat)
		.into_model::<Place>()
		.all(db)
		.await?;
	Ok(places)
}

#[cfg(test)]
mod test {
	use super::validate_seat;
	use crate::model::cinema_hall;

	fn hall(rows: i32, seats_in_row: i32) -> cinema_hall::Model {
		cinema_hall::Model { id: 1, name: "red".to_string(), rows, seats_in_row }
	}

	#[test]
	fn seat_range_truth_table() {
		let hall = hall(5, 10);
		assert!(validate_seat(&hall, 1, 1).is_ok());
		assert!(validate_seat(&hall, 5, 10).is_ok());
		assert!(matches!(
			validate_seat(&hall, 0, 1),
			Err(crate::Error::RowOutOfRange { row: 0, rows: 5 }),
		));
		assert!(matches!(
			validate_seat(&hall, 6, 1),
			Err(crate::Error::RowOutOfRange { row: 6, rows: 5 }),
		));
		assert!(matches!(
			validate_seat(&hall, 1, 0),
			Err(crate::Error::SeatOutOfRange { seat: 0, seats_in_row: 10 }),
		));
		assert!(matches!(
			validate_seat(&hall, 1, 11),
			Err(crate::Error::SeatOutOfRange { seat: 11, seats_in_row: 10 }),
		));
	}

	#[test]
	fn row_is_checked_before_seat() {
		// both out of range: the row error wins
		assert!(matches!(
			validate_seat(&hall(5, 10), 99, 99),
			Err(crate::Error::RowOutOfRange { .. }),
		));
	}
}
