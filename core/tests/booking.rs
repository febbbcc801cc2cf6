mod common;

use sea_orm::{ActiveValue::{NotSet, Set}, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use kassa::booking::{self, TicketRequest};
use kassa::model::{order, ticket};
use kassa::Error;

#[tokio::test]
async fn availability_tracks_bookings() {
	let ctx = common::setup().await;
	let hall = common::hall(&ctx, "blue", 5, 10).await;
	let movie = common::movie(&ctx, "Inland Harbor").await;
	let session = common::session(&ctx, movie.id, hall.id, common::on("2026-03-01", 18)).await;
	let user = common::user(&ctx, "ada").await;

	let fresh = booking::session_availability(ctx.db(), session.id).await.unwrap();
	assert_eq!(fresh.tickets_available, 50);
	assert_eq!(fresh.cinema_hall_capacity, 50);

	// reading twice without writes yields the same number
	let again = booking::session_availability(ctx.db(), session.id).await.unwrap();
	assert_eq!(again.tickets_available, 50);

	booking::create_order(&ctx, user.id, &[
		TicketRequest { row: 3, seat: 4, movie_session: session.id },
	]).await.unwrap();

	let after = booking::session_availability(ctx.db(), session.id).await.unwrap();
	assert_eq!(after.tickets_available, 49);

	// same seat again: conflict, and the count does not move
	let err = booking::create_order(&ctx, user.id, &[
		TicketRequest { row: 3, seat: 4, movie_session: session.id },
	]).await.unwrap_err();
	assert!(matches!(err, Error::SeatTaken { row: 3, seat: 4 }));

	let still = booking::session_availability(ctx.db(), session.id).await.unwrap();
	assert_eq!(still.tickets_available, 49);
}

#[tokio::test]
async fn availability_drops_by_batch_size() {
	let ctx = common::setup().await;
	let hall = common::hall(&ctx, "blue", 8, 8).await;
	let movie = common::movie(&ctx, "Inland Harbor").await;
	let session = common::session(&ctx, movie.id, hall.id, common::on("2026-03-01", 18)).await;
	let user = common::user(&ctx, "ada").await;

	let requests = (1..=5)
		.map(|seat| TicketRequest { row: 2, seat, movie_session: session.id })
		.collect::<Vec<_>>();
	booking::create_order(&ctx, user.id, &requests).await.unwrap();

	let after = booking::session_availability(ctx.db(), session.id).await.unwrap();
	assert_eq!(after.tickets_available, 64 - 5);
}

#[tokio::test]
async fn tickets_come_back_in_request_order() {
	let ctx = common::setup().await;
	let hall = common::hall(&ctx, "blue", 5, 10).await;
	let movie = common::movie(&ctx, "Inland Harbor").await;
	let session = common::session(&ctx, movie.id, hall.id, common::on("2026-03-01", 18)).await;
	let user = common::user(&ctx, "ada").await;

	let requests = [
		TicketRequest { row: 4, seat: 9, movie_session: session.id },
		TicketRequest { row: 1, seat: 2, movie_session: session.id },
		TicketRequest { row: 2, seat: 7, movie_session: session.id },
	];
	let (order, tickets) = booking::create_order(&ctx, user.id, &requests).await.unwrap();

	assert_eq!(tickets.len(), 3);
	for (ticket, request) in tickets.iter().zip(requests) {
		assert_eq!(ticket.order, order.id);
		assert_eq!((ticket.row, ticket.seat), (request.row, request.seat));
	}
}

#[tokio::test]
async fn empty_order_is_rejected_without_writes() {
	let ctx = common::setup().await;
	let user = common::user(&ctx, "ada").await;

	let err = booking::create_order(&ctx, user.id, &[]).await.unwrap_err();
	assert!(matches!(err, Error::EmptyOrder));

	assert_eq!(order::Entity::find().count(ctx.db()).await.unwrap(), 0);
}

#[tokio::test]
async fn one_bad_ticket_sinks_the_whole_order() {
	let ctx = common::setup().await;
	let hall = common::hall(&ctx, "blue", 5, 10).await;
	let movie = common::movie(&ctx, "Inland Harbor").await;
	let session = common::session(&ctx, movie.id, hall.id, common::on("2026-03-01", 18)).await;
	let user = common::user(&ctx, "ada").await;

	let err = booking::create_order(&ctx, user.id, &[
		TicketRequest { row: 1, seat: 1, movie_session: session.id },
		TicketRequest { row: 6, seat: 1, movie_session: session.id },
	]).await.unwrap_err();
	assert!(matches!(err, Error::RowOutOfRange { row: 6, rows: 5 }));

	assert_eq!(order::Entity::find().count(ctx.db()).await.unwrap(), 0);
	assert_eq!(ticket::Entity::find().count(ctx.db()).await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_session_is_not_found() {
	let ctx = common::setup().await;
	let user = common::user(&ctx, "ada").await;

	let err = booking::create_order(&ctx, user.id, &[
		TicketRequest { row: 1, seat: 1, movie_session: 999 },
	]).await.unwrap_err();
	assert!(matches!(err, Error::NotFound("movie_session")));
}

#[tokio::test]
async fn range_error_wins_over_conflict() {
	let ctx = common::setup().await;
	let hall = common::hall(&ctx, "blue", 5, 10).await;
	let movie = common::movie(&ctx, "Inland Harbor").await;
	let session = common::session(&ctx, movie.id, hall.id, common::on("2026-03-01", 18)).await;
	let user = common::user(&ctx, "ada").await;

	booking::create_order(&ctx, user.id, &[
		TicketRequest { row: 5, seat: 10, movie_session: session.id },
	]).await.unwrap();

	// out of range row referencing a taken seat column: range error, not conflict
	let err = booking::create_order(&ctx, user.id, &[
		TicketRequest { row: 0, seat: 10, movie_session: session.id },
	]).await.unwrap_err();
	assert!(matches!(err, Error::RowOutOfRange { .. }));
}

#[tokio::test]
async fn order_size_guard() {
	let ctx = common::setup().await;
	let user = common::user(&ctx, "ada").await;

	let limit = ctx.cfg().booking.max_tickets_per_order;
	let requests = (0..limit as i32 + 1)
		.map(|n| TicketRequest { row: 1, seat: n + 1, movie_session: 1 })
		.collect::<Vec<_>>();

	let err = booking::create_order(&ctx, user.id, &requests).await.unwrap_err();
	assert!(matches!(err, Error::OrderTooLarge { .. }));
}

#[tokio::test]
async fn storage_constraint_is_the_final_arbiter() {
	let ctx = common::setup().await;
	let hall = common::hall(&ctx, "blue", 5, 10).await;
	let movie = common::movie(&ctx, "Inland Harbor").await;
	let session = common::session(&ctx, movie.id, hall.id, common::on("2026-03-01", 18)).await;
	let user = common::user(&ctx, "ada").await;

	let (order, _) = booking::create_order(&ctx, user.id, &[
		TicketRequest { row: 3, seat: 4, movie_session: session.id },
	]).await.unwrap();

	// a racer that slipped past the pre-check still hits the unique index,
	// and the violation maps to the same conflict error
	let db_err = ticket::Entity::insert(ticket::ActiveModel {
		id: NotSet,
		row: Set(3),
		seat: Set(4),
		movie_session: Set(session.id),
		order: Set(order.id),
	})
		.exec(ctx.db())
		.await
		.unwrap_err();
	assert!(matches!(
		Error::or_seat_taken(db_err, 3, 4),
		Error::SeatTaken { row: 3, seat: 4 },
	));

	let copies = ticket::Entity::find_by_place(session.id, 3, 4)
		.count(ctx.db())
		.await
		.unwrap();
	assert_eq!(copies, 1);
}

#[tokio::test]
async fn deleting_an_order_releases_its_seats() {
	let ctx = common::setup().await;
	let hall = common::hall(&ctx, "blue", 5, 10).await;
	let movie = common::movie(&ctx, "Inland Harbor").await;
	let session = common::session(&ctx, movie.id, hall.id, common::on("2026-03-01", 18)).await;
	let user = common::user(&ctx, "ada").await;

	let (order, _) = booking::create_order(&ctx, user.id, &[
		TicketRequest { row: 3, seat: 4, movie_session: session.id },
		TicketRequest { row: 3, seat: 5, movie_session: session.id },
	]).await.unwrap();

	order::Entity::delete_by_id(order.id).exec(ctx.db()).await.unwrap();

	// tickets cascade with their order
	assert_eq!(ticket::Entity::find().count(ctx.db()).await.unwrap(), 0);
	let freed = booking::session_availability(ctx.db(), session.id).await.unwrap();
	assert_eq!(freed.tickets_available, 50);
}

#[tokio::test]
async fn orders_are_scoped_to_their_owner() {
	let ctx = common::setup().await;
	let hall = common::hall(&ctx, "blue", 5, 10).await;
	let movie = common::movie(&ctx, "Inland Harbor").await;
	let session = common::session(&ctx, movie.id, hall.id, common::on("2026-03-01", 18)).await;
	let ada = common::user(&ctx, "ada").await;
	let ben = common::user(&ctx, "ben").await;

	let (ada_order, _) = booking::create_order(&ctx, ada.id, &[
		TicketRequest { row: 1, seat: 1, movie_session: session.id },
	]).await.unwrap();

	let bens_view = order::Entity::find_mine(ben.id)
		.filter(order::Column::Id.eq(ada_order.id))
		.one(ctx.db())
		.await
		.unwrap();
	assert!(bens_view.is_none());

	let adas_list = order::Entity::find_mine(ada.id).all(ctx.db()).await.unwrap();
	let bens_list = order::Entity::find_mine(ben.id).all(ctx.db()).await.unwrap();
	assert_eq!(adas_list.len(), 1);
	assert!(bens_list.is_empty());
}
