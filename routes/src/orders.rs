use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{
	ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, LoaderTrait,
	QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use sea_orm::sea_query::Expr;

use kassa::booking::{self, TicketRequest};
use kassa::model::{cinema_hall, movie, movie_session, order, ticket};
use kassa::Context;

use crate::{ApiResult, AuthIdentity, Pagination};

#[derive(Debug, Clone, serde::Serialize)]
pub struct TicketView {
	pub id: i64,
	pub row: i32,
	pub seat: i32,
	pub movie_session: i64,
}

impl From<ticket::Model> for TicketView {
	fn from(value: ticket::Model) -> Self {
		TicketView {
			id: value.id,
			row: value.row,
			seat: value.seat,
			movie_session: value.movie_session,
		}
	}
}

/// creation response: tickets in request order, flat session refs
#[derive(Debug, Clone, serde::Serialize)]
pub struct OrderView {
	pub id: i64,
	pub created_at: chrono::DateTime<chrono::Utc>,
	pub tickets: Vec<TicketView>,
}

#[derive(Debug, Clone, FromQueryResult, serde::Serialize)]
pub struct TicketSessionView {
	pub id: i64,
	pub show_time: chrono::DateTime<chrono::Utc>,
	pub movie_title: String,
	pub cinema_hall_name: String,
	pub cinema_hall_capacity: i32,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct TicketDetailView {
	pub id: i64,
	pub row: i32,
	pub seat: i32,
	pub movie_session: TicketSessionView,
}

/// list/retrieve shape: tickets carry their session expanded
#[derive(Debug, Clone, serde::Serialize)]
pub struct OrderDetailView {
	pub id: i64,
	pub created_at: chrono::DateTime<chrono::Utc>,
	pub tickets: Vec<TicketDetailView>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct OrderForm {
	pub tickets: Vec<TicketRequest>,
}

async fn session_summaries(
	db: &impl ConnectionTrait,
	ids: Vec<i64>,
) -> Result<HashMap<i64, TicketSessionView>, kassa::Error> {
	let sessions = movie_session::Entity::find()
		.filter(movie_session::Column::Id.is_in(ids))
		.join(JoinType::InnerJoin, movie_session::Relation::Movies.def())
		.join(JoinType::InnerJoin, movie_session::Relation::CinemaHalls.def())
		.select_only()
		.column(movie_session::Column::Id)
		.column(movie_session::Column::ShowTime)
		.column_as(movie::Column::Title, "movie_title")
		.column_as(cinema_hall::Column::Name, "cinema_hall_name")
		.column_as(
			Expr::col((cinema_hall::Entity, cinema_hall::Column::Rows))
				.mul(Expr::col((cinema_hall::Entity, cinema_hall::Column::SeatsInRow))),
			"cinema_hall_capacity",
		)
		.into_model::<TicketSessionView>()
		.all(db)
		.await?;

	Ok(sessions.into_iter().map(|s| (s.id, s)).collect())
}

async fn order_details(
	db: &impl ConnectionTrait,
	orders: Vec<order::Model>,
) -> Result<Vec<OrderDetailView>, kassa::Error> {
	let tickets = orders.load_many(ticket::Entity, db).await?;

	let session_ids = tickets.iter()
		.flatten()
		.map(|t| t.movie_session)
		.collect::<Vec<_>>();
	let sessions = session_summaries(db, session_ids).await?;

	let mut out = Vec::with_capacity(orders.len());
	for (order, tickets) in orders.into_iter().zip(tickets) {
		let mut detailed = Vec::with_capacity(tickets.len());
		for ticket in tickets {
			let session = sessions.get(&ticket.movie_session)
				.cloned()
				.ok_or(kassa::Error::NotFound("movie_session"))?;
			detailed.push(TicketDetailView {
				id: ticket.id,
				row: ticket.row,
				seat: ticket.seat,
				movie_session: session,
			});
		}
		out.push(OrderDetailView {
			id: order.id,
			created_at: order.created_at,
			tickets: detailed,
		});
	}

	Ok(out)
}

pub async fn list(
	State(ctx): State<Context>,
	AuthIdentity(auth): AuthIdentity,
	Query(page): Query<Pagination>,
) -> ApiResult<Json<Vec<OrderDetailView>>> {
	let user = auth.require_user()?;
	let (limit, offset) = page.pagination();

	let orders = order::Entity::find_mine(user)
		.order_by_asc(order::Column::Id)
		.limit(limit)
		.offset(offset)
		.all(ctx.db())
		.await?;

	Ok(Json(order_details(ctx.db(), orders).await?))
}

pub async fn view(
	State(ctx): State<Context>,
	AuthIdentity(auth): AuthIdentity,
	Path(id): Path<i64>,
) -> ApiResult<Json<OrderDetailView>> {
	let user = auth.require_user()?;

	// scoping to the owner makes foreign orders indistinguishable from absent ones
	let order = order::Entity::find_mine(user)
		.filter(order::Column::Id.eq(id))
		.one(ctx.db())
		.await?
		.ok_or(kassa::Error::NotFound("order"))?;

	let mut details = order_details(ctx.db(), vec![order]).await?;
	details.pop()
		.map(Json)
		.ok_or_else(|| kassa::Error::NotFound("order").into())
}

pub async fn create(
	State(ctx): State<Context>,
	AuthIdentity(auth): AuthIdentity,
	Json(form): Json<OrderForm>,
) -> ApiResult<(StatusCode, Json<OrderView>)> {
	let user = auth.require_user()?;

	let (order, tickets) = booking::create_order(&ctx, user, &form.tickets).await?;

	Ok((StatusCode::CREATED, Json(OrderView {
		id: order.id,
		created_at: order.created_at,
		tickets: tickets.into_iter().map(TicketView::from).collect(),
	})))
}
