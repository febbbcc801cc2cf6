use axum::routing::{delete, get, patch, post, put};
use axum::Router;
use tower_http::classify::{SharedClassifier, StatusInRangeAsFailures};

pub mod auth;
pub use auth::{AuthIdentity, Identity};

pub mod error;
pub use error::{ApiError, ApiResult};

pub mod account;
pub mod genres;
pub mod actors;
pub mod halls;
pub mod movies;
pub mod sessions;
pub mod orders;

pub fn api_routes(ctx: kassa::Context) -> Router {
	Router::new()
		.route("/auth", post(account::login))
		.route("/auth", put(account::register))
		.route("/auth", patch(account::refresh))
		.route("/genres", get(genres::list))
		.route("/genres", post(genres::create))
		.route("/genres/{id}", get(genres::view))
		.route("/genres/{id}", put(genres::update))
		.route("/genres/{id}", delete(genres::remove))
		.route("/actors", get(actors::list))
		.route("/actors", post(actors::create))
		.route("/actors/{id}", get(actors::view))
		.route("/actors/{id}", put(actors::update))
		.route("/actors/{id}", delete(actors::remove))
		.route("/cinema-halls", get(halls::list))
		.route("/cinema-halls", post(halls::create))
		.route("/cinema-halls/{id}", get(halls::view))
		.route("/cinema-halls/{id}", put(halls::update))
		.route("/cinema-halls/{id}", delete(halls::remove))
		.route("/movies", get(movies::list))
		.route("/movies", post(movies::create))
		.route("/movies/{id}", get(movies::view))
		.route("/movies/{id}", put(movies::update))
		.route("/movies/{id}", delete(movies::remove))
		.route("/movie-sessions", get(sessions::list))
		.route("/movie-sessions", post(sessions::create))
		.route("/movie-sessions/{id}", get(sessions::view))
		.route("/movie-sessions/{id}", put(sessions::update))
		.route("/movie-sessions/{id}", delete(sessions::remove))
		.route("/orders", get(orders::list))
		.route("/orders", post(orders::create))
		.route("/orders/{id}", get(orders::view))
		.with_state(ctx)
}

pub async fn serve(ctx: kassa::Context, bind: String, shutdown: impl ShutdownToken) -> Result<(), std::io::Error> {
	use tower_http::{cors::CorsLayer, trace::TraceLayer};

	let router = api_routes(ctx)
		.layer(
			TraceLayer::new(SharedClassifier::new(StatusInRangeAsFailures::new(500..=999)))
				.make_span_with(|req: &axum::http::Request<_>| {
					tracing::span!(
						tracing::Level::INFO,
						"request",
						uri = %req.uri(),
						status_code = tracing::field::Empty,
					)
				})
		)
		.layer(CorsLayer::permissive());

	tracing::info!("serving api routes on {bind}");

	let listener = tokio::net::TcpListener::bind(bind).await?;
	axum::serve(listener, router)
		.with_graceful_shutdown(shutdown.event())
		.await?;

	Ok(())
}

pub trait ShutdownToken: Sync + Send + 'static {
	fn event(self) -> impl std::future::Future<Output = ()> + std::marker::Send;
}

#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct Pagination {
	pub offset: Option<u64>,
	pub batch: Option<u64>,
}

impl Pagination {
	pub fn pagination(&self) -> (u64, u64) {
		let limit = self.batch.unwrap_or(20).min(50);
		let offset = self.offset.unwrap_or(0);
		(limit, offset)
	}
}

#[cfg(test)]
mod test {
	#[test]
	fn pagination_clamps_batch() {
		let page = super::Pagination { offset: Some(40), batch: Some(500) };
		assert_eq!(page.pagination(), (50, 40));
		let page = super::Pagination { offset: None, batch: None };
		assert_eq!(page.pagination(), (20, 0));
	}
}
