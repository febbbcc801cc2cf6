#![allow(dead_code)]

use sea_orm::{ActiveModelTrait, ActiveValue::{NotSet, Set}, ConnectOptions, Database};

use kassa::model::{actor, cinema_hall, genre, movie, movie_actor, movie_genre, movie_session, user};
use kassa::{Config, Context};
use kassa_migrations::{Migrator, MigratorTrait};

/// fresh in-memory database with the full schema applied; a single pooled
/// connection, since every sqlite :memory: connection is its own database
pub async fn setup() -> Context {
	let mut opts = ConnectOptions::new("sqlite::memory:");
	opts.max_connections(1);
	let db = Database::connect(opts)
		.await
		.expect("failed opening in-memory sqlite");
	Migrator::up(&db, None)
		.await
		.expect("failed applying migrations");
	Context::new(db, Config::default())
}

pub async fn hall(ctx: &Context, name: &str, rows: i32, seats_in_row: i32) -> cinema_hall::Model {
	cinema_hall::ActiveModel {
		id: NotSet,
		name: Set(name.to_string()),
		rows: Set(rows),
		seats_in_row: Set(seats_in_row),
	}
		.insert(ctx.db())
		.await
		.expect("failed inserting hall")
}

pub async fn movie(ctx: &Context, title: &str) -> movie::Model {
	movie::ActiveModel {
		id: NotSet,
		title: Set(title.to_string()),
		description: Set(format!("about {title}")),
		duration: Set(100),
	}
		.insert(ctx.db())
		.await
		.expect("failed inserting movie")
}

pub async fn genre(ctx: &Context, name: &str) -> genre::Model {
	genre::ActiveModel {
		id: NotSet,
		name: Set(name.to_string()),
	}
		.insert(ctx.db())
		.await
		.expect("failed inserting genre")
}

pub async fn actor(ctx: &Context, first: &str, last: &str) -> actor::Model {
	actor::ActiveModel {
		id: NotSet,
		first_name: Set(first.to_string()),
		last_name: Set(last.to_string()),
	}
		.insert(ctx.db())
		.await
		.expect("failed inserting actor")
}

pub async fn tag_genre(ctx: &Context, movie: i64, genre: i64) {
	movie_genre::ActiveModel {
		id: NotSet,
		movie: Set(movie),
		genre: Set(genre),
	}
		.insert(ctx.db())
		.await
		.expect("failed linking genre");
}

pub async fn cast_actor(ctx: &Context, movie: i64, actor: i64) {
	movie_actor::ActiveModel {
		id: NotSet,
		movie: Set(movie),
		actor: Set(actor),
	}
		.insert(ctx.db())
		.await
		.expect("failed linking actor");
}

pub async fn session(
	ctx: &Context,
	movie: i64,
	cinema_hall: i64,
	show_time: chrono::DateTime<chrono::Utc>,
) -> movie_session::Model {
	movie_session::ActiveModel {
		id: NotSet,
		show_time: Set(show_time),
		movie: Set(movie),
		cinema_hall: Set(cinema_hall),
	}
		.insert(ctx.db())
		.await
		.expect("failed inserting session")
}

pub async fn user(ctx: &Context, username: &str) -> user::Model {
	user::ActiveModel {
		id: NotSet,
		username: Set(username.to_string()),
		password: Set("unused".to_string()),
		active: Set(true),
	}
		.insert(ctx.db())
		.await
		.expect("failed inserting user")
}

pub fn on(date: &str, hour: u32) -> chrono::DateTime<chrono::Utc> {
	date.parse::<chrono::NaiveDate>()
		.expect("bad fixture date")
		.and_hms_opt(hour, 0, 0)
		.expect("bad fixture hour")
		.and_utc()
}
