use sea_orm::{ActiveValue::{NotSet, Set}, ActiveModelTrait, EntityTrait};

use kassa::model::{actor, cinema_hall, genre, movie, movie_actor, movie_genre, movie_session};

/// demo data for poking at the api by hand, not meant for production
pub async fn seed(ctx: kassa::Context, sessions: u64) -> kassa::Result<()> {
	let db = ctx.db();

	let drama = genre::ActiveModel { id: NotSet, name: Set("Drama".to_string()) }
		.insert(db).await?;
	let action = genre::ActiveModel { id: NotSet, name: Set("Action".to_string()) }
		.insert(db).await?;

	let lead = actor::ActiveModel {
		id: NotSet,
		first_name: Set("Greta".to_string()),
		last_name: Set("Stone".to_string()),
	}
		.insert(db).await?;

	let hall = cinema_hall::ActiveModel {
		id: NotSet,
		name: Set("Blue".to_string()),
		rows: Set(12),
		seats_in_row: Set(16),
	}
		.insert(db).await?;

	let feature = movie::ActiveModel {
		id: NotSet,
		title: Set("Inland Harbor".to_string()),
		description: Set("two dockworkers find a stray projector".to_string()),
		duration: Set(114),
	}
		.insert(db).await?;

	movie_genre::Entity::insert_many([
		movie_genre::ActiveModel { id: NotSet, movie: Set(feature.id), genre: Set(drama.id) },
		movie_genre::ActiveModel { id: NotSet, movie: Set(feature.id), genre: Set(action.id) },
	])
		.exec(db)
		.await?;

	movie_actor::Entity::insert(movie_actor::ActiveModel {
		id: NotSet,
		movie: Set(feature.id),
		actor: Set(lead.id),
	})
		.exec(db)
		.await?;

	let first_show = chrono::Utc::now() + chrono::Duration::days(1);
	for n in 0..sessions {
		movie_session::ActiveModel {
			id: NotSet,
			show_time: Set(first_show + chrono::Duration::hours(3 * n as i64)),
			movie: Set(feature.id),
			cinema_hall: Set(hall.id),
		}
			.insert(db)
			.await?;
	}

	tracing::info!("seeded demo catalog with {sessions} showings");

	Ok(())
}
