use sea_orm::{ActiveValue::{NotSet, Set}, EntityTrait};

use kassa::model::user;

pub async fn register(
	ctx: kassa::Context,
	username: String,
	password: String,
	active: bool,
) -> kassa::Result<()> {
	user::Entity::insert(user::ActiveModel {
		id: NotSet,
		username: Set(username.clone()),
		password: Set(sha256::digest(password)),
		active: Set(active),
	})
		.exec(ctx.db())
		.await?;

	tracing::info!("registered user {username}");

	Ok(())
}
