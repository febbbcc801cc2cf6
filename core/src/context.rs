use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Config;

/// shared application state: database handle and effective configuration,
/// cheap to clone and hand to every request handler
#[derive(Clone)]
pub struct Context(Arc<ContextInner>);

struct ContextInner {
	db: DatabaseConnection,
	config: Config,
}

impl Context {
	pub fn new(db: DatabaseConnection, config: Config) -> Self {
		Context(Arc::new(ContextInner { db, config }))
	}

	pub fn db(&self) -> &DatabaseConnection {
		&self.0.db
	}

	pub fn cfg(&self) -> &Config {
		&self.0.config
	}
}
