mod register;
pub use register::*;

mod seed;
pub use seed::*;

#[derive(Debug, Clone, clap::Subcommand)]
pub enum CliCommand {
	/// create a local user that can log in and place orders
	Register {
		/// login name, must be unique
		username: String,

		/// plaintext password, stored hashed
		password: String,

		#[arg(long, default_value_t = true)]
		/// whether the account starts active
		active: bool,
	},

	/// insert a small demo catalog with halls and showings
	Seed {
		#[arg(long, default_value_t = 3)]
		/// how many showings to schedule per movie
		sessions: u64,
	},
}

pub async fn run(ctx: kassa::Context, command: CliCommand) -> kassa::Result<()> {
	match command {
		CliCommand::Register { username, password, active } =>
			register(ctx, username, password, active).await,
		CliCommand::Seed { sessions } =>
			seed(ctx, sessions).await,
	}
}
