use std::process::ExitCode;

use clap::Parser;
use user_client::{DEFAULT_BASE_URL, UserClient, UserClientHttp};

#[derive(Parser, Debug)]
#[clap(name = "users", about = "Create users through the user registry service")]
struct Cli {
    #[clap(short, long, env = "USER_API_URL", default_value = DEFAULT_BASE_URL)]
    server: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    Create {
        #[clap(long)]
        name: String,
        #[clap(long)]
        email: String,
    },
    Health,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    let client = match UserClientHttp::connect(&args.server) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Failed to build client: {err}");
            return ExitCode::FAILURE;
        }
    };

    match args.command {
        Command::Create { name, email } => match client.create_user(name, email).await {
            Ok(user) => {
                println!("User created: {} ({})", user.name, user.id);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{}: {}", err.user_message(), err);
                ExitCode::FAILURE
            }
        },
        Command::Health => match client.health().await {
            Ok(()) => {
                println!("Service at {} is healthy", client.base_url());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Health check failed: {err}");
                ExitCode::FAILURE
            }
        },
    }
}
