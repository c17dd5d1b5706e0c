#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Sends a transactional email from the command line

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mailpost::{
    domain::communication::{send_chunked, Email, Mailer},
    infrastructure::email::api::{ApiMailer, ApiMailerConfig},
};
use tracing::info;

mod message;

use message::MessageArgs;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The email API configuration
    #[clap(flatten)]
    pub api: ApiMailerConfig,

    /// The email to send
    #[clap(flatten)]
    pub message: MessageArgs,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    load_env(dotenvy::dotenv())?;

    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let chunk_size = args.message.chunk_size;

    let email = Email::try_from(args.message)?;
    let mailer = ApiMailer::new(args.api);

    let message_ids = match chunk_size {
        Some(per_chunk) => send_chunked(&mailer, &email, per_chunk).await?,
        None => vec![mailer.send_email(&email).await?],
    };

    info!(count = message_ids.len(), "email sent");

    for message_id in message_ids {
        println!("{message_id}");
    }

    Ok(())
}

/// Accepts a missing `.env` file but not an unreadable or malformed one
fn load_env(loaded: Result<PathBuf, dotenvy::Error>) -> Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err).context("failed to load environment"),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_missing_env_file_is_ignored() {
        let missing = dotenvy::Error::Io(io::Error::from(io::ErrorKind::NotFound));

        assert!(load_env(Err(missing)).is_ok());
    }

    #[test]
    fn test_malformed_env_file_fails() {
        let malformed = dotenvy::Error::LineParse("MAIL_API_KEY xkeysib".to_string(), 13);

        assert!(load_env(Err(malformed)).is_err());
    }

    #[test]
    fn test_unreadable_env_file_fails() {
        let denied = dotenvy::Error::Io(io::Error::from(io::ErrorKind::PermissionDenied));

        assert!(load_env(Err(denied)).is_err());
    }
}
