use std::net::IpAddr;

use clap::{Args, Parser, Subcommand};
use practica_utils::args::llm::LlmArgs;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "practica", about = "Serve versioned courses and practice sessions")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Db {
    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[arg(long, env = "DATABASE_URL", help = "sqlite:// or postgresql:// url of the database")]
    pub(crate) database_url: Url,

    #[command(flatten)]
    pub(crate) db: Db,

    #[arg(long, value_delimiter = ',', help = "Origins allowed by CORS")]
    pub(crate) origins: Vec<String>,

    #[command(flatten)]
    pub(crate) llm: LlmArgs,

    #[arg(long = "sentry-dsn", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(
        long,
        default_value = "dev",
        help = "Set the environment used by sentry and prometheus"
    )]
    pub(crate) env: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Cli::parse_from([
            "practica",
            "run",
            "--database-url",
            "sqlite:///tmp/practica.db?mode=rwc",
            "--origins",
            "http://localhost:5173,https://practica.example",
            "--port",
            "8080",
        ]);
        let Commands::Run(run) = cli.command;

        assert_eq!(run.database_url.scheme(), "sqlite");
        assert_eq!(run.origins.len(), 2);
        assert_eq!(run.port, Some(8080));
        assert_eq!(run.env, "dev");
        assert_eq!(run.db.db_max_connections, None);
    }
}
