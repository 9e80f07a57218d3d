use clap::Parser;
use std::path::PathBuf;
use wyf_types::WidgetOptions;

mod config;
mod prompt;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(author, version, about = "Track your friends and when you last contacted them", long_about = None)]
struct Args {
    /// JSON export file to load at startup
    #[arg(long)]
    import: Option<PathBuf>,

    /// Log filter override, e.g. "debug" or "wyf_core=trace"
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_filter = match &args.log_filter {
        Some(filter) => tracing_subscriber::EnvFilter::new(filter),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let (config, config_path) = config::CliConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    tracing::debug!(path = %config_path.display(), "config loaded");

    let mut options = WidgetOptions::default();
    if let Some(widget_config) = &config.widget {
        if let Some(title) = &widget_config.title {
            options.title = title.clone();
        }
        if let Some(subtitle) = &widget_config.subtitle {
            options.subtitle = subtitle.clone();
        }
    }

    let export_dir = config
        .export
        .as_ref()
        .and_then(|e| e.directory.as_ref())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut session = session::Session::new(options, export_dir);

    if let Some(path) = &args.import {
        if let Err(e) = session.cmd_import(path) {
            println!("{}", e);
        }
    }

    session.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_accept_log_filter_override() {
        let args = Args::try_parse_from(["wyf", "--log-filter", "debug"]).unwrap();
        assert_eq!(args.log_filter.as_deref(), Some("debug"));
        assert!(args.import.is_none());
    }

    #[test]
    fn test_args_accept_startup_import() {
        let args = Args::try_parse_from(["wyf", "--import", "friends.json"]).unwrap();
        assert_eq!(args.import, Some(PathBuf::from("friends.json")));
        assert!(args.log_filter.is_none());
    }
}
