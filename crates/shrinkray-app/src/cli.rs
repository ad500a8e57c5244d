use clap::Parser;
use std::path::PathBuf;

/// Shrinkray -- a media transcoding server with live config reload.
#[derive(Parser, Debug)]
#[command(name = "shrinkray", version, about)]
pub struct Args {
    /// Config file path (defaults to the platform config directory).
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Media root override. Survives config reloads.
    #[arg(long)]
    pub media: Option<PathBuf>,

    /// Queue file override. Survives config reloads.
    #[arg(long)]
    pub queue_file: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::parse_from([
            "shrinkray",
            "--config",
            "/config/shrinkray.yaml",
            "--media",
            "/mnt/media2",
            "--queue-file",
            "/data/queue.json",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/config/shrinkray.yaml")));
        assert_eq!(args.media, Some(PathBuf::from("/mnt/media2")));
        assert_eq!(args.queue_file, Some(PathBuf::from("/data/queue.json")));
        assert!(!args.print_config);
    }

    #[test]
    fn everything_is_optional() {
        let args = Args::parse_from(["shrinkray"]);
        assert!(args.config.is_none());
        assert!(args.media.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
