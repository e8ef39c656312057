use clap::Parser;
use once_cell::sync::Lazy;

pub static ARGS: Lazy<Args> = Lazy::new(Args::parse);

#[derive(Parser, Debug)]
#[command(
    name = "ta-prune",
    version,
    about = "delete all videos that are watched and older than a specified number of days",
    long_about = None
)]
pub struct Args {
    /// Min age in days from the watched date
    #[arg(short = 'a', long, env = "TA_MIN_WATCHED_AGE")]
    pub min_watched_age: i64,

    /// Tube archivist API url
    #[arg(short, long, env = "TA_URL")]
    pub url: String,

    /// Tube archivist API token
    #[arg(short, long, env = "TA_TOKEN")]
    pub token: String,

    /// Keep running, sleeping between prune rounds
    #[arg(short, long)]
    pub endless: bool,

    /// Seconds to sleep between rounds in endless mode
    #[arg(short, long, default_value_t = 10)]
    pub sleep: u64,

    /// Delete videos regardless of watch status (true/false)
    #[arg(short, long, action = clap::ArgAction::Set, default_value = "false", value_parser = parse_bool_like)]
    pub ignore_watch_status: bool,

    #[arg(short, long, default_value = "None,ta_prune_rs=info", env = "RUST_LOG")]
    pub log_level: String,
}

// 远端接口风格的布尔值，比 clap 内置的解析宽松一些
fn parse_bool_like(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(format!("invalid boolean value: {value}")),
    }
}
