use std::path::PathBuf;

use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;

use crate::clock::MAX_REFRESH;

const ABOUT: &str = "Weather screen TUI";

const LONG_ABOUT: &str = "
TUI showing a single weather screen: current conditions, an hourly strip and a 7-day forecast.

Without --data the built-in demonstration dataset is shown. A JSON file with the same layout can be
supplied instead. The clock in the header refreshes once a minute.

Keys: q/Esc quit, Left/Right (h/l) scroll the hourly forecast, Home resets it.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(long, help = "JSON weather dataset (defaults to the built-in mock data)")]
    pub data: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..=MAX_REFRESH.as_secs()),
        help = "Seconds between clock refreshes (1 to 86400)"
    )]
    pub refresh: u64,

    #[arg(long, default_value = "info", help = "Log level (error, warn, info, debug, trace)")]
    pub log_level: String,

    #[arg(long, help = "Directory for log files (defaults to <tmp>/wxscreen)")]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["wxscreen"]).unwrap();
        assert_eq!(args.data, None);
        assert_eq!(args.refresh, 60);
        assert_eq!(args.log_level, "info");
        assert_eq!(args.log_dir, None);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "wxscreen",
            "--data",
            "sf.json",
            "--refresh",
            "5",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.data, Some(PathBuf::from("sf.json")));
        assert_eq!(args.refresh, 5);
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_zero_refresh_rejected() {
        assert!(Args::try_parse_from(["wxscreen", "--refresh", "0"]).is_err());
    }

    #[test]
    fn test_refresh_upper_bound() {
        assert!(Args::try_parse_from(["wxscreen", "--refresh", "86400"]).is_ok());
        assert!(Args::try_parse_from(["wxscreen", "--refresh", "86401"]).is_err());
        assert!(Args::try_parse_from(["wxscreen", "--refresh", "18446744073709551615"]).is_err());
    }
}
