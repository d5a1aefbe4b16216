use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, WeekDataApi, WeekDataConfig, WeekDataService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidEndpoint { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidEndpoint { raw } => write!(f, "invalid --endpoint value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    week_data: Arc<WeekDataService>,
}

impl UiApp for DesktopApp {
    fn week_data(&self) -> Arc<dyn WeekDataApi> {
        Arc::clone(&self.week_data) as Arc<dyn WeekDataApi>
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }
}

struct Args {
    endpoint: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--endpoint <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --endpoint http://127.0.0.1:5000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DROPTRACK_ENDPOINT");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut endpoint = WeekDataConfig::from_env().base_url;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--endpoint" => {
                    let value = require_value(args, "--endpoint")?;
                    endpoint = normalize_endpoint(value)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { endpoint })
    }
}

fn normalize_endpoint(raw: String) -> Result<String, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ArgsError::InvalidEndpoint { raw });
    }
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    Ok(with_scheme.trim_end_matches('/').to_string())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let week_data = Arc::new(WeekDataService::new(WeekDataConfig {
        base_url: parsed.endpoint,
    }));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { week_data });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Drop Tracker")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
