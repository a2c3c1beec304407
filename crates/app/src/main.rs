mod logging;

use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::AppServices;
use storage::http::{BASE_URL_ENV, DEFAULT_BASE_URL, HttpConfig};
use storage::repository::StorageError;
use thiserror::Error;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, Error)]
enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("--api and --offline cannot be combined")]
    ConflictingBackends,
    #[error("invalid API base URL: {0}")]
    InvalidApi(#[from] StorageError),
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  catalog-admin [--api <url>] [--offline]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --api <url>   REST API root (default {DEFAULT_BASE_URL})");
    eprintln!("  --offline     use built-in sample data instead of the API");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {BASE_URL_ENV}, {}", logging::LOG_ENV);
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Backend {
    Remote(HttpConfig),
    Offline,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Backend),
    Help,
}

impl Command {
    /// Parse flags; `env_api` is the value of `CATALOG_API_URL`, if set.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env_api: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut args = args.into_iter();
        let mut api: Option<String> = None;
        let mut offline = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api" => api = Some(require_value(&mut args, "--api")?),
                "--offline" => offline = true,
                "--help" | "-h" => return Ok(Self::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if offline {
            if api.is_some() {
                return Err(ArgsError::ConflictingBackends);
            }
            return Ok(Self::Run(Backend::Offline));
        }

        let base = api
            .or(env_api.filter(|value| !value.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self::Run(Backend::Remote(HttpConfig::new(&base)?)))
    }
}

fn run() -> Result<(), ArgsError> {
    let command = Command::parse(std::env::args().skip(1), std::env::var(BASE_URL_ENV).ok())
        .inspect_err(|_| print_usage())?;

    let backend = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Run(backend) => backend,
    };

    let services = match backend {
        Backend::Remote(config) => AppServices::remote(config),
        Backend::Offline => AppServices::offline(),
    };

    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&app);

    // Some dev setups default to an always-on-top window; keep it a normal one.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Catalog Admin")
            .with_always_on_top(false),
    );

    tracing::info!("launching desktop window");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        tracing::error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
