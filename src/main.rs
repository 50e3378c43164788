use anyhow::Context;
use clap::Parser;
use std::fs;
use std::sync::Arc;
use toolshed::api;
use toolshed::application::health::{degrade_if_unreachable, probe_cache};
use toolshed::application::{CacheStatus, ClipboardService, ExportService, JournalService};
use toolshed::cli::{
    exit_code_for_status, format_date_list, format_response, Cli, ClipboardAction, Commands,
    JournalAction,
};
use toolshed::domain::SystemClock;
use toolshed::error::ToolshedError;
use toolshed::infrastructure::{CacheStore, Config, LocalStore, RedisCache};
use tracing::{debug, warn};

fn main() {
    let cli = Cli::parse();
    toolshed::logging::init(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => match e.downcast_ref::<ToolshedError>() {
            Some(err) => {
                eprintln!("Error: {}", err.display_with_suggestions());
                std::process::exit(err.exit_code());
            }
            None => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    debug!(?config.data_dir, cache = config.cache.enabled, "configuration loaded");

    match cli.command {
        Commands::Config => {
            let mut shown = config.clone();
            if !shown.cache.password.is_empty() {
                shown.cache.password = "********".to_string();
            }
            let rendered = toml::to_string_pretty(&shown).context("rendering configuration")?;
            print!("{}", rendered);
            Ok(0)
        }
        Commands::Check => {
            let (_, status) = connect_cache(&config);
            println!("{}", status.describe());
            println!("data dir: {}", config.data_dir.display());
            Ok(match status {
                CacheStatus::Unreachable(_) => 1,
                _ => 0,
            })
        }
        Commands::Clipboard { action } => {
            let (cache, _) = connect_cache(&config);
            let service = ClipboardService::new(cache);
            let response = match action {
                ClipboardAction::Show => api::show_clipboard(&service),
                ClipboardAction::Set { text } => api::replace_clipboard(&service, &text),
            };
            println!("{}", format_response(&response));
            Ok(exit_code_for_status(response.status))
        }
        Commands::Journal { action } => {
            let (cache, _) = connect_cache(&config);
            let service = JournalService::new(
                cache,
                LocalStore::new(config.data_dir.clone()),
                Arc::new(SystemClock),
            );
            run_journal(&service, action)
        }
    }
}

fn run_journal(service: &JournalService, action: JournalAction) -> anyhow::Result<i32> {
    match action {
        JournalAction::Submit {
            success,
            regret,
            highlight,
            frog,
        } => {
            let body = serde_json::to_string(&serde_json::json!({
                "success": success,
                "regret": regret,
                "highlight": highlight,
                "frog": frog,
            }))?;
            let response = api::submit_journal(service, &body);
            println!("{}", format_response(&response));
            Ok(exit_code_for_status(response.status))
        }
        JournalAction::Show { date } => {
            let record = service.fetch(date.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&record.to_view())?);
            Ok(0)
        }
        JournalAction::Export { period, output } => {
            let view = ExportService::new(service).render_period(&period)?;
            let path = output.unwrap_or_else(|| view.filename.clone().into());
            fs::write(&path, view.to_html())
                .with_context(|| format!("writing export to {}", path.display()))?;
            println!("{}", path.display());
            Ok(0)
        }
        JournalAction::List => {
            let dates = service.list_dates()?;
            print!("{}", format_date_list(&dates));
            if dates.is_empty() {
                println!();
            }
            Ok(0)
        }
    }
}

/// Build the cache tier and probe it once. An unreachable cache leaves the
/// process on local storage only.
fn connect_cache(config: &Config) -> (CacheStore, CacheStatus) {
    let cache = if config.cache.enabled {
        match RedisCache::open(&config.cache) {
            Ok(cache) => CacheStore::new(Arc::new(cache)),
            Err(e) => {
                warn!(error = %e, "invalid cache settings, continuing without cache");
                CacheStore::disabled()
            }
        }
    } else {
        CacheStore::disabled()
    };

    let status = probe_cache(&cache, config.cache.probe_timeout());
    (degrade_if_unreachable(cache, &status), status)
}
