use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use catalog_core::{
    settle_chain, CatalogController, CatalogEvent, CatalogState, CatalogView, HtmlSurface,
    HttpCatalogSource, HttpImageLoader, SortControl,
};
use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod terminal;

use commands::{parse_command, Command, HELP};
use config::{load_settings, Settings};
use terminal::{Snapshot, TerminalView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "catalog", about = "Search, sort and page through a remote product catalog")]
struct Args {
    /// Catalog endpoint returning a JSON array of products.
    #[arg(long)]
    endpoint: Option<String>,
    /// Settings file (defaults to ./catalog.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    search: Option<String>,
    /// One of price-asc, price-desc, title-asc, title-desc.
    #[arg(long, value_parser = parse_sort)]
    sort: Option<SortControl>,
    #[arg(long, default_value_t = 1)]
    page: usize,
    #[arg(long)]
    per_page: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Resolve each shown image by walking its fallback chain over the network.
    #[arg(long)]
    probe_images: bool,
    /// Keep reading commands from stdin after the first render.
    #[arg(long)]
    interactive: bool,
}

fn parse_sort(raw: &str) -> Result<SortControl, String> {
    raw.parse::<SortControl>().map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(endpoint) = &args.endpoint {
        settings.endpoint_url = endpoint.clone();
    }
    let items_per_page =
        settings.check_page_size(args.per_page.unwrap_or(settings.items_per_page))?;
    let source = HttpCatalogSource::new(settings.endpoint()?);
    info!(endpoint = %source.endpoint(), items_per_page, "starting catalog browser");
    let state = CatalogState::with_items_per_page(items_per_page)?;
    match args.format {
        OutputFormat::Text => {
            let controller =
                CatalogController::with_state(source, TerminalView::default(), state);
            run(controller, &args, &settings).await
        }
        OutputFormat::Html => {
            let controller =
                CatalogController::with_state(source, HtmlSurface::with_all_regions(), state);
            run(controller, &args, &settings).await
        }
    }
}

async fn run<V: CatalogView + Snapshot>(
    mut controller: CatalogController<HttpCatalogSource, V>,
    args: &Args,
    settings: &Settings,
) -> Result<()> {
    let loader = args.probe_images.then(HttpImageLoader::new).transpose()?;
    let items_per_page = controller.state().items_per_page();
    controller.view_mut().sync_page_size(items_per_page);

    let loaded = controller.load().await;
    if loaded.is_ok() {
        if let Some(query) = &args.search {
            controller.search(query);
        }
        if let Some(control) = args.sort {
            let (field, direction) = control.parts();
            controller.sort(field, direction);
        }
        if args.page > 1 {
            controller.go_to_page(args.page);
        }
    }
    present(&mut controller, loader.as_ref()).await;

    if !args.interactive {
        return loaded.map(|_| ()).context("catalog could not be loaded");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err:#}");
                prompt();
                continue;
            }
        };

        let outcome = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                prompt();
                continue;
            }
            Command::Show => Ok(()),
            Command::Next => {
                controller.next_page();
                Ok(())
            }
            Command::Prev => {
                controller.previous_page();
                Ok(())
            }
            Command::Event(CatalogEvent::SetItemsPerPage(size)) => settings
                .check_page_size(size)
                .and_then(|size| Ok(controller.set_items_per_page(size)?)),
            Command::Event(event) => controller.handle(event).map_err(Into::into),
        };

        match outcome {
            Ok(()) => present(&mut controller, loader.as_ref()).await,
            Err(err) => {
                warn!(error = %err, "command rejected");
                eprintln!("{err:#}");
            }
        }
        prompt();
    }

    Ok(())
}

async fn present<V: CatalogView + Snapshot>(
    controller: &mut CatalogController<HttpCatalogSource, V>,
    loader: Option<&HttpImageLoader>,
) {
    if let Some(loader) = loader {
        let mut rows = controller.visible_rows();
        for row in &mut rows {
            settle_chain(loader, &mut row.image).await;
        }
        controller.view_mut().render_rows(&rows);
    }
    println!("{}", controller.view().snapshot());
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
