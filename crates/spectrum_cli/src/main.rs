use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use spectrum_core::HeadlinesQuery;
use spectrum_web::chrome::ChromeOptions;
use spectrum_web::nav::NavLinks;
use spectrum_web::pages::{AboutPage, ErrorPage, Page};
use spectrum_web::theme::{ColorScheme, PresentationConfig};
use spectrum_web::{create_app, AppState, ApplicationRoot, WebConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Spectrum news front end", long_about = None)]
pub struct Cli {
    #[arg(long, env = "NEWS_API_URL")]
    news_api_url: Option<String>,
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    news_api_key: Option<String>,
    #[arg(long, env = "METRICS_BACKEND", default_value = "memory", help = "Metrics backend: memory (default) or http")]
    metrics_backend: String,
    #[arg(long, env = "METRICS_URL")]
    metrics_url: Option<String>,
    #[arg(long, env = "SPECTRUM_COLOR_SCHEME", default_value = "dark")]
    color_scheme: ColorScheme,
    /// Render only the header, without the side navigation
    #[arg(long)]
    no_side_navbar: bool,
    #[arg(long)]
    no_footer: bool,
    #[arg(long)]
    no_global_styles: bool,
    #[arg(long)]
    no_normalize_css: bool,
    /// JSON file with the navigation routes, an array of {"link", "label"}
    #[arg(long, env = "SPECTRUM_ROUTES")]
    routes: Option<PathBuf>,
    #[arg(long, env = "SPECTRUM_COUNTRY", default_value = "us")]
    country: String,
    #[arg(long, default_value_t = 20)]
    page_size: u32,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the site over HTTP
    Serve {
        #[arg(long, env = "SPECTRUM_BIND", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },
    /// Print the current top headlines
    Headlines {
        #[arg(long)]
        category: Option<String>,
    },
    /// Print a rendered page to stdout
    Render {
        #[arg(value_enum)]
        page: StaticPage,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StaticPage {
    About,
    NotFound,
}

impl Cli {
    fn web_config(&self) -> anyhow::Result<WebConfig> {
        let routes = match &self.routes {
            Some(path) => Some(NavLinks::load(path)?),
            None => None,
        };

        Ok(WebConfig {
            presentation: PresentationConfig {
                color_scheme: self.color_scheme,
                with_global_styles: !self.no_global_styles,
                with_normalize_css: !self.no_normalize_css,
            },
            chrome: ChromeOptions {
                side_navbar: !self.no_side_navbar,
                footer: !self.no_footer,
            },
            routes,
            default_country: Some(self.country.clone()),
            page_size: Some(self.page_size),
        })
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("👋 Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.web_config()?;

    let news = spectrum_backends::create_news_provider(
        cli.news_api_url.as_deref(),
        cli.news_api_key.as_deref(),
    )?;

    match cli.command {
        Commands::Serve { bind } => {
            let metrics = spectrum_backends::create_metrics_backend(
                &cli.metrics_backend,
                cli.metrics_url.as_deref(),
            )?;
            let state = AppState::new(config, news, metrics)?;
            let app = create_app(state);

            let listener = tokio::net::TcpListener::bind(bind)
                .await
                .with_context(|| format!("Failed to bind {}", bind))?;
            info!("🚀 Spectrum listening on http://{}", bind);
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Commands::Headlines { category } => {
            let query = config.headlines_query(HeadlinesQuery {
                category,
                ..Default::default()
            });
            let headlines = news.top_headlines(&query).await?;
            println!(
                "Showing {} of {} headlines",
                headlines.articles.len(),
                headlines.total_results
            );
            for article in &headlines.articles {
                println!("- [{}] {} ({})", article.source.name, article.title, article.url);
            }
        }
        Commands::Render { page } => {
            let root = ApplicationRoot::new(&config)?;
            let page: Box<dyn Page> = match page {
                StaticPage::About => Box::new(AboutPage),
                StaticPage::NotFound => Box::new(ErrorPage::not_found()),
            };
            let document = root.render(page.as_ref())?;
            println!("{}", document.html);
        }
    }

    Ok(())
}
