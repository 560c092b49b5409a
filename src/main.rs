use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_gallery::api::{self, AppState};
use portfolio_gallery::config::PortfolioConfig;
use portfolio_gallery::contact::{self, ContactForwarder};
use portfolio_gallery::gallery::GalleryController;
use portfolio_gallery::models::{ContactSubmission, Theme};
use portfolio_gallery::render::{render_page, HtmlGallery, PageContext, TextGallery};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio project gallery")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the portfolio page and API
    Serve {
        /// Port for HTTP (overrides PORTFOLIO_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the gallery for a filter
    Render {
        /// Filter tag, or "all"
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Pages to reveal, counting the first
        #[arg(short, long, default_value = "1")]
        pages: u32,

        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
    /// Show or change the stored theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Validate a contact form submission without sending it
    Validate {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long, default_value = "")]
        message: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
}

#[derive(Subcommand)]
enum ThemeAction {
    Show,
    Toggle,
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// Initialize tracing. Logs go to stderr so rendered output on stdout stays clean.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "portfolio_gallery=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(config: PortfolioConfig) -> anyhow::Result<()> {
    let db = config.open_database()?;
    let catalog = config.load_catalog()?;
    let contact = ContactForwarder::new(config.form_endpoint.clone());
    let app = api::create_router(AppState::new(db, catalog, contact));

    let port = config.port();
    tracing::info!("Starting portfolio server on port {}", port);
    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Portfolio listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

fn render(config: &PortfolioConfig, filter: &str, pages: u32, format: Format) -> anyhow::Result<()> {
    let catalog = config.load_catalog()?;

    let output = match format {
        Format::Text => {
            let mut controller = GalleryController::new(&catalog, TextGallery::new());
            controller.select_filter(filter)?;
            for _ in 1..pages.max(1) {
                controller.load_more();
            }
            controller.settle();
            controller.into_renderer().output()
        }
        Format::Html => {
            let theme = config.open_database()?.get_theme()?.theme;
            let mut controller = GalleryController::new(&catalog, HtmlGallery::new());
            controller.select_filter(filter)?;
            for _ in 1..pages.max(1) {
                controller.load_more();
            }
            controller.settle();

            let next_page = controller.state().pages() as u32 + 1;
            let gallery = controller.into_renderer();
            render_page(
                &PageContext {
                    theme,
                    tags: catalog.tags(),
                    active_filter: filter,
                    next_page,
                    notification: None,
                },
                &gallery,
            )
        }
    };

    print!("{}", output);
    Ok(())
}

fn theme(config: &PortfolioConfig, action: Option<ThemeAction>) -> anyhow::Result<()> {
    let db = config.open_database()?;
    let preference = match action.unwrap_or(ThemeAction::Show) {
        ThemeAction::Show => db.get_theme()?,
        ThemeAction::Toggle => db.toggle_theme()?,
        ThemeAction::Set { theme } => db.set_theme(theme.into())?,
    };
    println!("{}", preference.theme.as_str());
    Ok(())
}

fn validate(submission: ContactSubmission) -> anyhow::Result<()> {
    match contact::validate(&submission) {
        Ok(()) => {
            println!("ok");
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                println!("{}: {}", error.field, error.message);
            }
            anyhow::bail!("{} field(s) failed validation", errors.len())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = PortfolioConfig::from_env();

    match cli.command {
        Some(Commands::Serve { port }) => serve(config.with_port(port)).await?,
        Some(Commands::Render {
            filter,
            pages,
            format,
        }) => render(&config, &filter, pages, format)?,
        Some(Commands::Theme { action }) => theme(&config, action)?,
        Some(Commands::Validate {
            name,
            email,
            subject,
            message,
        }) => validate(ContactSubmission {
            name,
            email,
            subject,
            message,
        })?,
        None => serve(config).await?,
    }

    Ok(())
}
