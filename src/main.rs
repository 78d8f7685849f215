//! Command-line front end for the cat breeds catalog.
//!
//! ```bash
//! catbrowse login --email ana@example.com      # password from CATBROWSE_PASSWORD
//! catbrowse breeds search bengal
//! catbrowse images beng
//! catbrowse open /profile
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use catbrowse::config::Config;
use catbrowse::logging::init_tracing;
use catbrowse::models::{Breed, CatImage, LoginRequest, RegisterRequest, User};
use catbrowse::navigation::{menu, resolve, Route, TracingNavigator};
use catbrowse::CatalogApp;

#[derive(Parser)]
#[command(name = "catbrowse")]
#[command(version)]
#[command(about = "Browse the cat breeds catalog and manage your account session")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: <config dir>/catbrowse/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and keep the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "CATBROWSE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account (does not sign in)
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "CATBROWSE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in profile
    Whoami,

    /// Breed catalog queries
    Breeds {
        #[command(subcommand)]
        command: BreedsCommand,
    },

    /// Images of a breed
    Images {
        breed_id: String,
    },

    /// Open a view by path (/dashboard, /search, /profile, ...)
    Open {
        path: String,
        /// Search term for /search
        #[arg(long, short)]
        query: Option<String>,
    },
}

#[derive(Subcommand)]
enum BreedsCommand {
    /// All breeds
    List,
    /// One breed by id
    Get { id: String },
    /// Server-side search
    Search { query: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(url) = cli.api_url {
        config.api.base_url = url;
        config.validate()?;
    }

    let app = CatalogApp::from_config(&config, Arc::new(TracingNavigator))?;
    let out = Output { json: cli.json };

    match cli.command {
        Commands::Login { email, password } => {
            let user = app
                .session
                .login(&LoginRequest::new(email, password))
                .await?;
            out.user("Signed in as", &user)?;
        }
        Commands::Register {
            name,
            email,
            password,
        } => {
            let account = app
                .session
                .register(&RegisterRequest::new(name, email, password))
                .await?;
            out.user("Registered", &account.user)?;
            if !out.json {
                println!("Run `catbrowse login --email {}` to sign in.", account.user.email);
            }
        }
        Commands::Logout => {
            app.session.logout();
            if !out.json {
                println!("Signed out.");
            }
        }
        Commands::Whoami => show_profile(&app, &out)?,
        Commands::Breeds { command } => match command {
            BreedsCommand::List => out.breeds(&app.breeds.all().await?)?,
            BreedsCommand::Get { id } => out.breed(&app.breeds.by_id(&id).await?)?,
            BreedsCommand::Search { query } => search(&app, &out, &query).await?,
        },
        Commands::Images { breed_id } => out.images(&app.images.by_breed(&breed_id).await?)?,
        Commands::Open { path, query } => {
            let route = resolve(&path, app.session.is_authenticated());
            if !out.json && route.path() != path.trim_end_matches('/') {
                println!("-> {}", route);
            }
            open(&app, &out, route, query.as_deref()).await?;
        }
    }

    Ok(())
}

async fn open(
    app: &CatalogApp,
    out: &Output,
    route: Route,
    query: Option<&str>,
) -> anyhow::Result<()> {
    match route {
        Route::Root | Route::Dashboard => out.breeds(&app.breeds.all().await?)?,
        Route::Search => match query {
            Some(query) => search(app, out, query).await?,
            None => out.hint(route, "Pass --query to search the catalog.")?,
        },
        Route::Profile => show_profile(app, out)?,
        Route::Login => out.hint(route, "Sign in with `catbrowse login --email <email>`.")?,
        Route::Register => out.hint(
            route,
            "Create an account with `catbrowse register --name <name> --email <email>`.",
        )?,
    }

    if !out.json {
        let entries: Vec<&str> = menu(app.session.is_authenticated())
            .iter()
            .map(|r| r.path())
            .collect();
        println!("\nNavigate: {}", entries.join("  "));
    }
    Ok(())
}

async fn search(app: &CatalogApp, out: &Output, query: &str) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("Search query must not be empty");
    }
    out.breeds(&app.breeds.search(query).await?)
}

fn show_profile(app: &CatalogApp, out: &Output) -> anyhow::Result<()> {
    match app.session.current_user() {
        Some(user) => out.user("Signed in as", &user),
        None => anyhow::bail!("Not signed in. Run `catbrowse login` first."),
    }
}

struct Output {
    json: bool,
}

impl Output {
    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Views with nothing to fetch just say what to do next.
    fn hint(&self, route: Route, hint: &str) -> anyhow::Result<()> {
        if self.json {
            return self.print_json(&hint_json(route, hint));
        }
        println!("{}", hint);
        Ok(())
    }

    fn user(&self, label: &str, user: &User) -> anyhow::Result<()> {
        if self.json {
            return self.print_json(user);
        }
        println!("{} {} <{}> (id {})", label, user.name, user.email, user.id);
        Ok(())
    }

    fn breeds(&self, breeds: &[Breed]) -> anyhow::Result<()> {
        if self.json {
            return self.print_json(breeds);
        }
        if breeds.is_empty() {
            println!("No breeds found.");
            return Ok(());
        }
        println!("{:<8} {:<28} {:<20} TEMPERAMENT", "ID", "NAME", "ORIGIN");
        for breed in breeds {
            println!(
                "{:<8} {:<28} {:<20} {}",
                breed.id,
                breed.name,
                breed.origin.as_deref().unwrap_or("-"),
                breed.temperament.as_deref().unwrap_or("-"),
            );
        }
        Ok(())
    }

    fn breed(&self, breed: &Breed) -> anyhow::Result<()> {
        if self.json {
            return self.print_json(breed);
        }
        println!("{} ({})", breed.name, breed.id);
        let fields = [
            ("Origin", breed.origin.as_deref()),
            ("Temperament", breed.temperament.as_deref()),
            ("Life span", breed.life_span.as_deref()),
            ("Wikipedia", breed.wikipedia_url.as_deref()),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                println!("  {:<12} {}", label, value);
            }
        }
        if let Some(weight) = &breed.weight {
            println!(
                "  {:<12} {} lb / {} kg",
                "Weight", weight.imperial, weight.metric
            );
        }
        if let Some(description) = &breed.description {
            println!("\n{}", description);
        }
        Ok(())
    }

    fn images(&self, images: &[CatImage]) -> anyhow::Result<()> {
        if self.json {
            return self.print_json(images);
        }
        if images.is_empty() {
            println!("No images for this breed.");
            return Ok(());
        }
        for (index, image) in images.iter().enumerate() {
            println!(
                "{:>3}. {} ({}x{})",
                index + 1,
                image.url,
                image.width,
                image.height
            );
        }
        Ok(())
    }
}

fn hint_json(route: Route, hint: &str) -> serde_json::Value {
    serde_json::json!({ "route": route.path(), "hint": hint })
}
