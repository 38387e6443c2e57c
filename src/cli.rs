use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::build_fetcher;
use crate::config::StellarConfig;
use crate::feed::{filter_news, FeedSnapshot, NewsArticle};
use crate::routes::Route;
use crate::ui::news::{NO_NEWS_MESSAGE, NO_RESULTS_MESSAGE};

/// StellarFeed - daily space content in your terminal
#[derive(Parser, Debug)]
#[command(name = "stellarfeed")]
#[command(about = "Astronomy picture, space news and cosmic poems in a terminal UI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Start page path (/, /news, /poems, /about)
    #[arg(long)]
    pub page: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the whole feed once and print it
    Fetch(FetchArgs),

    /// Fetch the news and print matching titles
    News(NewsArgs),

    /// Show or initialise the configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Print the snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct NewsArgs {
    /// Case-insensitive title/description filter
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the default configuration file
    #[arg(long)]
    pub init: bool,
}

impl Cli {
    /// Config file in effect: `--config` or the default location
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(StellarConfig::default_path()?),
        }
    }

    /// Load the config file and apply command-line overrides
    pub fn load_config(&self) -> Result<StellarConfig> {
        let path = self.config_path()?;
        let mut config = StellarConfig::load_from(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        self.apply_overrides(&mut config)?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut StellarConfig) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(page) = &self.page {
            if Route::from_path(page).is_none() {
                return Err(anyhow!(
                    "Unknown page '{}'; expected one of /, /news, /poems, /about",
                    page
                ));
            }
            config.start_page = page.clone();
        }
        config.validate()?;
        Ok(())
    }
}

/// Runs headless subcommands
pub struct CliHandler {
    config: StellarConfig,
    config_path: PathBuf,
}

impl CliHandler {
    pub fn new(config: StellarConfig, config_path: PathBuf) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Fetch(args) => self.handle_fetch(args).await,
            Commands::News(args) => self.handle_news(args).await,
            Commands::Config(args) => self.handle_config(args),
        }
    }

    async fn fetch(&self) -> Result<FeedSnapshot> {
        let fetcher = build_fetcher(&self.config)?;
        fetcher
            .fetch_all()
            .await
            .with_context(|| format!("Could not load the feed from {}", self.config.base_url))
    }

    async fn handle_fetch(&self, args: FetchArgs) -> Result<()> {
        let snapshot = self.fetch().await?;
        let mut stdout = io::stdout().lock();

        if args.json {
            serde_json::to_writer_pretty(&mut stdout, &snapshot)?;
            writeln!(stdout)?;
        } else {
            write_summary(&mut stdout, &snapshot)?;
        }
        Ok(())
    }

    async fn handle_news(&self, args: NewsArgs) -> Result<()> {
        let snapshot = self.fetch().await?;
        let term = args.search.unwrap_or_default();
        write_news(&mut io::stdout().lock(), &snapshot.news, &term)?;
        Ok(())
    }

    fn handle_config(&self, args: ConfigArgs) -> Result<()> {
        if args.init {
            if self.config_path.exists() {
                return Err(anyhow!(
                    "Config file already exists at {}",
                    self.config_path.display()
                ));
            }
            StellarConfig::default().save_to(&self.config_path)?;
            println!("Wrote default configuration to {}", self.config_path.display());
            return Ok(());
        }

        println!("# {}", self.config_path.display());
        print!("{}", toml::to_string_pretty(&self.config)?);
        Ok(())
    }
}

/// Human-readable overview of one snapshot
pub fn write_summary(out: &mut impl Write, snapshot: &FeedSnapshot) -> io::Result<()> {
    writeln!(out, "Astronomy Picture of the Day: {}", snapshot.picture.title)?;
    writeln!(out, "  {}", snapshot.picture.image_url)?;
    if let Some(poem) = snapshot.poem_of_the_day() {
        writeln!(out, "Poem of the Day ({}):", poem.author)?;
        writeln!(out, "  {}", poem.text)?;
    }
    writeln!(
        out,
        "{} news articles, {} poems, fetched {}",
        snapshot.news.len(),
        snapshot.poems.len(),
        snapshot.fetched_at.format("%Y-%m-%d %H:%M")
    )
}

/// Filtered news listing with the same empty states as the News page
pub fn write_news(out: &mut impl Write, news: &[NewsArticle], term: &str) -> io::Result<()> {
    if news.is_empty() {
        return writeln!(out, "{}", NO_NEWS_MESSAGE);
    }

    let matches = filter_news(news, term);
    if matches.is_empty() {
        return writeln!(out, "{}", NO_RESULTS_MESSAGE);
    }

    for article in matches {
        match article.source_name() {
            Some(source) => writeln!(out, "{} ({})", article.title, source)?,
            None => writeln!(out, "{}", article.title)?,
        }
        if !article.url.is_empty() {
            writeln!(out, "  {}", article.url)?;
        }
    }
    Ok(())
}
