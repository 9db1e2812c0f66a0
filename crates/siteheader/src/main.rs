//! siteheader - Prerender the shared site header and manage the stored theme

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use siteheader_core::{FileThemeStore, RootPath, ThemeFallback};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "siteheader",
    version,
    about = "Shared site header renderer",
    long_about = "Renders the navigation header shared by every page of a static site.\n\
                  \n\
                  The active section is picked from the page path; links are made relative\n\
                  to the page through the root path ('.' at the site root, '..' one level deep).\n\
                  \n\
                  Examples:\n\
                    siteheader render --path /work.html                  # Print header markup\n\
                    siteheader render --root .. --path /blog/post-1.html\n\
                    siteheader render --path /about.html --page about.html --output about.html\n\
                    siteheader theme toggle                              # Flip the stored theme\n\
                  \n\
                  Environment Variables:\n\
                    SITEHEADER_SITE                  # Built-in site preset\n\
                    SITEHEADER_CONFIG                # Site config TOML (overrides preset)\n\
                    SITEHEADER_STATE_DIR             # Where the theme preference is stored\n\
                    RUST_LOG                         # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Built-in site preset (mediumroast, jason_bauman)
    #[arg(long, global = true, env = "SITEHEADER_SITE")]
    site: Option<String>,

    /// Site config file (TOML), overrides --site
    #[arg(long, global = true, env = "SITEHEADER_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the header for a page
    Render {
        /// Prefix from the page back to the site root
        #[arg(long, default_value = ".")]
        root: RootPath,
        /// Location path of the page, e.g. /blog/post-1.html
        #[arg(long)]
        path: String,
        /// Host HTML page to mount the header into
        #[arg(long)]
        page: Option<PathBuf>,
        /// Write the result here instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Inspect or change the stored theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,
        /// Directory holding the preference file
        #[arg(long, env = "SITEHEADER_STATE_DIR")]
        state_dir: Option<PathBuf>,
        /// Answer for the system color-scheme query
        #[arg(long)]
        prefers_dark: bool,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum ThemeCommand {
    /// Print the stored theme
    Show,
    /// Print the theme a fresh page load would apply
    Init,
    /// Flip the theme and store it
    Toggle,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let site = cli::resolve_site(cli.site.as_deref(), cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            root,
            path,
            page,
            output,
        } => {
            let host = page
                .map(|p| {
                    std::fs::read_to_string(&p)
                        .with_context(|| format!("Failed to read host page {}", p.display()))
                })
                .transpose()?;
            let html = cli::render(site, root, &path, host)?;
            match output {
                Some(out) => std::fs::write(&out, html)
                    .with_context(|| format!("Failed to write {}", out.display()))?,
                None => print!("{}", html),
            }
        }
        Command::Theme {
            action,
            state_dir,
            prefers_dark,
        } => {
            let dir = state_dir
                .or_else(|| dirs::cache_dir().map(|d| d.join("siteheader")))
                .context("Could not determine a state directory for the theme preference")?;
            let store = FileThemeStore::new(dir);
            let fallback: ThemeFallback = site.theme_fallback;

            match action {
                ThemeCommand::Show => match cli::theme_show(&store) {
                    Some(theme) => println!("{}", theme),
                    None => println!("(unset)"),
                },
                ThemeCommand::Init => {
                    println!("{}", cli::theme_init(store, fallback, prefers_dark));
                }
                ThemeCommand::Toggle => {
                    println!("{}", cli::theme_toggle(store, fallback, prefers_dark));
                }
            }
        }
    }

    Ok(())
}
