use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use quillpress_core::category::{all_categories_with_posts, find_all_categories};
use quillpress_core::config::Config;
use quillpress_core::post::Post;
use quillpress_core::source::{ArticleSource, ContentDir};
use quillpress_core::Result;

mod args;
use args::{CategoryAction, Cli, Commands, OutputFormat, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let site_dir = resolve_site_dir(cli.site_dir);

    let result = match cli.command {
        Some(Commands::Categories { action }) => handle_categories(action, &site_dir, cli.quiet),
        Some(Commands::Posts { format }) => handle_posts(&site_dir, format, cli.quiet),
        Some(Commands::Init) => handle_init(&site_dir, cli.quiet),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "quillpress", &mut io::stdout());
}

fn resolve_site_dir(cli_site: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = cli_site {
        return dir;
    }

    if let Ok(dir) = std::env::var("QUILLPRESS_SITE") {
        return PathBuf::from(dir);
    }

    PathBuf::from(".")
}

fn open_content_dir(site_dir: &Path) -> Result<ContentDir> {
    let config = Config::load(site_dir)?;
    let root = config.content_dir(site_dir);
    ContentDir::new(root, config.content)
}

fn handle_categories(action: CategoryAction, site_dir: &Path, quiet: bool) -> Result<()> {
    let source = open_content_dir(site_dir)?;
    let posts = source.sorted_articles()?;

    match action {
        CategoryAction::List { format } => {
            let categories = find_all_categories(&posts);

            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
                return Ok(());
            }

            if categories.is_empty() {
                if !quiet {
                    println!("No categories in use.");
                }
                return Ok(());
            }

            if !quiet {
                println!("{}", "Categories:".cyan().bold());
            }
            for category in &categories {
                println!("  {}", category);
            }
            Ok(())
        }
        CategoryAction::Posts { category, format } => {
            let groups = all_categories_with_posts(&posts);

            if let Some(name) = category {
                let bucket = groups.get(&name).map(Vec::as_slice).unwrap_or(&[]);

                if format == OutputFormat::Json {
                    println!("{}", serde_json::to_string_pretty(&bucket)?);
                    return Ok(());
                }

                if bucket.is_empty() {
                    if !quiet {
                        println!("No posts in category: {}", name);
                    }
                    return Ok(());
                }

                print_bucket(&name, bucket, quiet);
                return Ok(());
            }

            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
                return Ok(());
            }

            if groups.is_empty() {
                if !quiet {
                    println!("No posts found in {}", source.root().display());
                }
                return Ok(());
            }

            for (name, bucket) in &groups {
                print_bucket(name, bucket, quiet);
            }
            Ok(())
        }
    }
}

fn print_bucket(name: &str, bucket: &[&Post], quiet: bool) {
    if quiet {
        for post in bucket {
            println!("{}\t{}", name, post.title);
        }
        return;
    }

    println!("{} ({})", name.cyan().bold(), bucket.len());
    for post in bucket {
        print_post_line(post);
    }
    println!();
}

fn print_post_line(post: &Post) {
    match post.date {
        Some(date) => println!("  {}  {}", date.to_string().dimmed(), post.title),
        None => println!("  {}", post.title),
    }
}

fn handle_posts(site_dir: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let source = open_content_dir(site_dir)?;
    let posts = source.sorted_articles()?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    if posts.is_empty() {
        if !quiet {
            println!("No posts found in {}", source.root().display());
        }
        return Ok(());
    }

    if !quiet {
        println!("{}", "Posts:".cyan().bold());
    }
    for post in &posts {
        print_post_line(post);
    }
    Ok(())
}

fn handle_init(site_dir: &Path, quiet: bool) -> Result<()> {
    let path = Config::init(site_dir)?;
    if !quiet {
        println!("{} {}", "Initialized".green().bold(), path.display());
    }
    Ok(())
}
