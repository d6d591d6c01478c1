mod cli;

use boxshelf::{config, display, grouping, library::LibraryQuery};
use boxshelf_common::{listing, MediaItem, TorrentRecord};
use boxshelf_parser::{ParsedRelease, Parser as ReleaseParser};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag.
    // Logs go to stderr so stdout stays machine-readable.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "boxshelf=trace,boxshelf_common=debug".to_string()
        } else {
            "boxshelf=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse { names, json } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            parse_names(&ReleaseParser::new(config.parser), &names, json)
        }
        Commands::Key { names } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            print_keys(&ReleaseParser::new(config.parser), &names);
            Ok(())
        }
        Commands::Group {
            file,
            json,
            media_type,
            search,
            sort,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let query = LibraryQuery {
                media_type,
                search,
                sort: sort.unwrap_or(config.display.sort),
            };
            group_listing(&file, &config, &query, json)
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
    }
}

#[derive(Serialize)]
struct ParseOutput<'a> {
    name: &'a str,
    #[serde(flatten)]
    release: ParsedRelease,
    group_key: String,
}

fn parse_names(parser: &ReleaseParser, names: &[String], json: bool) -> Result<()> {
    tracing::debug!("Parsing {} release names", names.len());

    if json {
        let outputs: Vec<ParseOutput> = names
            .iter()
            .map(|name| {
                let release = parser.parse(name);
                let group_key = release.group_key().into_inner();
                ParseOutput {
                    name,
                    release,
                    group_key,
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let release = parser.parse(name);
        println!("Name:       {}", name);
        println!("Title:      {}", release.title);
        println!("Year:       {}", optional(release.year));
        println!("Season:     {}", optional(release.season));
        println!("Episode:    {}", optional(release.episode));
        println!("Resolution: {}", release.resolution.as_deref().unwrap_or("-"));
        println!("Quality:    {}", release.quality.as_deref().unwrap_or("-"));
        println!("Complete:   {}", if release.is_complete { "yes" } else { "no" });
        println!("Group key:  {}", release.group_key());
    }

    Ok(())
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn print_keys(parser: &ReleaseParser, names: &[String]) {
    for name in names {
        println!("{}\t{}", name, parser.parse(name).group_key());
    }
}

fn read_listing(file: &Path) -> Result<Vec<TorrentRecord>> {
    let records = if file == Path::new("-") {
        listing::read_listing(std::io::stdin().lock())
    } else {
        listing::load_listing(file)
    };

    records.with_context(|| format!("Failed to load listing: {:?}", file))
}

fn group_listing(
    file: &Path,
    config: &config::Config,
    query: &LibraryQuery,
    json: bool,
) -> Result<()> {
    let records = read_listing(file)?;
    tracing::info!("Loaded {} torrents from {:?}", records.len(), file);

    let items: Vec<MediaItem> = records.iter().map(MediaItem::from_torrent).collect();
    let items = query.apply(items);

    let parser = ReleaseParser::new(config.parser.clone());
    let groups = grouping::group_items_with(&parser, items);

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    if groups.is_empty() {
        println!("No media found");
        return Ok(());
    }

    for group in &groups {
        println!(
            "{}  [{}, {}, added {}]",
            display::group_heading(group),
            group.version_label(),
            display::format_file_size(group.total_size()),
            display::format_added(group.latest_added())
        );

        for item in &group.items {
            let name = item.display_name();
            let mut fields = vec![name.to_string()];
            if config.display.show_badges {
                fields.extend(display::quality_badge(&parser.parse(name)));
            }
            fields.push(display::format_file_size(item.size()));
            fields.push(display::format_added(item.added_at()));
            fields.extend(display::file_summary(item));

            println!("  - {}", fields.join("  "));
        }
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            print_config(&config);
        }
        None => {
            println!("No config file specified, using defaults");
            print_config(&config::Config::default());
        }
    }

    Ok(())
}

fn print_config(config: &config::Config) {
    println!("  Strip extensions: {}", config.parser.strip_extensions);
    println!("  Normalize casing: {}", config.parser.normalize_casing);
    println!("  Drop trailing article: {}", config.parser.drop_trailing_article);
    println!("  Show badges: {}", config.display.show_badges);
    println!("  Sort: {}", config.display.sort);
}
