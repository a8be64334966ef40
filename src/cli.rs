use crate::{config::Config, import, jsonl};
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use gtdb_boundary as json;
use gtdb_core::{entities::Id, usecases, util::pagination::Pagination};
use gtdb_db_memory::InMemoryGeoTagStore;
use serde::Serialize;
use std::{io, path::PathBuf};

/// In-memory store of geo tags with proximity and keyword search.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// JSON file with geo tags to load before running the command
    #[arg(long, value_name = "FILE", global = true)]
    import: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List geo tags, optionally around a position and filtered by a keyword
    List(ListArgs),
    /// Show a single geo tag
    Get {
        #[arg(value_name = "ID")]
        id: Id,
    },
    /// List all geo tags with exactly this name
    ByName {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Answer JSON requests from stdin, one per line
    ServeStdio,
}

#[derive(clap::Args, Debug)]
struct ListArgs {
    /// Latitude of the center in degrees
    #[arg(long, allow_negative_numbers = true, requires = "lng")]
    lat: Option<f64>,

    /// Longitude of the center in degrees
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    lng: Option<f64>,

    /// Search radius in km
    #[arg(long, allow_negative_numbers = true)]
    radius: Option<f64>,

    /// Keyword that must be contained in the name or hashtag
    #[arg(long)]
    search: Option<String>,

    #[arg(long)]
    offset: Option<u64>,

    /// Page size [default: from configuration]
    #[arg(long)]
    limit: Option<u64>,
}

impl From<ListArgs> for json::DiscoveryQuery {
    fn from(from: ListArgs) -> Self {
        let ListArgs {
            lat,
            lng,
            radius,
            search,
            offset,
            limit,
        } = from;
        Self {
            searchterm: search,
            latitude: lat,
            longitude: lng,
            radius,
            offset,
            limit,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;

    let store = InMemoryGeoTagStore::new();
    if let Some(file) = args.import.as_ref().or(cfg.import.file.as_ref()) {
        import::import_from_json_file(&store, file)?;
    }

    match args.command {
        Command::List(list_args) => {
            let (query, mut pagination): (usecases::GeoTagQuery, Pagination) =
                json::DiscoveryQuery::from(list_args).into();
            pagination
                .limit
                .get_or_insert(cfg.discovery.default_page_size);
            let page = usecases::query_geo_tags_paged(
                &store,
                query,
                cfg.discovery.default_radius,
                &pagination,
            )?;
            print_json(&json::Page::<json::GeoTag>::from(page))
        }
        Command::Get { id } => {
            let geo_tag = usecases::get_geo_tag(&store, id)
                .with_context(|| format!("Unable to get geo tag #{id}"))?;
            print_json(&json::GeoTag::from(geo_tag))
        }
        Command::ByName { name } => {
            let geo_tags: Vec<json::GeoTag> = usecases::geo_tags_by_name(&store, &name)
                .into_iter()
                .map(Into::into)
                .collect();
            print_json(&geo_tags)
        }
        Command::ServeStdio => {
            log::info!("Waiting for requests on stdin");
            jsonl::serve(&store, &cfg.discovery, io::stdin().lock(), io::stdout().lock())?;
            Ok(())
        }
    }
}
