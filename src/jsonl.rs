//! Line based JSON protocol for driving a store through stdin/stdout.
//!
//! Every input line holds a single request object that is tagged
//! with its operation, e.g. `{"op":"get","id":0}`. Every request is
//! answered by exactly one output line: either the JSON encoded
//! result or a [`json::JsonErrorResponse`].

use crate::config::Discovery;
use gtdb_boundary as json;
use gtdb_core::{
    entities::Id,
    repositories::{Error as RepoError, GeoTagRepo},
    usecases::{self, Error as ParameterError},
    util::pagination::Pagination,
};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
enum Request {
    Create(json::NewGeoTag),
    // The offset and limit of the query are ignored
    List(json::DiscoveryQuery),
    Page(json::DiscoveryQuery),
    Get {
        id: u64,
    },
    ByName {
        name: String,
    },
    Update {
        id: u64,
        #[serde(flatten)]
        patch: json::GeoTagPatch,
    },
    Delete {
        id: u64,
    },
}

#[derive(Serialize)]
#[serde(untagged)]
enum Response {
    GeoTag(json::GeoTag),
    GeoTags(Vec<json::GeoTag>),
    Page(json::Page<json::GeoTag>),
    Error(json::JsonErrorResponse),
}

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error("Malformed request: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    fn http_status(&self) -> u16 {
        match self {
            Self::Parameter(ParameterError::Repo(RepoError::NotFound)) => 404,
            Self::Parameter(_) => 400,
            Self::Json(_) => 422,
        }
    }
}

impl From<Error> for json::JsonErrorResponse {
    fn from(err: Error) -> Self {
        Self {
            http_status: err.http_status(),
            message: err.to_string(),
        }
    }
}

fn handle_request<R: GeoTagRepo>(
    repo: &R,
    discovery: &Discovery,
    request: Request,
) -> Result<Response, Error> {
    let response = match request {
        Request::Create(new_geo_tag) => {
            let geo_tag = usecases::create_geo_tag(repo, new_geo_tag.into())?;
            Response::GeoTag(geo_tag.into())
        }
        Request::List(query) => {
            let (query, _): (usecases::GeoTagQuery, Pagination) = query.into();
            let geo_tags = usecases::query_geo_tags(repo, query, discovery.default_radius)?;
            Response::GeoTags(geo_tags.into_iter().map(Into::into).collect())
        }
        Request::Page(query) => {
            let (query, mut pagination): (usecases::GeoTagQuery, Pagination) = query.into();
            pagination.limit.get_or_insert(discovery.default_page_size);
            let page = usecases::query_geo_tags_paged(
                repo,
                query,
                discovery.default_radius,
                &pagination,
            )?;
            Response::Page(page.into())
        }
        Request::Get { id } => {
            let geo_tag = usecases::get_geo_tag(repo, Id::from(id))?;
            Response::GeoTag(geo_tag.into())
        }
        Request::ByName { name } => {
            let geo_tags = usecases::geo_tags_by_name(repo, &name);
            Response::GeoTags(geo_tags.into_iter().map(Into::into).collect())
        }
        Request::Update { id, patch } => {
            let geo_tag = usecases::update_geo_tag(repo, Id::from(id), patch.into())?;
            Response::GeoTag(geo_tag.into())
        }
        Request::Delete { id } => {
            let geo_tag = usecases::delete_geo_tag(repo, Id::from(id))?;
            Response::GeoTag(geo_tag.into())
        }
    };
    Ok(response)
}

fn handle_line<R: GeoTagRepo>(repo: &R, discovery: &Discovery, line: &str) -> Response {
    serde_json::from_str(line)
        .map_err(Error::from)
        .and_then(|request| handle_request(repo, discovery, request))
        .unwrap_or_else(|err| {
            log::debug!("Failed to handle request: {err}");
            Response::Error(err.into())
        })
}

/// Answers requests until the input is exhausted.
///
/// Blank lines are skipped. Only I/O errors abort the loop,
/// all other failures are reported as error responses.
pub fn serve<R, I, O>(repo: &R, discovery: &Discovery, input: I, mut output: O) -> io::Result<()>
where
    R: GeoTagRepo,
    I: BufRead,
    O: Write,
{
    let mut count = 0;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(repo, discovery, &line);
        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
        count += 1;
    }
    log::info!("Answered {count} request(s)");
    Ok(())
}
