//! `people`, `directors`, `founders` and `auditors` subcommands.
//!
//! Each takes an optional id: with one it prints that record, without one it
//! prints a listing.

use super::{PageArgs, print_listing};
use crate::output::{Format, emit};
use altpe::{
    AltPeClient,
    client::params::{PeopleQuery, PersonQuery},
};
use anyhow::Result;

pub(crate) async fn people(
    client: &AltPeClient,
    id: Option<i64>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    paging: &PageArgs,
    format: Format,
) -> Result<()> {
    if let Some(id) = id {
        return emit(&client.person(id).await?, "person", format);
    }
    let filters = PersonQuery {
        first_name,
        last_name,
        email,
        ..PersonQuery::default()
    };
    print_listing(paging, "people", format, |page| client.people(&filters, page)).await
}

fn name_search(query: Option<String>) -> PeopleQuery {
    PeopleQuery {
        query,
        ..PeopleQuery::default()
    }
}

pub(crate) async fn directors(
    client: &AltPeClient,
    id: Option<i64>,
    query: Option<String>,
    paging: &PageArgs,
    format: Format,
) -> Result<()> {
    if let Some(id) = id {
        return emit(&client.director(id).await?, "director", format);
    }
    let filters = name_search(query);
    print_listing(paging, "directors", format, |page| client.directors(&filters, page)).await
}

pub(crate) async fn founders(
    client: &AltPeClient,
    id: Option<i64>,
    query: Option<String>,
    paging: &PageArgs,
    format: Format,
) -> Result<()> {
    if let Some(id) = id {
        return emit(&client.founder(id).await?, "founder", format);
    }
    let filters = name_search(query);
    print_listing(paging, "founders", format, |page| client.founders(&filters, page)).await
}

pub(crate) async fn auditors(
    client: &AltPeClient,
    id: Option<i64>,
    query: Option<String>,
    paging: &PageArgs,
    format: Format,
) -> Result<()> {
    if let Some(id) = id {
        return emit(&client.auditor(id).await?, "auditor", format);
    }
    let filters = name_search(query);
    print_listing(paging, "auditors", format, |page| client.auditors(&filters, page)).await
}
