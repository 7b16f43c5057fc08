use crate::Result;

use sqlscan_core::{driver::Connection, Error};
use url::Url;

pub(super) async fn connect(url: &str) -> Result<Box<dyn Connection>> {
    let parsed = Url::parse(url)
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

    match parsed.scheme() {
        "postgresql" | "postgres" => connect_postgresql(url).await,
        "sqlite" => connect_sqlite(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}"
        ))),
    }
}

#[cfg(feature = "postgresql")]
async fn connect_postgresql(url: &str) -> Result<Box<dyn Connection>> {
    let driver = sqlscan_driver_postgresql::PostgreSQL::connect(url).await?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "postgresql"))]
async fn connect_postgresql(_url: &str) -> Result<Box<dyn Connection>> {
    Err(Error::invalid_connection_url(
        "`postgresql` feature not enabled",
    ))
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Box<dyn Connection>> {
    let driver = sqlscan_driver_sqlite::Sqlite::connect(url)?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Box<dyn Connection>> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}
