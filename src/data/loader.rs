//! Assembles one `Catalog` snapshot from a data source.
//!
//! Athletes and games are listed concurrently, then every athlete's
//! attributes and injuries are fetched concurrently. Nothing is handed to
//! the app until the whole snapshot is built.

use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use log::{debug, info, warn};

use super::source::{DataError, DataSource};
use crate::core::catalog::Catalog;

pub async fn load_catalog(source: &dyn DataSource) -> Result<Catalog, DataError> {
    let (athletes, games) = futures::try_join!(source.list_athletes(), source.list_games())?;
    debug!(
        "{} listed {} athletes, {} games",
        source.name(),
        athletes.len(),
        games.len()
    );

    let details = try_join_all(athletes.iter().map(|athlete| async move {
        let (attributes, injuries) = futures::try_join!(
            source.athlete_attributes(&athlete.id),
            source.athlete_injuries(&athlete.id)
        )?;
        Ok::<_, DataError>((athlete.id.clone(), attributes, injuries))
    }))
    .await?;

    let mut catalog = Catalog::new(athletes.into_iter().collect(), games.into_iter().collect());
    for (id, attributes, injuries) in details {
        catalog = catalog
            .with_attributes(id.clone(), attributes)
            .with_injuries(id, injuries);
    }
    info!("Assembled catalog from {}", source.name());
    Ok(catalog)
}

/// `load_catalog` with a deadline. Exceeding it is reported as the source
/// being unavailable.
pub async fn load_with_timeout(
    source: Arc<dyn DataSource>,
    timeout: Duration,
) -> Result<Catalog, DataError> {
    match tokio::time::timeout(timeout, load_catalog(source.as_ref())).await {
        Ok(result) => result,
        Err(_) => {
            warn!("{} timed out after {:?}", source.name(), timeout);
            Err(DataError::Unavailable(format!(
                "{} did not respond within {}s",
                source.name(),
                timeout.as_secs()
            )))
        }
    }
}
