use crate::api::api_url;
use crate::api::utils::get_json;
use log::debug;
use shared::endpoints::{SPORTS, TEAMS, VENUES};
use shared::{ReferenceItem, Result};
use std::future::Future;

/// Lookup lists backing the create form's selects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceData {
    pub sports: Vec<ReferenceItem>,
    pub teams: Vec<ReferenceItem>,
    pub venues: Vec<ReferenceItem>,
}

pub async fn get_sports() -> Result<Vec<ReferenceItem>> {
    get_reference_list("sports", SPORTS).await
}

pub async fn get_teams() -> Result<Vec<ReferenceItem>> {
    get_reference_list("teams", TEAMS).await
}

pub async fn get_venues() -> Result<Vec<ReferenceItem>> {
    get_reference_list("venues", VENUES).await
}

/// Fetches all three lists concurrently; the first failure fails the load.
pub async fn load_reference_data() -> Result<ReferenceData> {
    join_reference_data(get_sports(), get_teams(), get_venues()).await
}

/// Awaits the three lists together. Completion order does not matter, and
/// any error is returned as soon as it arrives with nothing partial kept.
pub async fn join_reference_data<S, T, V>(sports: S, teams: T, venues: V) -> Result<ReferenceData>
where
    S: Future<Output = Result<Vec<ReferenceItem>>>,
    T: Future<Output = Result<Vec<ReferenceItem>>>,
    V: Future<Output = Result<Vec<ReferenceItem>>>,
{
    let (sports, teams, venues) = futures::try_join!(sports, teams, venues)?;
    Ok(ReferenceData {
        sports,
        teams,
        venues,
    })
}

async fn get_reference_list(kind: &str, path: &str) -> Result<Vec<ReferenceItem>> {
    debug!("Fetching all {}", kind);
    let items = get_json::<Vec<ReferenceItem>>(&api_url(path), None).await?;
    debug!("Successfully fetched {} {}", items.len(), kind);
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::{pending, ready};
    use pretty_assertions::assert_eq;
    use shared::ClientError;

    fn items(names: &[&str]) -> Vec<ReferenceItem> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| ReferenceItem::new(i as i64 + 1, *name))
            .collect()
    }

    #[test]
    fn test_all_lists_loaded_regardless_of_completion_order() {
        // sports only resolves once venues has run
        let (tx, rx) = oneshot::channel();
        let sports = async move {
            rx.await
                .map_err(|_| ClientError::Network("sender dropped".to_string()))
        };
        let venues = async move {
            let _ = tx.send(items(&["Football", "Ice Hockey"]));
            Ok(items(&["Red Bull Arena"]))
        };

        let data = block_on(join_reference_data(sports, ready(Ok(items(&["Salzburg", "Sturm"]))), venues)).unwrap();
        assert_eq!(
            data,
            ReferenceData {
                sports: items(&["Football", "Ice Hockey"]),
                teams: items(&["Salzburg", "Sturm"]),
                venues: items(&["Red Bull Arena"]),
            }
        );
    }

    #[test]
    fn test_one_failing_list_fails_the_whole_load() {
        let failure = ClientError::api(500, "Internal Server Error", r#"{"error":"teams unavailable"}"#);
        let result = block_on(join_reference_data(
            ready(Ok(items(&["Football"]))),
            ready(Err(failure.clone())),
            ready(Ok(items(&["Red Bull Arena"]))),
        ));
        assert_eq!(result, Err(failure));
    }

    #[test]
    fn test_failure_does_not_wait_for_pending_lists() {
        let result = block_on(join_reference_data(
            pending(),
            ready(Ok(items(&["Salzburg"]))),
            ready(Err(ClientError::Network("offline".to_string()))),
        ));
        assert_eq!(result, Err(ClientError::Network("offline".to_string())));
    }
}
