use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{CityGraph, CityId, Error};

/// Radius in kilometers used when a query does not specify one
pub const DEFAULT_RADIUS_KM: f64 = 200.0;

/// Neighbor of the queried city with its distance rounded to 0.1 km
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyResult {
    pub city_id: CityId,
    pub km: f64,
}

/// Returns the neighbors of `city_id` whose link distance is at most
/// `max_km`, ordered by rounded distance and then by id.
///
/// `max_km` is not range-checked: a negative radius yields nothing and
/// zero yields only neighbors at the very same coordinates. `None` falls
/// back to the graph's default radius (200 km unless configured otherwise).
///
/// # Errors
///
/// `UnknownCity` if the city is not in the graph, `InvalidGraph` if the
/// graph knows the city but carries no adjacency sequence for it
pub fn find_nearby(
    graph: &CityGraph,
    city_id: &str,
    max_km: Option<f64>,
) -> Result<Vec<NearbyResult>, Error> {
    if !graph.contains(city_id) {
        return Err(Error::UnknownCity(city_id.to_string()));
    }
    let entries = graph.neighbors(city_id).ok_or_else(|| {
        Error::InvalidGraph(format!("no adjacency sequence for city {city_id}"))
    })?;

    let max_km = max_km.unwrap_or(graph.meta().default_radius_km);

    let results = entries
        .iter()
        .filter(|entry| entry.distance_km <= max_km)
        .map(|entry| NearbyResult {
            city_id: entry.to.clone(),
            km: round_to_tenth(entry.distance_km),
        })
        .sorted_by(|a, b| a.km.total_cmp(&b.km).then_with(|| a.city_id.cmp(&b.city_id)))
        .collect();

    Ok(results)
}

/// Runs [`find_nearby`] for every city in parallel, results follow the
/// order of `city_ids`.
///
/// # Errors
///
/// Fails as a whole if any single query fails
pub fn find_nearby_many<S>(
    graph: &CityGraph,
    city_ids: &[S],
    max_km: Option<f64>,
) -> Result<Vec<Vec<NearbyResult>>, Error>
where
    S: AsRef<str> + Sync,
{
    city_ids
        .par_iter()
        .map(|city_id| find_nearby(graph, city_id.as_ref(), max_km))
        .collect()
}

/// Rounds the scaled value half away from zero, so `0.15` gives `0.2`
/// even though its binary value lies just below the tie.
fn round_to_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}
