use tokio::sync::RwLock;
use tripline::prelude::*;

use crate::cache::{CachePolicy, RouteCache};

pub struct AppState {
    pub estimator: RouteEstimator,
    pub stops: Vec<Stop>,
    pub route_cache: RwLock<RouteCache>,
}

impl AppState {
    pub fn new(estimator: RouteEstimator, stops: Vec<Stop>) -> Self {
        Self::with_cache_policy(estimator, stops, CachePolicy::default())
    }

    pub fn with_cache_policy(
        estimator: RouteEstimator,
        stops: Vec<Stop>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            estimator,
            stops,
            route_cache: RwLock::new(RouteCache::new(policy)),
        }
    }
}
