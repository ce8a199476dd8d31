use std::{
    collections::{HashMap, VecDeque},
    hash::Hash,
    time::{Duration, Instant},
};

use tripline::prelude::TravelMode;

use crate::dto::{RouteResponse, StopDto};

pub type RouteCache = TtlCache<RouteKey, RouteResponse>;

#[derive(Debug, Clone, Copy)]
pub struct CachePolicy {
    /// How long an entry is served after insertion.
    pub ttl: Duration,
    /// Entries kept before the oldest is evicted.
    pub capacity: usize,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            capacity: 256,
        }
    }
}

/// Insertion-ordered cache with a fixed time to live. Expired entries are
/// dropped first when room is needed, then the oldest live entry.
pub struct TtlCache<K, V> {
    policy: CachePolicy,
    entries: HashMap<K, (Instant, V)>,
    order: VecDeque<K>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let (inserted, value) = self.entries.get(key)?;
        if inserted.elapsed() < self.policy.ttl {
            Some(value.clone())
        } else {
            None
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        if self.policy.capacity == 0 {
            return;
        }
        if self.entries.remove(&key).is_some() {
            self.order.retain(|existing| existing != &key);
        }
        self.purge_expired();
        while self.entries.len() >= self.policy.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, (Instant::now(), value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn purge_expired(&mut self) {
        let ttl = self.policy.ttl;
        let entries = &mut self.entries;
        self.order.retain(|key| {
            let expired = entries
                .get(key)
                .is_none_or(|(inserted, _)| inserted.elapsed() >= ttl);
            if expired {
                entries.remove(key);
            }
            !expired
        });
    }
}

/// Cache key for a route request. Coordinates are keyed by their bit
/// pattern so the key can be hashed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    mode: TravelMode,
    stops: Vec<(String, String, u64, u64)>,
}

impl RouteKey {
    pub fn new(mode: TravelMode, stops: &[StopDto]) -> Self {
        Self {
            mode,
            stops: stops
                .iter()
                .map(|stop| {
                    (
                        stop.id.clone(),
                        stop.name.clone(),
                        stop.coordinate.latitude.to_bits(),
                        stop.coordinate.longitude.to_bits(),
                    )
                })
                .collect(),
        }
    }
}

#[test]
fn cache_hit_test() {
    let mut cache: TtlCache<&str, u32> = TtlCache::new(CachePolicy::default());
    cache.insert("a", 1);
    assert_eq!(cache.get(&"a"), Some(1));
    assert_eq!(cache.get(&"b"), None);
}

#[test]
fn cache_expiry_test() {
    let policy = CachePolicy {
        ttl: Duration::ZERO,
        capacity: 4,
    };
    let mut cache: TtlCache<&str, u32> = TtlCache::new(policy);
    cache.insert("a", 1);
    assert_eq!(cache.get(&"a"), None);
    cache.insert("b", 2);
    assert_eq!(cache.len(), 1);
}

#[test]
fn cache_eviction_test() {
    let policy = CachePolicy {
        ttl: Duration::from_secs(60),
        capacity: 2,
    };
    let mut cache: TtlCache<&str, u32> = TtlCache::new(policy);
    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.insert("a", 3);
    cache.insert("c", 4);
    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.get(&"a"), Some(3));
    assert_eq!(cache.get(&"c"), Some(4));
    assert_eq!(cache.len(), 2);
}

#[test]
fn zero_capacity_cache_test() {
    let policy = CachePolicy {
        ttl: Duration::from_secs(60),
        capacity: 0,
    };
    let mut cache: TtlCache<&str, u32> = TtlCache::new(policy);
    cache.insert("a", 1);
    assert!(cache.is_empty());
}
