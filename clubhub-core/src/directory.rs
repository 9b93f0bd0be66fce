//! Member directory cache.
//!
//! A warm-once, read-many lookup from member id to member record. The
//! directory is constructed once per process and handed by reference to
//! anything that needs member resolution; the `&mut self` receivers on the
//! fetching methods keep every mutation path serialized.
//!
//! There is no TTL and no background refresh: once an id is cached, `pick`
//! and `get` keep returning the same stored record until the process exits.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::HubResult;
use crate::member::Member;

/// Backend seam for member fetches. Implemented by the HTTP client.
pub trait MemberSource {
    fn fetch_member(&self, id: &str) -> impl Future<Output = HubResult<Member>>;

    /// Full member list. `cached` is forwarded to the backend as a hint; the
    /// server returns the full list regardless.
    fn fetch_members(&self, cached: bool) -> impl Future<Output = HubResult<Vec<Member>>>;
}

pub struct MemberDirectory<S> {
    source: S,
    cache: HashMap<String, Member>,
}

impl<S: MemberSource> MemberDirectory<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// Synchronous lookup against whatever has been cached so far. `None`
    /// means "not yet resolved", not "no such member"; render paths that
    /// cannot await use this and skip unresolved ids.
    pub fn pick(&self, id: &str) -> Option<&Member> {
        self.cache.get(id)
    }

    /// Cached member, fetching and storing on a miss. A failed fetch
    /// propagates and caches nothing for that id.
    pub async fn get(&mut self, id: &str) -> HubResult<&Member> {
        match self.cache.entry(id.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let member = self.source.fetch_member(id).await?;
                Ok(entry.insert(member))
            }
        }
    }

    /// Full roster. With `use_cache`, a non-empty cache is returned as-is
    /// with no network call; a cold cache performs a list fetch and is warmed
    /// from the result, keyed by id. Ids missing from a response are left
    /// untouched — the cache is never pruned.
    pub async fn list(&mut self, use_cache: bool) -> HubResult<Vec<Member>> {
        if use_cache && !self.cache.is_empty() {
            return Ok(self.cache.values().cloned().collect());
        }
        let members = self.source.fetch_members(use_cache).await?;
        if use_cache {
            for member in &members {
                self.cache.insert(member.id().to_string(), member.clone());
            }
        }
        Ok(members)
    }
}
