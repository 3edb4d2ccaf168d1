//! Core data types shared by the collector, downloader and output layers

use serde::Serialize;
use std::collections::BTreeMap;

/// Inclusive session-number bounds applied while collecting images
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SessionRange {
    pub(crate) min: Option<u32>,
    pub(crate) max: Option<u32>,
}

impl SessionRange {
    pub(crate) fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub(crate) fn contains(&self, session: u32) -> bool {
        if let Some(min) = self.min
            && session < min
        {
            return false;
        }
        if let Some(max) = self.max
            && session > max
        {
            return false;
        }
        true
    }
}

/// Image URLs grouped by session number, in document order
///
/// Iteration is ascending by session number. Sessions only exist once an
/// image has been pushed for them, so no list is ever empty.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct SessionImageMap {
    sessions: BTreeMap<u32, Vec<String>>,
}

impl SessionImageMap {
    pub(crate) fn push(&mut self, session: u32, url: String) {
        self.sessions.entry(session).or_default().push(url);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Number of sessions with at least one image
    pub(crate) fn len(&self) -> usize {
        self.sessions.len()
    }

    pub(crate) fn total_images(&self) -> usize {
        self.sessions.values().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, session: u32) -> Option<&[String]> {
        self.sessions.get(&session).map(Vec::as_slice)
    }

    #[cfg(test)]
    pub(crate) fn sessions(&self) -> impl Iterator<Item = u32> + '_ {
        self.sessions.keys().copied()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (u32, &[String])> + '_ {
        self.sessions.iter().map(|(n, urls)| (*n, urls.as_slice()))
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for SessionImageMap {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        let mut map = SessionImageMap::default();
        for (session, url) in iter {
            map.push(session, url.into());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_unbounded_accepts_everything() {
        let range = SessionRange::default();
        assert!(range.contains(0));
        assert!(range.contains(u32::MAX));
    }

    #[test]
    fn range_is_inclusive() {
        let range = SessionRange::new(Some(2), Some(3));
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(3));
        assert!(!range.contains(4));
    }

    #[test]
    fn map_iterates_in_ascending_session_order() {
        let map: SessionImageMap = [(3, "c"), (1, "a"), (2, "b"), (1, "a2")]
            .into_iter()
            .collect();
        let order: Vec<u32> = map.sessions().collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(map.get(1), Some(&["a".to_string(), "a2".to_string()][..]));
        assert_eq!(map.total_images(), 4);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn map_keeps_duplicates() {
        let map: SessionImageMap = [(1, "x"), (1, "x")].into_iter().collect();
        assert_eq!(map.get(1).map(<[String]>::len), Some(2));
    }

    #[test]
    fn map_serializes_as_object_keyed_by_session() {
        let map: SessionImageMap = [(2, "b"), (1, "a")].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"1":["a"],"2":["b"]}"#);
    }
}
