use crate::name::normalize_name;
use crate::zone::Zone;
use rustc_hash::FxHashMap;

/// Immutable map from normalized names to zones.
///
/// Keys are normalized on insertion and on lookup, so callers may use any
/// casing and may omit the trailing dot. Once built, the table exposes no
/// mutation; share it behind an `Arc` to hand the same snapshot to several
/// resolvers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneTable {
    zones: FxHashMap<String, Zone>,
}

impl ZoneTable {
    pub fn builder() -> ZoneTableBuilder {
        ZoneTableBuilder::new()
    }

    pub fn get(&self, name: &str) -> Option<&Zone> {
        self.zones.get(&normalize_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Entries in unspecified order, keyed by normalized name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Zone)> {
        self.zones.iter().map(|(name, zone)| (name.as_str(), zone))
    }
}

#[derive(Debug, Default)]
pub struct ZoneTableBuilder {
    zones: FxHashMap<String, Zone>,
}

impl ZoneTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `zone` under the normalized form of `name`. A later insert for a
    /// name that normalizes to the same key replaces the earlier zone.
    pub fn zone(mut self, name: &str, zone: Zone) -> Self {
        self.insert(name, zone);
        self
    }

    /// Same as [`zone`](Self::zone), returning the zone it replaced.
    pub fn insert(&mut self, name: &str, zone: Zone) -> Option<Zone> {
        self.zones.insert(normalize_name(name), zone)
    }

    pub fn build(self) -> ZoneTable {
        ZoneTable { zones: self.zones }
    }
}

impl<K: AsRef<str>> FromIterator<(K, Zone)> for ZoneTable {
    fn from_iter<I: IntoIterator<Item = (K, Zone)>>(iter: I) -> Self {
        let mut builder = ZoneTableBuilder::new();
        for (name, zone) in iter {
            builder.insert(name.as_ref(), zone);
        }
        builder.build()
    }
}

impl<K: AsRef<str>, const N: usize> From<[(K, Zone); N]> for ZoneTable {
    fn from(entries: [(K, Zone); N]) -> Self {
        entries.into_iter().collect()
    }
}
