use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use stockreport_core::{Entity, LocationId};

/// A stock location. Locations form a tree through `parent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    #[serde(default)]
    pub parent: Option<LocationId>,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: LocationId) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl Entity for Location {
    type Id = LocationId;

    fn id(&self) -> &LocationId {
        &self.id
    }
}

/// Parent/child index over a flat set of locations.
#[derive(Debug, Clone, Default)]
pub struct LocationTree {
    by_id: HashMap<LocationId, Location>,
    children: HashMap<LocationId, Vec<LocationId>>,
}

impl LocationTree {
    pub fn new(locations: impl IntoIterator<Item = Location>) -> Self {
        let mut tree = Self::default();
        for location in locations {
            tree.insert(location);
        }
        tree
    }

    /// Add (or replace) a location.
    pub fn insert(&mut self, location: Location) {
        if let Some(previous) = self.by_id.get(&location.id) {
            if let Some(parent) = previous.parent {
                if let Some(siblings) = self.children.get_mut(&parent) {
                    siblings.retain(|c| *c != location.id);
                }
            }
        }
        if let Some(parent) = location.parent {
            self.children.entry(parent).or_default().push(location.id);
        }
        self.by_id.insert(location.id, location);
    }

    pub fn get(&self, id: &LocationId) -> Option<&Location> {
        self.by_id.get(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// The root followed by all of its descendants, breadth-first.
    ///
    /// Returns `None` when `root` is unknown. Children are visited in
    /// insertion order; a malformed parent cycle is walked at most once.
    pub fn subtree(&self, root: &LocationId) -> Option<Vec<&Location>> {
        let root = self.by_id.get(root)?;

        let mut out = Vec::new();
        let mut seen: HashSet<LocationId> = HashSet::new();
        let mut queue: VecDeque<&Location> = VecDeque::from([root]);

        while let Some(location) = queue.pop_front() {
            if !seen.insert(location.id) {
                continue;
            }
            out.push(location);
            for child in self.children.get(&location.id).into_iter().flatten() {
                if let Some(child) = self.by_id.get(child) {
                    queue.push_back(child);
                }
            }
        }

        Some(out)
    }
}
