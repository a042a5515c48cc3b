//! Geometry Store - lookup seams and an in-memory snapshot
//!
//! The engine only reads lands, gardens, trees and structures. Persistence lives
//! elsewhere; callers hand the engine anything implementing the lookup traits.
//! `InMemoryStore` is the snapshot implementation used by the API server and tests,
//! indexed with FxHashMap for O(1) lookups.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::{Garden, Land, Structure, Tree};

/// Land lookup by id
pub trait LandLookup {
    fn land(&self, land_id: i64) -> Option<Land>;
}

/// Trees (and optionally structures) standing on a land
pub trait ShadeCasterLookup {
    fn trees_on_land(&self, land_id: i64) -> Vec<Tree>;

    fn structures_on_land(&self, _land_id: i64) -> Vec<Structure> {
        Vec::new()
    }
}

/// Serialized snapshot of every row the engine reads
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeometrySnapshot {
    #[serde(default)]
    pub lands: Vec<Land>,
    #[serde(default)]
    pub gardens: Vec<Garden>,
    #[serde(default)]
    pub trees: Vec<Tree>,
    #[serde(default)]
    pub structures: Vec<Structure>,
}

/// In-memory rows indexed by id and by land
#[derive(Debug, Default)]
pub struct InMemoryStore {
    lands: FxHashMap<i64, Land>,
    gardens: FxHashMap<i64, Garden>,
    trees: FxHashMap<i64, Tree>,
    structures: FxHashMap<i64, Structure>,
    trees_by_land: FxHashMap<i64, Vec<i64>>,
    structures_by_land: FxHashMap<i64, Vec<i64>>,
    gardens_by_land: FxHashMap<i64, Vec<i64>>,
}

impl InMemoryStore {
    pub fn from_snapshot(snapshot: GeometrySnapshot) -> Self {
        let mut store = Self::default();
        for land in snapshot.lands {
            store.lands.insert(land.id, land);
        }
        for garden in snapshot.gardens {
            if let Some(land_id) = garden.land_id {
                store.gardens_by_land.entry(land_id).or_default().push(garden.id);
            }
            store.gardens.insert(garden.id, garden);
        }
        for tree in snapshot.trees {
            store.trees_by_land.entry(tree.land_id).or_default().push(tree.id);
            store.trees.insert(tree.id, tree);
        }
        for structure in snapshot.structures {
            store.structures_by_land.entry(structure.land_id).or_default().push(structure.id);
            store.structures.insert(structure.id, structure);
        }
        store
    }

    /// Load a JSON snapshot file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file: {:?}", path))?;
        let snapshot: GeometrySnapshot = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse snapshot JSON")?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn garden(&self, garden_id: i64) -> Option<&Garden> {
        self.gardens.get(&garden_id)
    }

    pub fn tree(&self, tree_id: i64) -> Option<&Tree> {
        self.trees.get(&tree_id)
    }

    pub fn structure(&self, structure_id: i64) -> Option<&Structure> {
        self.structures.get(&structure_id)
    }

    /// Gardens on a land, ordered by id
    pub fn gardens_on_land(&self, land_id: i64) -> Vec<Garden> {
        let mut gardens: Vec<Garden> = self
            .gardens_by_land
            .get(&land_id)
            .map(|ids| ids.iter().filter_map(|id| self.gardens.get(id).cloned()).collect())
            .unwrap_or_default();
        gardens.sort_by_key(|g| g.id);
        gardens
    }

    pub fn len(&self) -> usize {
        self.lands.len() + self.gardens.len() + self.trees.len() + self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LandLookup for InMemoryStore {
    fn land(&self, land_id: i64) -> Option<Land> {
        self.lands.get(&land_id).cloned()
    }
}

impl ShadeCasterLookup for InMemoryStore {
    fn trees_on_land(&self, land_id: i64) -> Vec<Tree> {
        let mut trees: Vec<Tree> = self
            .trees_by_land
            .get(&land_id)
            .map(|ids| ids.iter().filter_map(|id| self.trees.get(id).cloned()).collect())
            .unwrap_or_default();
        trees.sort_by_key(|t| t.id);
        trees
    }

    fn structures_on_land(&self, land_id: i64) -> Vec<Structure> {
        let mut structures: Vec<Structure> = self
            .structures_by_land
            .get(&land_id)
            .map(|ids| ids.iter().filter_map(|id| self.structures.get(id).cloned()).collect())
            .unwrap_or_default();
        structures.sort_by_key(|s| s.id);
        structures
    }
}

/// Tree-only lookup over a slice, for callers that already hold the rows
impl ShadeCasterLookup for [Tree] {
    fn trees_on_land(&self, land_id: i64) -> Vec<Tree> {
        self.iter().filter(|t| t.land_id == land_id).cloned().collect()
    }
}

impl LandLookup for [Land] {
    fn land(&self, land_id: i64) -> Option<Land> {
        self.iter().find(|l| l.id == land_id).cloned()
    }
}
