//! # Course Store
//!
//! In-memory ordered collection of course records.
//!
//! Lookups are linear scans; the catalog is expected to stay small. The
//! store itself does not lock: the HTTP layer owns it behind an `RwLock`
//! so concurrent handlers never interleave mutations.

use rand::Rng;

use super::course::Course;
use super::errors::{CatalogError, CatalogResult};

/// In-memory course collection, insertion-ordered.
#[derive(Debug, Clone, Default)]
pub struct CourseStore {
    records: Vec<Course>,
}

impl CourseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create a store holding the stock catalog
    pub fn seeded() -> Self {
        Self {
            records: vec![
                Course::new("100", "Frontend using React.js", 500.0),
                Course::new("200", "Frontend using Vue.js", 400.0),
                Course::new("300", "Backend using Node.js", 700.0),
            ],
        }
    }

    /// Append a record unconditionally.
    ///
    /// Uniqueness of `id` is the caller's responsibility; the create
    /// handler checks [`find_by_id`](Self::find_by_id) first.
    pub fn insert(&mut self, course: Course) {
        self.records.push(course);
    }

    /// First record whose id equals the argument
    pub fn find_by_id(&self, id: &str) -> Option<&Course> {
        self.records.iter().find(|c| c.id == id)
    }

    /// Position of the first record whose id equals the argument
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|c| c.id == id)
    }

    /// Full replace of the record at `pos`.
    ///
    /// `pos` must come from [`position_of`](Self::position_of).
    pub fn replace_at(&mut self, pos: usize, course: Course) {
        self.records[pos] = course;
    }

    /// Remove the record at `pos`, shifting subsequent records
    pub fn remove_at(&mut self, pos: usize) -> Course {
        self.records.remove(pos)
    }

    /// First record matching name and price exactly (both must match)
    pub fn find_match(&self, name: &str, price: f64) -> Option<&Course> {
        self.records
            .iter()
            .find(|c| c.name == name && c.price == price)
    }

    /// The record at position 0
    pub fn first(&self) -> CatalogResult<&Course> {
        self.records.first().ok_or(CatalogError::Empty)
    }

    /// A record chosen uniformly at random by index.
    ///
    /// Callers must not assume determinism when this retrieval mode is
    /// configured.
    pub fn random_pick(&self) -> CatalogResult<&Course> {
        if self.records.is_empty() {
            return Err(CatalogError::Empty);
        }
        let idx = rand::thread_rng().gen_range(0..self.records.len());
        Ok(&self.records[idx])
    }

    /// All records in insertion order
    pub fn all(&self) -> &[Course] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
