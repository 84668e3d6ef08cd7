//! Path catalog: the named collection of tracks
//!
//! Gameplay addresses paths by name ("Main", "Canyon", "PitLane") and
//! keeps exactly one selected as the active path, which per-frame
//! queries and rendering default to. Lookup is a linear scan - a world
//! holds tens of paths, not thousands.

use std::fmt;

use super::limits;
use super::track::PathTrack;

/// Error type for catalog operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    NameEmpty,
    NameTooLong { len: usize },
    Duplicate(String),
    NotFound(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NameEmpty => write!(f, "path name is empty"),
            CatalogError::NameTooLong { len } => {
                write!(f, "path name too long ({} > {})", len, limits::MAX_NAME_LEN)
            }
            CatalogError::Duplicate(name) => write!(f, "path \"{}\" already exists", name),
            CatalogError::NotFound(name) => write!(f, "no path named \"{}\"", name),
        }
    }
}

fn validate_name(name: &str) -> Result<(), CatalogError> {
    if name.is_empty() {
        return Err(CatalogError::NameEmpty);
    }
    if name.len() > limits::MAX_NAME_LEN {
        return Err(CatalogError::NameTooLong { len: name.len() });
    }
    Ok(())
}

/// Ordered collection of named paths with one active selection
#[derive(Debug, Default)]
pub struct PathCatalog {
    paths: Vec<PathTrack>,
    active: Option<usize>,
}

impl PathCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty track under a unique name.
    ///
    /// The first path created becomes the active path automatically.
    pub fn create(&mut self, name: &str) -> Result<&mut PathTrack, CatalogError> {
        validate_name(name)?;
        if self.find_index(name).is_some() {
            return Err(CatalogError::Duplicate(name.to_string()));
        }
        if self.paths.is_empty() {
            self.active = Some(0);
        }
        let index = self.paths.len();
        self.paths.push(PathTrack::new(name));
        Ok(&mut self.paths[index])
    }

    /// Remove a track and release its point storage.
    ///
    /// Destroying the active path leaves no path active; destroying a
    /// path stored before it shifts the active index down so the same
    /// track stays selected.
    pub fn destroy(&mut self, name: &str) -> Result<(), CatalogError> {
        let index = self
            .find_index(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
        self.paths.remove(index);
        self.active = match self.active {
            Some(a) if a == index => None,
            Some(a) if a > index => Some(a - 1),
            other => other,
        };
        Ok(())
    }

    /// Select the path queries and rendering default to.
    ///
    /// Resets the target's segment cursor so the next lookup scans
    /// fresh instead of walking from wherever the previous selection
    /// left it.
    pub fn set_active(&mut self, name: &str) -> Result<(), CatalogError> {
        let index = self
            .find_index(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
        self.paths[index].reset_cursor();
        self.active = Some(index);
        Ok(())
    }

    /// Storage index of a named path. Case-sensitive linear scan.
    pub fn find_index(&self, name: &str) -> Option<usize> {
        self.paths.iter().position(|p| p.name() == name)
    }

    pub fn active(&self) -> Option<&PathTrack> {
        self.active.map(|i| &self.paths[i])
    }

    pub fn active_mut(&mut self) -> Option<&mut PathTrack> {
        self.active.map(move |i| &mut self.paths[i])
    }

    pub fn get(&self, name: &str) -> Option<&PathTrack> {
        self.find_index(name).map(|i| &self.paths[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PathTrack> {
        self.find_index(name).map(move |i| &mut self.paths[i])
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathTrack> {
        self.paths.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_created_path_becomes_active() {
        let mut catalog = PathCatalog::new();
        catalog.create("Main").unwrap();
        catalog.create("Side").unwrap();
        assert_eq!(catalog.active().unwrap().name(), "Main");
    }

    #[test]
    fn test_create_validates_names() {
        let mut catalog = PathCatalog::new();
        assert!(matches!(catalog.create(""), Err(CatalogError::NameEmpty)));

        let long = "x".repeat(limits::MAX_NAME_LEN + 1);
        assert!(matches!(
            catalog.create(&long),
            Err(CatalogError::NameTooLong { .. })
        ));

        catalog.create("Main").unwrap();
        assert!(matches!(
            catalog.create("Main"),
            Err(CatalogError::Duplicate(_))
        ));
        // Names are case-sensitive
        catalog.create("main").unwrap();
    }

    #[test]
    fn test_destroy_fixes_active_index() {
        let mut catalog = PathCatalog::new();
        catalog.create("A").unwrap();
        catalog.create("B").unwrap();
        catalog.create("C").unwrap();
        catalog.set_active("C").unwrap();

        // Destroying an earlier path keeps the same track selected
        catalog.destroy("A").unwrap();
        assert_eq!(catalog.active().unwrap().name(), "C");

        // Destroying the active path deselects
        catalog.destroy("C").unwrap();
        assert!(catalog.active().is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_destroy_missing_is_an_error() {
        let mut catalog = PathCatalog::new();
        assert_eq!(
            catalog.destroy("Nope"),
            Err(CatalogError::NotFound("Nope".to_string()))
        );
    }

    #[test]
    fn test_set_active_missing_is_an_error() {
        let mut catalog = PathCatalog::new();
        catalog.create("Main").unwrap();
        assert!(catalog.set_active("Ghost").is_err());
        assert_eq!(catalog.active().unwrap().name(), "Main");
    }
}
