//! Name-keyed activity collection
//! 
//! Keeps activities in insertion order so listings come back in the
//! order the directory was seeded, and serializes as a plain JSON object.

use std::collections::HashSet;
use std::fmt;

use anyhow::bail;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Activity, DirectoryError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, Activity)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the activity stored under `name`.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries.iter_mut().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sign `email` up for the activity called `name`.
    ///
    /// Checks run in a fixed order: existence, duplicate, capacity.
    pub fn signup(&mut self, name: &str, email: &str) -> Result<(), DirectoryError> {
        self.get_mut(name)
            .ok_or(DirectoryError::NotFound)?
            .enroll(email)
    }

    /// Check every roster against capacity and for repeated emails.
    ///
    /// Catalogs built through `signup` always pass; this guards data loaded from disk.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, activity) in self.iter() {
            if activity.participants.len() > activity.max_participants {
                bail!(
                    "activity '{}' has {} participants but only {} places",
                    name,
                    activity.participants.len(),
                    activity.max_participants
                );
            }
            let mut seen = HashSet::new();
            if let Some(dup) = activity.participants.iter().find(|p| !seen.insert(p.as_str())) {
                bail!("activity '{}' lists {} more than once", name, dup);
            }
        }
        Ok(())
    }
}

impl<N: Into<String>> FromIterator<(N, Activity)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (N, Activity)>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        for (name, activity) in iter {
            catalog.insert(name, activity);
        }
        catalog
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Catalog, A::Error> {
                let mut catalog = Catalog::new();
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    catalog.insert(name, activity);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
