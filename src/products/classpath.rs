use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use crate::target::Target;

/// One classpath element registered for a target: a configuration label
/// and the directory or jar it points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClasspathEntry {
    pub conf: String,
    pub path: PathBuf,
}

impl ClasspathEntry {
    pub fn new(conf: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        ClasspathEntry {
            conf: conf.into(),
            path: path.into(),
        }
    }
}

impl<C: Into<String>, P: AsRef<Path>> From<(C, P)> for ClasspathEntry {
    fn from((conf, path): (C, P)) -> Self {
        ClasspathEntry::new(conf, path.as_ref())
    }
}

/// Classpath entries per target, in the order they were added.
///
/// Adding only ever appends. Cloning yields an independent copy that can be
/// mutated without affecting the original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClasspathProducts {
    by_target: BTreeMap<Target, Vec<ClasspathEntry>>,
}

impl ClasspathProducts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entries` to the list held for `target`.
    pub fn add_for_target<I, E>(&mut self, target: &Target, entries: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<ClasspathEntry>,
    {
        let list = self.by_target.entry(target.clone()).or_default();
        list.extend(entries.into_iter().map(Into::into));
        tracing::trace!("{} now has {} classpath entries", target, list.len());
    }

    /// Append the same `entries` to every target in `targets`.
    pub fn add_for_targets<'a, T, E>(&mut self, targets: T, entries: &[E])
    where
        T: IntoIterator<Item = &'a Target>,
        E: Clone + Into<ClasspathEntry>,
    {
        for target in targets {
            self.add_for_target(target, entries.iter().cloned());
        }
    }

    /// Entries for `target` in insertion order; empty when none were added.
    pub fn get_for_target(&self, target: &Target) -> &[ClasspathEntry] {
        self.by_target.get(target).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Entries for `target` whose configuration is one of `confs`.
    pub fn get_for_target_by_conf(&self, target: &Target, confs: &[&str]) -> Vec<ClasspathEntry> {
        self.get_for_target(target)
            .iter()
            .filter(|e| confs.contains(&e.conf.as_str()))
            .cloned()
            .collect()
    }

    /// Entries for all `targets`, in target order then insertion order. A
    /// `(conf, path)` pair that appears more than once is kept only at its
    /// first position.
    pub fn get_for_targets<'a, T>(&self, targets: T) -> Vec<ClasspathEntry>
    where
        T: IntoIterator<Item = &'a Target>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for target in targets {
            for entry in self.get_for_target(target) {
                if seen.insert(entry) {
                    out.push(entry.clone());
                }
            }
        }
        out
    }

    /// Drop the listed entries from `target`; other entries keep their order.
    pub fn remove_for_target<I, E>(&mut self, target: &Target, entries: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<ClasspathEntry>,
    {
        let doomed: HashSet<ClasspathEntry> = entries.into_iter().map(Into::into).collect();
        if let Some(list) = self.by_target.get_mut(target) {
            list.retain(|e| !doomed.contains(e));
        }
    }

    pub fn len_for_target(&self, target: &Target) -> usize {
        self.get_for_target(target).len()
    }

    /// Targets that have had entries added, in address order.
    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.by_target.keys()
    }
}
