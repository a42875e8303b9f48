//! Snapshots of engine parameters and the differences between them.

use std::fmt::{self, Display};

/// An ordered set of parameter values read from the engine, keyed by parameter name.
///
/// Keys keep the order the engine reported them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<K> {
    entries: Vec<(K, u32)>,
}

/// Talk parameters of a session, keyed by canonical name.
pub type TalkParameters = Snapshot<crate::TalkParam>;

/// Emotion parameters of the current cast, keyed by emotion name.
pub type EmotionParameters = Snapshot<String>;

impl<K> Snapshot<K> {
    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<u32>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    /// Checks whether `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.get(key).is_some()
    }

    /// Iterates over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u32)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the snapshot has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K> FromIterator<(K, u32)> for Snapshot<K> {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K> IntoIterator for Snapshot<K> {
    type Item = (K, u32);
    type IntoIter = std::vec::IntoIter<(K, u32)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Display> Display for Snapshot<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (key, value)) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

/// A parameter whose value differs between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change<K> {
    /// The parameter.
    pub key: K,
    /// The value before the mutation.
    pub old: u32,
    /// The value after the mutation.
    pub new: u32,
}

impl<K: Display> Display for Change<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.key, self.old, self.new)
    }
}

/// Lists the keys present in both snapshots whose values differ, in the order of `after`.
pub fn diff<K: PartialEq + Clone>(before: &Snapshot<K>, after: &Snapshot<K>) -> Vec<Change<K>> {
    after
        .entries
        .iter()
        .filter_map(|(key, new)| {
            let old = before.get(key)?;
            (old != *new).then(|| Change {
                key: key.clone(),
                old,
                new: *new,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(entries: &[(&str, u32)]) -> Snapshot<String> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn identical_snapshots_have_no_changes() {
        let x = snapshot(&[("普通", 70), ("元気", 50)]);
        assert!(diff(&x, &x).is_empty());
        assert!(diff(&Snapshot::<String>::from_iter([]), &Snapshot::from_iter([])).is_empty());
    }

    #[test]
    fn reports_changed_values_in_after_order() {
        let before = snapshot(&[("普通", 70), ("元気", 50), ("怒り", 0)]);
        let after = snapshot(&[("怒り", 72), ("元気", 50), ("普通", 100)]);
        let changes = diff(&before, &after);
        assert_eq!(
            changes,
            [
                Change {
                    key: "怒り".to_string(),
                    old: 0,
                    new: 72
                },
                Change {
                    key: "普通".to_string(),
                    old: 70,
                    new: 100
                },
            ]
        );
        assert_eq!(changes[0].to_string(), "怒り: 0 -> 72");
    }

    #[test]
    fn ignores_keys_missing_on_either_side() {
        let before = snapshot(&[("普通", 70), ("哀しみ", 10)]);
        let after = snapshot(&[("普通", 70), ("喜び", 30)]);
        assert!(diff(&before, &after).is_empty());
    }

    #[test]
    fn lookups_accept_borrowed_keys() {
        let x = snapshot(&[("普通", 70)]);
        assert_eq!(x.get("普通"), Some(70));
        assert!(!x.contains_key("元気"));
        assert_eq!(x.to_string(), "{普通: 70}");
    }
}
