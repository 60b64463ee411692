//! Alias table

use crate::error::Issue;
use std::collections::HashMap;

/// Maps a declared alias to the canonical display name it stands for
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `alias` to `canonical`.
    ///
    /// Re-binding an alias to the name it already stands for is accepted.
    /// Binding it to a different name is refused and the first binding is kept.
    pub fn register(&mut self, canonical: &str, alias: &str) -> Result<(), Issue> {
        match self.aliases.get(alias) {
            Some(existing) if existing == canonical => Ok(()),
            Some(existing) => Err(Issue::AliasConflict {
                alias: alias.to_string(),
                existing: existing.clone(),
                requested: canonical.to_string(),
            }),
            None => {
                self.aliases
                    .insert(alias.to_string(), canonical.to_string());
                Ok(())
            }
        }
    }

    /// The canonical name for `name`, or `name` itself when it is not an alias
    pub fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map_or(name, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_substitute() {
        let mut aliases = AliasTable::new();
        aliases.register("Long Name", "L").unwrap();

        assert_eq!(aliases.canonical("L"), "Long Name");
        assert_eq!(aliases.canonical("Other"), "Other");
    }

    #[test]
    fn test_same_binding_is_not_a_conflict() {
        let mut aliases = AliasTable::new();
        aliases.register("Long Name", "L").unwrap();
        assert!(aliases.register("Long Name", "L").is_ok());
        assert_eq!(aliases.canonical("L"), "Long Name");
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let mut aliases = AliasTable::new();
        aliases.register("Long Name", "L").unwrap();

        let err = aliases.register("Other Name", "L").unwrap_err();
        assert_eq!(
            err,
            Issue::AliasConflict {
                alias: "L".to_string(),
                existing: "Long Name".to_string(),
                requested: "Other Name".to_string(),
            }
        );
        assert_eq!(aliases.canonical("L"), "Long Name");
    }
}
