use serde::Deserialize;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Mapping from dash-prefixed token name (`--t5`) to its literal value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>")]
pub struct TokenTable {
    entries: BTreeMap<String, String>,
}

/// Material colours and line thicknesses used on drawings.
///
/// Line thicknesses are halved from the printed pen width, eg. a 0.35mm pen
/// becomes `0.175px`. Editing this table is the intended way to restyle every
/// drawing at once.
const DRAWING_DEFAULTS: &[(&str, &str)] = &[
    // materials
    ("--concrete-color", "rgb(0, 255, 0)"),
    ("--concrete-precast-color", "rgb(0, 255, 255)"),
    ("--concrete-light-color", "rgb(0, 200, 0)"),
    ("--masonry-color", "rgb(129, 64, 0)"),
    ("--insulation-soft-color", "rgb(255, 191, 0)"),
    ("--insulation-hard-color", "rgb(255, 128, 0)"),
    ("--exspandedclay-color", "rgb(195, 175, 165)"),
    ("--wood-element-color", "rgb(129, 96, 0)"),
    ("--wood-color", "rgb(153, 102, 0)"),
    ("--steel-color", "rgb(255, 0, 0)"),
    ("--gypsom-color", "rgb(189, 173, 126)"),
    ("--terrain-color", "rgb(97, 75, 62)"),
    ("--filling-color", "rgb(204, 153, 0)"),
    // stroke widths, t1 very thin through t8 very thick
    ("--t1", "0.03px"),
    ("--t2", "0.06px"),
    ("--t3", "0.09px"),
    ("--t4", "0.125px"),
    ("--t5", "0.175px"),
    ("--t6", "0.25px"),
    ("--t7", "0.35px"),
    ("--t8", "0.5px"),
];

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table for technical drawings.
    pub fn drawing_defaults() -> Self {
        let entries = DRAWING_DEFAULTS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self { entries }
    }

    /// Load a table from a JSON object of `"name": "value"` pairs.
    ///
    /// Names may be given with or without the leading `--`.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| Error::TokenFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Insert or replace a token, normalising the name to its `--` form.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let name = normalize_name(name)?;
        self.entries.insert(name, value.into());
        Ok(())
    }

    /// Layer `other` over this table; its values win on conflicts.
    pub fn extend(&mut self, other: TokenTable) {
        self.entries.extend(other.entries);
    }

    /// Look up a token by its dash-prefixed name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }
}

impl TryFrom<BTreeMap<String, String>> for TokenTable {
    type Error = Error;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self> {
        let mut table = TokenTable::new();
        for (name, value) in map {
            table.insert(&name, value)?;
        }
        Ok(table)
    }
}

impl<'a> IntoIterator for &'a TokenTable {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn normalize_name(name: &str) -> Result<String> {
    let bare = name.strip_prefix("--").unwrap_or(name);
    if bare.is_empty() || !bare.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(Error::InvalidTokenName(name.to_string()));
    }
    Ok(format!("--{}", bare))
}
