// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The OpenStack `clouds.yaml` document.
//!
//! ```yaml
//! clouds:
//!   openstack:
//!     auth: ...
//!     region_name: ...
//! ```
//!
//! Each cloud must be a mapping; its contents are kept as an opaque YAML tree
//! and written back as they were read.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CloudsDocument {
    /// Cloud name to cloud mapping; every value is a `Value::Mapping`
    #[serde(default, deserialize_with = "cloud_mappings")]
    clouds: Mapping,
    /// Other top-level keys, carried through untouched
    #[serde(flatten)]
    pub extra: Mapping,
}

fn cloud_mappings<'de, D>(deserializer: D) -> Result<Mapping, D::Error>
where
    D: Deserializer<'de>,
{
    let clouds = Option::<Mapping>::deserialize(deserializer)?.unwrap_or_default();

    if let Some((name, _)) = clouds.iter().find(|(_, cloud)| !cloud.is_mapping()) {
        return Err(D::Error::custom(format!(
            "cloud {:?} is not a mapping",
            key_to_string(name)
        )));
    }

    Ok(clouds)
}

impl CloudsDocument {
    pub fn from_slice(data: &[u8]) -> Result<Self, serde_yaml::Error> {
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_yaml::from_slice(data)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Cloud names in document order
    pub fn names(&self) -> Vec<String> {
        self.clouds.keys().map(key_to_string).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.clouds.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Mapping> {
        self.clouds.get(name).and_then(Value::as_mapping)
    }

    /// Insert or replace a cloud wholesale, returning the previous value
    pub fn insert(&mut self, name: &str, cloud: Mapping) -> Option<Mapping> {
        match self
            .clouds
            .insert(Value::String(name.to_string()), Value::Mapping(cloud))
        {
            Some(Value::Mapping(previous)) => Some(previous),
            _ => None,
        }
    }

    /// The only cloud in the document, or every name when there isn't exactly one
    pub fn single_cloud(&self) -> Result<&Mapping, Vec<String>> {
        match self.clouds.values().next().and_then(Value::as_mapping) {
            Some(cloud) if self.clouds.len() == 1 => Ok(cloud),
            _ => Err(self.names()),
        }
    }
}

fn key_to_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
