//! Host and operation registry types
//!
//! Decoding is lenient: a `null` anywhere a value is expected yields that
//! value's zero, and object keys match field names ignoring ASCII case.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A named shell command template a host may run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Operation {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub shell_command: String,
    /// Output is continuous rather than a single bounded result
    #[serde(deserialize_with = "null_as_default")]
    pub is_streaming: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HostConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub host: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub sudo_for_config: bool,
    /// Operation names, matched against `Operation::name` ignoring case
    #[serde(deserialize_with = "null_items_as_default")]
    pub supported_operations: Vec<String>,
}

/// One `gsh-*.json` file: a named profile with its hosts and operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub default_suffix: String,
    #[serde(deserialize_with = "null_items_as_default")]
    pub hosts: Vec<HostConfig>,
    #[serde(deserialize_with = "null_items_as_default")]
    pub operations: Vec<Operation>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_items_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

/// Lower-case every object key and drop `null` members.
///
/// When several keys fold to the same name, the one already in lower case
/// wins; otherwise the last in key order does.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let (exact, variants): (Vec<_>, Vec<_>) = map
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .partition(|(key, _)| *key == key.to_ascii_lowercase());

            let mut folded = Map::new();
            for (key, value) in variants.into_iter().chain(exact) {
                folded.insert(key.to_ascii_lowercase(), fold_keys(value));
            }
            Value::Object(folded)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

impl Config {
    /// Decode a config file's raw bytes.
    ///
    /// A top-level `null` decodes to an empty config. Invalid UTF-8 and
    /// malformed JSON are errors.
    pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Config> {
        let value: Value = serde_json::from_slice(bytes)?;
        if value.is_null() {
            return Ok(Config::default());
        }
        serde_json::from_value(fold_keys(value))
    }

    /// Get the first host whose name matches `name`, ignoring ASCII case
    pub fn get_host(&self, name: &str) -> Option<&HostConfig> {
        self.hosts
            .iter()
            .find(|host| host.name.eq_ignore_ascii_case(name))
    }

    /// Get the first operation whose name matches `name`, ignoring ASCII case
    pub fn get_operation(&self, name: &str) -> Option<&Operation> {
        self.operations
            .iter()
            .find(|op| op.name.eq_ignore_ascii_case(name))
    }
}

impl HostConfig {
    /// Check whether this host lists `op` among its supported operations
    pub fn supports_op(&self, op: &str) -> bool {
        self.supported_operations
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(op))
    }
}

/// Pick a loaded profile by name, ignoring ASCII case. First match wins.
pub fn find_config<'a>(configs: &'a [Config], name: &str) -> Option<&'a Config> {
    configs.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}
