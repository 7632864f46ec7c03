use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identity of a module in the build tree.
///
/// Renders in the same form Gradle project paths use:
/// `app`, `features:playback`, `platform:core`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModuleId {
    App,
    Feature(String),
    Platform(String),
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleId::App => f.write_str("app"),
            ModuleId::Feature(name) => write!(f, "features:{name}"),
            ModuleId::Platform(name) => write!(f, "platform:{name}"),
        }
    }
}

impl std::str::FromStr for ModuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "app" {
            return Ok(ModuleId::App);
        }
        match s.split_once(':') {
            Some(("features", name)) if !name.is_empty() => Ok(ModuleId::Feature(name.to_string())),
            Some(("platform", name)) if !name.is_empty() => Ok(ModuleId::Platform(name.to_string())),
            _ => Err(format!("invalid module id: {s}")),
        }
    }
}

impl Serialize for ModuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ModuleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
