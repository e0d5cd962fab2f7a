use serde::Deserialize;

/// CORS configuration
///
/// The defaults grant any origin the POST/OPTIONS verbs and the
/// `Content-Type`/`Authorization` request headers, which is what browser
/// and mini-program callers of the gateway need for preflighted POSTs.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (wildcard "*" or explicit list)
    #[serde(default)]
    pub origins: AllowList,
    /// HTTP methods granted to cross-origin callers
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
    /// Request headers granted to cross-origin callers
    #[serde(default = "default_headers")]
    pub headers: Vec<String>,
    /// Preflight cache lifetime in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: AllowList::Any,
            methods: default_methods(),
            headers: default_headers(),
            max_age: None,
        }
    }
}

fn default_methods() -> Vec<String> {
    vec!["POST".to_owned(), "OPTIONS".to_owned()]
}

fn default_headers() -> Vec<String> {
    vec!["Content-Type".to_owned(), "Authorization".to_owned()]
}

/// Wildcard or explicit list of allowed values
#[derive(Debug, Clone, Default)]
pub enum AllowList {
    /// Match anything
    #[default]
    Any,
    /// Explicit values
    List(Vec<String>),
}

impl<'de> Deserialize<'de> for AllowList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        let values = match Raw::deserialize(deserializer)? {
            Raw::One(value) => vec![value],
            Raw::Many(values) => values,
        };

        if values.iter().any(|value| value == "*") {
            Ok(Self::Any)
        } else {
            Ok(Self::List(values))
        }
    }
}
