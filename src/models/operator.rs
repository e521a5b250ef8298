use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// The authenticated username an action is attributed to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
pub struct Operator(String);

impl Operator {
    pub fn new(username: &str) -> Self {
        Self(username.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
