use serde::{Deserialize, Serialize};

use crate::model::Traversal;

/// Options for a shortest path query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Whether one-way roads restrict the direction of travel
    pub traversal: Traversal,
}

impl SearchConfig {
    pub fn respecting_one_way() -> Self {
        Self {
            traversal: Traversal::RespectOneWay,
        }
    }
}
