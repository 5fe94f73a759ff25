use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub miles: u32,
}
