use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub id: i32,
    pub name: String,
}

impl Group {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: i32,
    pub group: Option<Group>,
}

impl Product {
    pub fn with_group(id: i32, group: Group) -> Self {
        Self {
            id,
            group: Some(group),
        }
    }

    pub fn bare(id: i32) -> Self {
        Self { id, group: None }
    }
}
