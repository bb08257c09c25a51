use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductQuery {
    pub limit: Option<u32>,
    pub include_group: bool,
}

impl ProductQuery {
    pub fn first_with_group() -> Self {
        Self {
            limit: Some(1),
            include_group: true,
        }
    }

    pub fn to_sql(&self) -> String {
        let mut buffer = String::new();
        if self.include_group {
            buffer.push_str(
                "SELECT p.id AS product_id, g.id AS group_id, g.name AS group_name \
                 FROM products p \
                 LEFT JOIN groups g ON g.id = p.group_id",
            );
        } else {
            buffer.push_str("SELECT p.id AS product_id FROM products p");
        }
        if let Some(limit) = self.limit {
            buffer.push_str(&format!(" LIMIT {}", limit));
        }
        buffer
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            limit: None,
            include_group: false,
        }
    }
}
