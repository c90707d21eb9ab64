use serde::{Deserialize, Serialize};

use crate::store::Item;

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedItemResponse {
    pub success: bool,
    pub message: &'static str,
    pub item: Item,
}

#[derive(Debug, Serialize)]
pub struct ItemListResponse {
    pub count: usize,
    pub items: Vec<Item>,
}

/// `item` is a single record, `null`, or a list depending on the route.
#[derive(Debug, Serialize)]
pub struct ItemResponse<T> {
    pub success: bool,
    pub item: T,
}
