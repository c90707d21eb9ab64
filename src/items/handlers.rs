use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::{CreateItemRequest, CreatedItemResponse, ItemListResponse, ItemResponse};
use crate::{
    auth::session::Session,
    error::{ApiError, ApiResult},
    extract::{required, ApiJson},
    state::AppState,
    store::{Item, NewItem},
};

#[instrument(skip(state, session, payload))]
pub async fn create_item(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<CreateItemRequest>,
) -> ApiResult<(StatusCode, Json<CreatedItemResponse>)> {
    let owner = session.user()?.id;
    let new_item = NewItem {
        title: required(payload.title, "title")?,
        category: required(payload.category, "category")?,
        location: required(payload.location, "location")?,
        description: required(payload.description, "description")?,
        email: required(payload.email, "email")?,
        owner,
    };

    let item = state.items.create(new_item).await?;
    info!(item_id = %item.id, user_id = %owner, "item created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedItemResponse {
            success: true,
            message: "Registered Successfully",
            item,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<ItemListResponse>> {
    let items = state.items.list_all().await?;
    Ok(Json(ItemListResponse {
        count: items.len(),
        items,
    }))
}

/// An unknown id yields `item: null`; an id that is not a UUID at all is a 500.
#[instrument(skip(state, _session))]
pub async fn get_item(
    State(state): State<AppState>,
    _session: Session,
    Path(id): Path<String>,
) -> ApiResult<Json<ItemResponse<Option<Item>>>> {
    let id = Uuid::parse_str(&id)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("malformed item id {id:?}: {e}")))?;
    let item = state.items.find_by_id(id).await?;
    Ok(Json(ItemResponse {
        success: true,
        item,
    }))
}

#[instrument(skip(state, session))]
pub async fn list_my_items(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<ItemResponse<Vec<Item>>>> {
    let owner = session.user()?.id;
    let items = state.items.list_by_owner(owner).await?;
    Ok(Json(ItemResponse {
        success: true,
        item: items,
    }))
}
