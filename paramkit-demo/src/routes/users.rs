//! User endpoints

use axum::{
    extract::Path,
    Extension, Json,
};
use paramkit_core::Paginated;
use paramkit_web::{Filters, Paging, SortFields, Sorted, WebError, WebResult};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

use crate::repo::{User, UserFilters, UserRepo};

/// Sortable user fields
pub struct UserSort;

impl SortFields for UserSort {
    const FIELDS: &'static [&'static str] = &["id", "age", "name", "is_active"];
    const DEFAULT: &'static [&'static str] = &["id"];
}

/// User as returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: u64,
    pub age: u32,
    pub name: String,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            age: user.age,
            name: user.name,
            is_active: user.is_active,
        }
    }
}

/// List users with filtering, sorting and pagination
#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    operation_id = "listUsers",
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("page_size" = Option<u64>, Query, description = "Number of users per page"),
        ("sort" = Option<String>, Query, description = "Comma separated fields, prefix with '-' for descending order"),
        ("age" = Option<u32>, Query, description = "Filter by exact age"),
        ("is_active" = Option<bool>, Query, description = "Filter by active status")
    ),
    responses(
        (status = 200, description = "Page of users"),
        (status = 400, description = "Invalid query parameters")
    )
)]
pub async fn list_users(
    Extension(repo): Extension<Arc<UserRepo>>,
    Paging(paginator): Paging,
    sort: Sorted<UserSort>,
    Filters(filters): Filters<UserFilters>,
) -> WebResult<Json<Paginated<UserResponse>>> {
    debug!(page = paginator.page(), page_size = paginator.page_size(), ?filters, "Listing users");

    let (total, users) = repo
        .get_users(&filters, paginator.limit(), paginator.offset(), &sort)
        .map_err(|e| WebError::internal(e.to_string()))?;

    Ok(Json(paginator.build(users, Some(total)).map(UserResponse::from)))
}

/// Get a single user
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    operation_id = "getUser",
    params(
        ("user_id" = u64, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Extension(repo): Extension<Arc<UserRepo>>,
    Path(user_id): Path<u64>,
) -> WebResult<Json<UserResponse>> {
    repo.get_user(user_id)
        .map(|user| Json(user.into()))
        .ok_or_else(|| WebError::not_found(format!("User {} does not exist", user_id)))
}
