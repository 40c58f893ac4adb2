//! Router construction

use axum::{routing::get, Extension, Json, Router};
use paramkit_config::ParamkitConfig;
use paramkit_core::Pagination;
use paramkit_web::{camel_case_query_layer, LinkScheme};
use serde_json::Value;
use std::sync::Arc;

use crate::openapi;
use crate::repo::UserRepo;
use crate::routes::users;

#[derive(Clone)]
struct ApiDocument(Arc<Value>);

/// Create the users API backed by the fixture repository
pub fn create_app(config: &ParamkitConfig) -> anyhow::Result<Router> {
    create_app_with_repo(config, UserRepo::fixture())
}

pub fn create_app_with_repo(config: &ParamkitConfig, repo: UserRepo) -> anyhow::Result<Router> {
    let document = openapi::document(&config.sorting)?;

    let app = Router::new()
        .route("/users/", get(users::list_users))
        .route("/users/{user_id}", get(users::get_user))
        .route("/openapi.json", get(openapi_json))
        .layer(Extension(Arc::new(repo)))
        .layer(Extension(Pagination::new(config.pagination.clone())))
        .layer(Extension(config.sorting.clone()))
        .layer(Extension(LinkScheme(config.server.link_scheme.clone())))
        .layer(Extension(ApiDocument(Arc::new(document))))
        // Outermost, so every handler sees snake_case query keys
        .layer(camel_case_query_layer());

    Ok(app)
}

async fn openapi_json(Extension(ApiDocument(document)): Extension<ApiDocument>) -> Json<Value> {
    Json(document.as_ref().clone())
}
