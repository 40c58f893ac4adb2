//! OpenAPI document for the users API
//!
//! Operations are declared with snake_case parameter names; the published
//! document is passed through [`translate_schema_params`] so it shows the
//! camelCase names clients actually send.

use paramkit_config::SortingConfig;
use paramkit_core::translate_schema_params;
use paramkit_web::SortFields;
use serde_json::Value;
use utoipa::OpenApi;

use crate::routes::users::{self, UserResponse, UserSort};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "Example service for paramkit pagination and sorting",
        version = "0.1.0"
    ),
    paths(users::list_users, users::get_user),
    components(schemas(UserResponse)),
    tags((name = "users", description = "User listing and lookup"))
)]
pub struct ApiDoc;

/// Build the client-facing OpenAPI document
pub fn document(sorting: &SortingConfig) -> serde_json::Result<Value> {
    let mut document = serde_json::to_value(ApiDoc::openapi())?;

    let sort = UserSort::sorting(sorting);
    set_query_example(&mut document, "/users/", "sort", sort.example());

    Ok(translate_schema_params(&document))
}

fn set_query_example(document: &mut Value, path: &str, name: &str, example: String) {
    let Some(parameters) = document
        .pointer_mut(&format!("/paths/{}/get/parameters", path.replace('~', "~0").replace('/', "~1")))
        .and_then(Value::as_array_mut)
    else {
        return;
    };

    if let Some(parameter) = parameters
        .iter_mut()
        .find(|parameter| parameter.get("name").and_then(Value::as_str) == Some(name))
    {
        parameter["example"] = Value::String(example);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameter_names(document: &Value, path: &str) -> Vec<String> {
        document["paths"][path]["get"]["parameters"]
            .as_array()
            .unwrap()
            .iter()
            .map(|parameter| parameter["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_query_names_are_camel_case() {
        let document = document(&SortingConfig::default()).unwrap();
        assert_eq!(
            parameter_names(&document, "/users/"),
            vec!["page", "pageSize", "sort", "age", "isActive"]
        );
    }

    #[test]
    fn test_path_template_is_camel_case() {
        let document = document(&SortingConfig::default()).unwrap();
        assert!(document["paths"].get("/users/{userId}").is_some());
        assert_eq!(parameter_names(&document, "/users/{userId}"), vec!["userId"]);
    }

    #[test]
    fn test_sort_example_uses_delimiter() {
        let config = SortingConfig {
            delimiter: ";".to_string(),
            ..Default::default()
        };
        let document = document(&config).unwrap();
        assert_eq!(
            document["paths"]["/users/"]["get"]["parameters"][2]["example"],
            "id;age;name;isActive"
        );
    }
}
