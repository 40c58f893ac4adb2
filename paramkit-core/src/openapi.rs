//! OpenAPI document post-processing
//!
//! Handlers declare their parameters in snake_case while clients see
//! camelCase. [`translate_schema_params`] rewrites an already generated
//! document so the published names match what clients must send.

use crate::case::snake_to_camel;
use serde_json::{Map, Value};

/// Rename query and path parameters of every operation from snake_case to camelCase.
///
/// Path parameters are also renamed inside the path template, so
/// `/users/{user_id}` becomes `/users/{userId}`. Parameters declared at path
/// level are handled the same way as operation parameters. Parameters without
/// an `in` field (such as `$ref` entries) are left alone. Names that are
/// already camelCase are kept, so translating a translated document is a
/// no-op. The input document is not modified.
pub fn translate_schema_params(document: &Value) -> Value {
    let mut translated = document.clone();

    let Some(paths) = document.get("paths").and_then(Value::as_object) else {
        return translated;
    };

    let mut new_paths = Map::with_capacity(paths.len());

    for (path, item) in paths {
        let mut path = path.clone();
        let mut item = item.clone();

        if let Some(item) = item.as_object_mut() {
            for (key, entry) in item.iter_mut() {
                let parameters = if key == "parameters" {
                    Some(entry)
                } else {
                    entry.get_mut("parameters")
                };

                if let Some(parameters) = parameters.and_then(Value::as_array_mut) {
                    for parameter in parameters {
                        translate_parameter(parameter, &mut path);
                    }
                }
            }
        }

        new_paths.insert(path, item);
    }

    translated["paths"] = Value::Object(new_paths);
    translated
}

fn translate_parameter(parameter: &mut Value, path: &mut String) {
    let Some(parameter) = parameter.as_object_mut() else {
        return;
    };

    let location = parameter.get("in").and_then(Value::as_str).map(str::to_owned);
    let Some(old_name) = parameter.get("name").and_then(Value::as_str).map(str::to_owned) else {
        return;
    };

    let new_name = snake_to_camel(&old_name);

    match location.as_deref() {
        Some("query") => {}
        Some("path") => {
            *path = path.replace(&format!("{{{}}}", old_name), &format!("{{{}}}", new_name));
        }
        _ => return,
    }

    if new_name != old_name {
        tracing::trace!(old = %old_name, new = %new_name, "Renamed OpenAPI parameter");
    }
    parameter.insert("name".to_string(), Value::String(new_name));
}
