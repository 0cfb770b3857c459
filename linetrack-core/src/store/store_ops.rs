use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    model::{LineConfig, LineDefinitions, Route},
    store::{DefinitionStore, StoreError},
};

/// key holding the array of routes
pub const ROUTES_KEY: &str = "gps_routes";
/// key holding the array of line configurations
pub const LINES_KEY: &str = "gps_lines";

pub fn load_routes<S: DefinitionStore + ?Sized>(store: &S) -> Result<Vec<Route>, StoreError> {
    load_array(store, ROUTES_KEY)
}

pub fn load_lines<S: DefinitionStore + ?Sized>(store: &S) -> Result<Vec<LineConfig>, StoreError> {
    load_array(store, LINES_KEY)
}

/// inserts a route, or replaces the stored route with the same id
pub fn save_route<S: DefinitionStore + ?Sized>(
    store: &mut S,
    route: &Route,
) -> Result<(), StoreError> {
    let mut routes = load_routes(store)?;
    upsert(&mut routes, route.clone(), |r| r.id == route.id);
    store_array(store, ROUTES_KEY, &routes)
}

/// inserts a line, or replaces the stored line with the same id
pub fn save_line<S: DefinitionStore + ?Sized>(
    store: &mut S,
    line: &LineConfig,
) -> Result<(), StoreError> {
    let mut lines = load_lines(store)?;
    upsert(&mut lines, line.clone(), |l| l.id == line.id);
    store_array(store, LINES_KEY, &lines)
}

/// loads a line along with the two routes it references.
///
/// # Arguments
///
/// * `store`   - where definitions are kept
/// * `line_id` - id of the line to load
///
/// # Returns
///
/// * the line and its Ida and Vuelta routes, or an error naming the missing definition
pub fn find_line_definitions<S: DefinitionStore + ?Sized>(
    store: &S,
    line_id: &str,
) -> Result<LineDefinitions, StoreError> {
    let line = load_lines(store)?
        .into_iter()
        .find(|l| l.id == line_id)
        .ok_or_else(|| StoreError::MissingLine(line_id.to_string()))?;
    let routes = load_routes(store)?;
    let find_route = |route_id: &str| {
        routes
            .iter()
            .find(|r| r.id == route_id)
            .cloned()
            .ok_or_else(|| StoreError::MissingRoute {
                line_id: line.id.clone(),
                route_id: route_id.to_string(),
            })
    };
    let route_ida = find_route(&line.route_ida_id)?;
    let route_vuelta = find_route(&line.route_vuelta_id)?;
    Ok(LineDefinitions::new(line, route_ida, route_vuelta))
}

fn load_array<S, T>(store: &S, key: &str) -> Result<Vec<T>, StoreError>
where
    S: DefinitionStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key)? {
        None | Some(Value::Null) => Ok(vec![]),
        Some(value) => serde_json::from_value(value).map_err(|source| StoreError::MalformedValue {
            key: key.to_string(),
            source,
        }),
    }
}

fn store_array<S, T>(store: &mut S, key: &str, items: &[T]) -> Result<(), StoreError>
where
    S: DefinitionStore + ?Sized,
    T: Serialize,
{
    let value = serde_json::to_value(items).map_err(|e| {
        StoreError::InternalError(format!("failure serializing values for '{key}': {e}"))
    })?;
    log::debug!("storing {} entries under '{key}'", items.len());
    store.set(key, value)
}

fn upsert<T>(items: &mut Vec<T>, item: T, same: impl Fn(&T) -> bool) {
    match items.iter_mut().find(|existing| same(existing)) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}
