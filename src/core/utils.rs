//! Path transformation utilities for scaffold generation
//!
//! These turn an OpenAPI path template into the directory name used in the
//! output tree and into the request path runn should call.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters dropped from a path before it becomes a directory name
static DIR_NAME_STRIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[@{}]+").expect("directory name pattern is valid"));

/// A `{param}` placeholder, tolerating whitespace inside the braces
static PATH_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\s*([^}\s]*)\s*\}").expect("path parameter pattern is valid"));

/// Derives a file-system-safe directory name from an OpenAPI path.
///
/// Every `{`, `}` and `@` is removed, the remainder is split on `sep`, the
/// first character of each segment is upper-cased (the rest is kept as is)
/// and the segments are joined without a separator.
///
/// # Examples
/// ```
/// use openapi2runn::core::utils::dir_name;
///
/// assert_eq!(dir_name("/users/{id}/orders", "/"), "UsersIdOrders");
/// assert_eq!(dir_name("/users/@me", "/"), "UsersMe");
/// assert_eq!(dir_name("/petsByStatus", "/"), "PetsByStatus");
/// ```
pub fn dir_name(path: &str, sep: &str) -> String {
    DIR_NAME_STRIP
        .replace_all(path, "")
        .split(sep)
        .map(capitalize_first)
        .collect()
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Rewrites `{param}` placeholders into runn variable references.
///
/// # Examples
/// ```
/// use openapi2runn::core::utils::rewrite_path;
///
/// assert_eq!(rewrite_path("/a/{x}/b"), "/a/{{ vars.req.query.x }}/b");
/// assert_eq!(rewrite_path("/plain"), "/plain");
/// ```
pub fn rewrite_path(path: &str) -> String {
    PATH_PARAM
        .replace_all(path, "{{ vars.req.query.${1} }}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_name() {
        assert_eq!(dir_name("/users/{id}/orders", "/"), "UsersIdOrders");
        assert_eq!(dir_name("/items/{id}", "/"), "ItemsId");
        assert_eq!(dir_name("/users/@me", "/"), "UsersMe");
        assert_eq!(dir_name("/", "/"), "");
        assert_eq!(dir_name("", "/"), "");
    }

    #[test]
    fn test_dir_name_preserves_interior_case() {
        assert_eq!(dir_name("/findByStatus", "/"), "FindByStatus");
        assert_eq!(dir_name("/API/v1", "/"), "APIV1");
        assert_eq!(dir_name("/user-name/x_y", "/"), "User-nameX_y");
    }

    #[test]
    fn test_dir_name_is_stable() {
        let path = "/stores/{storeId}/items/{itemId}";
        assert_eq!(dir_name(path, "/"), dir_name(path, "/"));
        assert_eq!(dir_name(path, "/"), "StoresStoreIdItemsItemId");
    }

    #[test]
    fn test_dir_name_non_ascii() {
        assert_eq!(dir_name("/élan/ß", "/"), "ÉlanSS");
    }

    #[test]
    fn test_rewrite_path() {
        assert_eq!(rewrite_path("/a/{x}/b"), "/a/{{ vars.req.query.x }}/b");
        assert_eq!(
            rewrite_path("/items/{id}"),
            "/items/{{ vars.req.query.id }}"
        );
        assert_eq!(
            rewrite_path("/s/{ storeId }/i/{itemId}"),
            "/s/{{ vars.req.query.storeId }}/i/{{ vars.req.query.itemId }}"
        );
    }

    #[test]
    fn test_rewrite_path_without_placeholders() {
        assert_eq!(rewrite_path("/users/me"), "/users/me");
        assert_eq!(rewrite_path(""), "");
    }
}
