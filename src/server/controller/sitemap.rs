//! Root sitemap listing every documented API route.

use utoipa::openapi::{path::PathItem, OpenApi};

/// HTTP methods of a path item in the order they are listed
fn methods(item: &PathItem) -> Vec<&'static str> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("PATCH", item.patch.is_some()),
        ("DELETE", item.delete.is_some()),
        ("HEAD", item.head.is_some()),
        ("OPTIONS", item.options.is_some()),
    ]
    .into_iter()
    .filter_map(|(method, present)| present.then_some(method))
    .collect()
}

/// Renders an HTML page listing each route of the OpenAPI document.
///
/// Routes without path parameters that accept GET are rendered as links.
pub fn render_sitemap(api: &OpenApi, docs_url: &str) -> String {
    let mut items = String::new();

    for (path, item) in api.paths.paths.iter() {
        let methods = methods(item);
        let linkable = methods.contains(&"GET") && !path.contains('{');

        let route = if linkable {
            format!("<a href=\"{path}\">{path}</a>")
        } else {
            path.to_string()
        };

        items.push_str(&format!(
            "<li><code>{}</code> {}</li>",
            methods.join(", "),
            route
        ));
    }

    format!(
        "<!DOCTYPE html>\
        <html><head><title>Holonet API</title></head><body>\
        <h1>Holonet API</h1>\
        <p>API documentation: <a href=\"{docs_url}\">{docs_url}</a></p>\
        <ul>{items}</ul>\
        </body></html>"
    )
}
