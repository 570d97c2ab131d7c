//! HTTP span helpers.

use uuid::Uuid;

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path_for_span_name(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Placeholder for an identifier following `collection`.
fn placeholder_for(collection: Option<&str>) -> &'static str {
    match collection {
        Some("items") => "{item}",
        Some("products" | "favorites") => "{product}",
        Some("restaurants") => "{restaurant}",
        Some("categories") => "{category}",
        Some("reviews") => "{review}",
        Some(_) | None => "{uuid}",
    }
}

/// Replace identifiers so every request to a route shares one span name.
fn normalise_path_for_span_name(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");
    let mut previous: Option<&str> = None;

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            normalised.push_str(placeholder_for(previous));
        } else {
            normalised.push_str(segment);
        }

        previous = Some(segment);
    }

    normalised
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM: &str = "0195f0a8-4f3c-7d21-9a4e-2b5c6d7e8f90";

    #[test]
    fn identifiers_are_named_after_their_collection() {
        assert_eq!(
            normalise_path_for_span_name(&format!("/basket/items/{ITEM}/increment")),
            "/basket/items/{item}/increment"
        );
        assert_eq!(
            normalise_path_for_span_name(&format!("/basket/products/{ITEM}")),
            "/basket/products/{product}"
        );
        assert_eq!(
            normalise_path_for_span_name(&format!("/favorites/{ITEM}/toggle")),
            "/favorites/{product}/toggle"
        );
        assert_eq!(
            normalise_path_for_span_name(&format!("/reviews/{ITEM}")),
            "/reviews/{review}"
        );
        assert_eq!(
            normalise_path_for_span_name(&format!("/other/{ITEM}")),
            "/other/{uuid}"
        );
    }

    #[test]
    fn span_name_prefixes_method() {
        let names = request_span_name("GET", "/basket/summary");

        assert_eq!(names.otel_path, "/basket/summary");
        assert_eq!(names.otel_span_name, "GET /basket/summary");
    }
}
