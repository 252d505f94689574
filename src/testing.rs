//! Shared JSON fixtures and setup for the wiremock-backed tests.

use serde_json::{Value, json};

/// Opt-in log output for tests, driven by `RUST_LOG`. Safe to call from
/// every test; repeat initializations are ignored.
pub(crate) fn init_test_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}

/// A minimal but complete article payload as the content API serves it.
pub(crate) fn article_value(id: u64, slug: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Artículo {id}"),
        "slug": slug,
        "excerpt": "Resumen breve.",
        "featured_image": format!("https://cdn.example.com/{slug}.jpg"),
        "status": "published",
        "featured": false,
        "views": 100 + id,
        "published_at": "2025-05-06T14:30:00Z",
        "created_at": "2025-05-06T12:00:00Z",
        "time_ago": "hace 2 horas",
        "author_name": "Redacción",
        "category_name": "Ciudad",
        "category_slug": "ciudad",
        "category_color": "#7c3aed",
        "url": format!("/articulo/{slug}"),
    })
}

/// A run of `count` articles with ids starting at `start`.
pub(crate) fn article_run(start: u64, count: u64) -> Vec<Value> {
    (start..start + count)
        .map(|id| article_value(id, &format!("nota-{id}")))
        .collect()
}

/// A `/news` listing envelope.
pub(crate) fn listing_body(items: Vec<Value>, page: u32, limit: u32, total: u64) -> Value {
    json!({
        "success": true,
        "data": items,
        "pagination": { "page": page, "limit": limit, "total": total },
    })
}

/// A category payload.
pub(crate) fn category_value(id: u64, slug: &str, name: &str, sort_order: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "slug": slug,
        "description": format!("Noticias de {name}"),
        "color": "#f97316",
        "article_count": 10 + id,
        "sort_order": sort_order,
        "status": "active",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2025-05-01T00:00:00Z",
    })
}

/// A `/categories` envelope with a small fixed set.
pub(crate) fn categories_body() -> Value {
    json!({
        "success": true,
        "data": [
            category_value(1, "ciudad", "Ciudad", 1),
            category_value(2, "deportes", "Deportes", 2),
            category_value(3, "cultura", "Cultura", 3),
        ],
    })
}
