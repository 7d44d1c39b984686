//! JSON fixtures shaped like WordPress REST responses.
//!
//! Available to this crate's tests and, through the `fixtures` feature,
//! to downstream test suites.

use serde_json::{Value, json};

/// Image size entry.
pub fn image(name: &str, width: u32, height: u32) -> Value {
    json!({
        "url": format!("http://localhost:8080/wp-content/uploads/{name}-{width}x{height}.jpg"),
        "width": width,
        "height": height,
    })
}

/// Complete `feature_images` block.
pub fn feature_images(name: &str) -> Value {
    json!({
        "thumbnail": image(name, 150, 150),
        "medium": image(name, 300, 200),
        "medium_large": image(name, 768, 512),
        "large": image(name, 1024, 683),
        "full": image(name, 1920, 1280),
    })
}

/// Plain page with extra fields WordPress would also send.
pub fn base_page(id: u64, slug: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "status": "publish",
        "title": { "rendered": format!("Title of {slug}") },
        "content": { "rendered": format!("<p>Content of {slug}</p>"), "protected": false },
        "feature_images": feature_images(slug),
        "acf": { "subtitle": format!("Subtitle of {slug}") },
    })
}

/// Process page with `steps` process entries.
pub fn process_page(id: u64, slug: &str, steps: usize) -> Value {
    let mut page = base_page(id, slug);
    let process: Vec<Value> = (1..=steps)
        .map(|n| {
            json!({
                "title": format!("Step {n}"),
                "description": format!("Do thing {n}"),
                "image": format!("http://localhost:8080/wp-content/uploads/step-{n}.jpg"),
            })
        })
        .collect();
    page["acf"]["process"] = Value::Array(process);
    page
}

/// Gallery page with `count` gallery entries.
pub fn gallery_page(id: u64, slug: &str, count: u64) -> Value {
    let mut page = base_page(id, slug);
    let gallery: Vec<Value> = (1..=count)
        .map(|n| {
            let name = format!("{slug}-{n}");
            json!({
                "id": 100 + n,
                "large": image(&name, 1024, 683),
                "full": image(&name, 1920, 1280),
            })
        })
        .collect();
    page["gallery"] = Value::Array(gallery);
    page
}

/// Category term.
pub fn category(id: u64, slug: &str) -> Value {
    json!({
        "id": id,
        "count": 3,
        "name": slug.to_uppercase(),
        "slug": slug,
        "link": format!("http://localhost:8080/category/{slug}/"),
    })
}

/// Blog post in one category.
pub fn blog_post(id: u64, slug: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "date": "2025-03-14T09:30:00",
        "title": { "rendered": format!("Post {slug}") },
        "content": { "rendered": format!("<p>Body of {slug}</p>") },
        "feature_images": feature_images(slug),
        "category_details": [category(4, "news")],
    })
}

/// Menu product with the given raw `price` value.
pub fn menu_item(id: u64, name: &str, price: Value) -> Value {
    json!({
        "id": id,
        "title": { "rendered": name },
        "feature_images": feature_images(name),
        "acf": { "description": format!("Tasty {name}"), "price": price },
    })
}
