use glyphtex::{DocumentSpec, InMemoryGlyphCatalog, Placement, Transform};

/// A single-level glyph: one filled group plus loose shapes.
pub const SUNFLOWER: &str = r##"<path fill="#3E721D" d="M28 27c-8 0-8 6-8 6V22h-4v11s0-6-8-6c-4 0-7-2-7-2s0 9 9 9h6s0 2 2 2 2-2 2-2h6c9 0 9-9 9-9s-3 2-7 2z"/><g fill="#FFAC33"><path d="M21.125 27.662c-.328 0-.651-.097-.927-.283L18 25.901l-2.198 1.478c-.275.186-.599.283-.927.283z"/><ellipse cx="18" cy="14" rx="9" ry="8"/></g><circle fill="#732700" cx="18" cy="14" r="7"/><circle cx="18" cy="14" r="4"/>"##;

/// A glyph whose nesting is flattened into sibling groups.
pub const NESTED: &str = r##"<g fill="#D99E82"><g fill="#C1694F"><circle cx="9" cy="9" r="2"/></g><circle cx="27" cy="9" r="2"/></g>"##;

/// Uses a tag outside the supported subset.
pub const WITH_UNKNOWN_TAG: &str = r##"<defs><clipPath id="a"/></defs><circle fill="#DD2E44" cx="18" cy="18" r="18"/>"##;

pub fn catalog() -> InMemoryGlyphCatalog {
    InMemoryGlyphCatalog::from_entries([
        ("🌻", SUNFLOWER),
        ("🐻", NESTED),
        ("🔴", WITH_UNKNOWN_TAG),
    ])
}

pub fn placement(glyph: &str, x: f64, y: f64) -> Placement {
    Placement {
        glyph: glyph.to_string(),
        transform: Transform::new(x, y, 1.8, -15.0),
    }
}

/// A cover-like document: a title color, one gradient, a background, and glyphs.
pub fn cover_spec() -> DocumentSpec {
    DocumentSpec {
        colors: vec!["#2D3436".to_string()],
        gradients: vec![["#95E1D3".to_string(), "#F38181".to_string()]],
        backgrounds: vec!["#FFFFFF".to_string()],
        placements: vec![
            placement("🌻", 10.0, 20.0),
            placement("🐻", 120.0, 20.0),
            placement("🌻", 60.0, 200.0),
        ],
    }
}
