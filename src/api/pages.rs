use askama::Template;

/// Landing page served at `/`.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub version: &'a str,
}

impl Default for IndexTemplate<'static> {
    fn default() -> Self {
        Self {
            title: "Medicare Claims XML Generator",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
