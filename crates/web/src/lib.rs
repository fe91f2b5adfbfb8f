#![forbid(unsafe_code)]

pub mod config;
pub mod errors;
pub mod routers;
pub mod session;
pub mod state;

use lazy_static::lazy_static;
pub use state::AppState;
use tera::{Context, Tera};

lazy_static! {
    pub static ref TEMPLATES: Tera =
        match Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/*")) {
            Ok(template) => template,
            Err(err) => {
                log::error!("Parsing error(s): {}", err);
                ::std::process::exit(1);
            }
        };
}

/// Wraps a rendered fragment in the page shell.
pub fn render_page(title: &str, content: &str) -> tera::Result<String> {
    let mut context = Context::new();
    context.insert("title", title);
    context.insert("content", content);
    TEMPLATES.render("index.html", &context)
}
