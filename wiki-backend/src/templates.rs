//! Server-rendered pages.
//!
//! Templates are embedded at compile time and share `layout.html`. Autoescape
//! is on for every `.html` template; only the rendered entry body is marked
//! safe.

use minijinja::{context, Environment};
use once_cell::sync::Lazy;

use crate::forms::NewEntryForm;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("entry.html", include_str!("../templates/entry.html")),
    ("search.html", include_str!("../templates/search.html")),
    ("new_entry.html", include_str!("../templates/new_entry.html")),
    ("edit.html", include_str!("../templates/edit.html")),
    ("error.html", include_str!("../templates/error.html")),
    ("_errors.html", include_str!("../templates/_errors.html")),
];

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_filter("wiki_url", wiki_url);
    for &(name, source) in TEMPLATES {
        env.add_template(name, source)
            .unwrap_or_else(|e| panic!("embedded template {} failed to parse: {}", name, e));
    }
    env
});

/// URL path of an entry's page, with the title percent-encoded
pub fn entry_url(title: &str) -> String {
    format!("/wiki/{}", urlencoding::encode(title))
}

/// URL path of an entry's edit form
pub fn edit_url(title: &str) -> String {
    format!("/edit/{}", urlencoding::encode(title))
}

/// URL-encoded paths carry nothing that needs HTML escaping
fn safe_url(url: String) -> minijinja::Value {
    minijinja::Value::from_safe_string(url)
}

fn wiki_url(title: String) -> minijinja::Value {
    safe_url(entry_url(&title))
}

fn render(name: &str, ctx: minijinja::Value) -> Result<String, minijinja::Error> {
    ENV.get_template(name)?.render(ctx)
}

pub fn render_index(titles: &[String]) -> Result<String, minijinja::Error> {
    render("index.html", context! { entries => titles })
}

pub fn render_entry(title: &str, html: &str) -> Result<String, minijinja::Error> {
    render(
        "entry.html",
        context! {
            title => title,
            content => minijinja::Value::from_safe_string(html.to_string()),
            edit_url => safe_url(edit_url(title)),
        },
    )
}

pub fn render_search(query: &str, candidates: &[String]) -> Result<String, minijinja::Error> {
    render("search.html", context! { query => query, candidates => candidates })
}

pub fn render_new_entry(form: &NewEntryForm, errors: &[String]) -> Result<String, minijinja::Error> {
    render("new_entry.html", context! { form => form, errors => errors })
}

pub fn render_edit(title: &str, content: &str, errors: &[String]) -> Result<String, minijinja::Error> {
    render(
        "edit.html",
        context! {
            title => title,
            content => content,
            errors => errors,
            action => safe_url(edit_url(title)),
        },
    )
}

pub fn render_error(message: &str) -> Result<String, minijinja::Error> {
    render("error.html", context! { message => message })
}
