//! Encyclopedia pages: index, entry view, search, create, edit and random entry.
//!
//! Every "not found" / "already exists" / bad-input condition comes back as a
//! rendered error page via `WikiError`'s `ResponseError` impl.

use actix_web::http::header::{self, ContentType};
use actix_web::http::StatusCode;
use actix_web::error::UrlencodedError;
use actix_web::{web, HttpRequest, HttpResponse};
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::error::{Result, WikiError};
use crate::forms::{self, EditEntryForm, NewEntryForm};
use crate::{markup, search, templates, AppState};

/// Largest accepted form body (entry markdown plus title)
pub const MAX_FORM_BYTES: usize = 2 * 1024 * 1024;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default()
            .limit(MAX_FORM_BYTES)
            .error_handler(form_error),
    )
    .route("/", web::get().to(index))
        .service(
            web::resource("/newEntry")
                .route(web::get().to(new_entry_form))
                .route(web::post().to(create_entry)),
        )
        .route("/wiki/{title}", web::get().to(view_entry))
        .route("/search", web::get().to(search_entries))
        .service(
            web::resource("/edit/{title}")
                .route(web::get().to(edit_form))
                .route(web::post().to(update_entry)),
        )
        .route("/random", web::get().to(random_entry));
}

/// Rejected form bodies become a rendered error page instead of plain text
fn form_error(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    let reason = match err {
        UrlencodedError::Overflow { size, limit } => format!(
            "The submitted form is too large ({} bytes, limit {} bytes)",
            size, limit
        ),
        other => format!("The submitted form could not be read: {}", other),
    };
    WikiError::ValidationFailed(vec![reason]).into()
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

fn redirect_to_entry(title: &str) -> HttpResponse {
    HttpResponse::Found()
        .append_header((header::LOCATION, templates::entry_url(title)))
        .finish()
}

/// List all entries
async fn index(state: web::Data<AppState>) -> Result<HttpResponse> {
    let titles = state.store.list()?;
    Ok(html(StatusCode::OK, templates::render_index(&titles)?))
}

/// Render a single entry as HTML
async fn view_entry(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let title = path.into_inner();

    // A title that could never have been stored cannot exist
    if forms::validate_title(&title).is_err() {
        return Err(WikiError::NotFound(title));
    }

    let content = state
        .store
        .get(&title)?
        .ok_or_else(|| WikiError::NotFound(title.clone()))?;

    let body = markup::render(&content);
    Ok(html(StatusCode::OK, templates::render_entry(&title, &body)?))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// Jump straight to an exact title match, otherwise list candidates
async fn search_entries(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    // Exact means exact: " Git" is not the title "Git"
    if !query.q.is_empty() && state.store.exists(&query.q)? {
        return Ok(redirect_to_entry(&query.q));
    }

    let q = query.q.trim();

    let titles = state.store.list()?;
    let candidates = search::match_titles(q, &titles);
    log::debug!("[WIKI] Search '{}' matched {} of {} entries", q, candidates.len(), titles.len());

    Ok(html(StatusCode::OK, templates::render_search(q, &candidates)?))
}

async fn new_entry_form() -> Result<HttpResponse> {
    let page = templates::render_new_entry(&NewEntryForm::default(), &[])?;
    Ok(html(StatusCode::OK, page))
}

/// Create a new entry; refuses to overwrite an existing title
async fn create_entry(
    state: web::Data<AppState>,
    form: web::Form<NewEntryForm>,
) -> Result<HttpResponse> {
    let form = form.into_inner();

    let entry = match form.validate() {
        Ok(entry) => entry,
        Err(WikiError::ValidationFailed(reasons)) => {
            let page = templates::render_new_entry(&form, &reasons)?;
            return Ok(html(StatusCode::BAD_REQUEST, page));
        }
        Err(e) => return Err(e),
    };

    if state.store.exists(&entry.title)? {
        return Err(WikiError::AlreadyExists(entry.title));
    }

    state.store.save(&entry.title, &entry.content)?;
    log::info!("[WIKI] Created entry '{}'", entry.title);

    Ok(redirect_to_entry(&entry.title))
}

/// Edit form pre-filled with the current content (empty if the entry is missing)
async fn edit_form(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let title = forms::validate_title(&path.into_inner())?;
    let content = state.store.get(&title)?.unwrap_or_default();
    Ok(html(StatusCode::OK, templates::render_edit(&title, &content, &[])?))
}

/// Overwrite an entry unconditionally; the entry is recreated if it vanished
async fn update_entry(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<EditEntryForm>,
) -> Result<HttpResponse> {
    let title = forms::validate_title(&path.into_inner())?;

    let content = match form.validate() {
        Ok(content) => content,
        Err(WikiError::ValidationFailed(reasons)) => {
            let page = templates::render_edit(&title, &form.content, &reasons)?;
            return Ok(html(StatusCode::BAD_REQUEST, page));
        }
        Err(e) => return Err(e),
    };

    state.store.save(&title, &content)?;
    log::info!("[WIKI] Updated entry '{}'", title);

    Ok(redirect_to_entry(&title))
}

async fn random_entry(state: web::Data<AppState>) -> Result<HttpResponse> {
    let titles = state.store.list()?;
    let title = titles
        .choose(&mut rand::thread_rng())
        .ok_or(WikiError::NoEntries)?;
    Ok(redirect_to_entry(title))
}
