//! Open (navigate) command handler
//!
//! Resolves a path through the role-gated router against the current
//! session and renders the resulting page, printing every redirect hop
//! along the way.

use internhub::config::Config;
use internhub::router::{self, Page, Resolution};
use internhub::session::SessionStore;
use internhub::store::DataStore;
use internhub::views::{
    AdminPanelView, CatalogView, DashboardView, LoginView, NotFoundView, Render, ViewContext,
};
use internhub::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound on redirect hops; the route table cannot loop, so hitting
/// this means a routing bug rather than a user error.
const MAX_REDIRECTS: usize = 4;

/// Run the open command.
///
/// # Arguments
/// * `path` - Path to navigate to (e.g., `/dashboard`)
/// * `search` - Catalog search query (catalog page only)
/// * `domain` - Catalog domain filter (catalog page only)
/// * `output` - Optional file to write the render to instead of stdout
/// * `config` - Configuration providing the session file and exports dir
pub fn run(
    path: &str,
    search: Option<String>,
    domain: Option<String>,
    output: Option<&Path>,
    config: &Config,
) {
    let store = DataStore::sample();
    let session = SessionStore::load(config.session_file_path());

    let Some(page) = navigate(path, &session) else {
        error!("Redirect limit exceeded while resolving '{path}'");
        eprintln!("✗ Too many redirects while resolving '{path}'");
        return;
    };

    let ctx = ViewContext::new(&store, session.current_user());
    let rendered = render_page(page, &ctx, search, domain);

    match output {
        Some(file) => {
            if let Err(e) = export_render(&rendered, file, config) {
                error!("Export failed for {}: {e}", file.display());
                eprintln!("{e}");
            }
        }
        None => print!("{rendered}"),
    }
}

/// Follow the router until it yields a page, printing each hop
fn navigate(path: &str, session: &SessionStore) -> Option<Page> {
    let mut current = path.to_string();

    for _ in 0..=MAX_REDIRECTS {
        match router::resolve(&current, session.current_user()) {
            Resolution::Page(page) => {
                info!("Resolved '{current}' to the {page} page");
                return Some(page);
            }
            Resolution::Redirect(next) => {
                println!("→ redirected to {next}");
                current = next.to_string();
            }
        }
    }

    None
}

/// Render the resolved page with the catalog filters applied when relevant
fn render_page(
    page: Page,
    ctx: &ViewContext,
    search: Option<String>,
    domain: Option<String>,
) -> String {
    match page {
        Page::Catalog => CatalogView::new(search.unwrap_or_default(), domain).render(ctx),
        Page::Login => LoginView.render(ctx),
        Page::Dashboard => DashboardView.render(ctx),
        Page::Admin => AdminPanelView.render(ctx),
        Page::NotFound => NotFoundView.render(ctx),
    }
}

/// Write a render to a file, placing relative paths in the exports dir
fn export_render(rendered: &str, file: &Path, config: &Config) -> Result<(), String> {
    let target: PathBuf = if file.is_absolute() {
        file.to_path_buf()
    } else {
        PathBuf::from(&config.paths.exports_dir).join(file)
    };

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            format!("✗ Failed to create exports directory {}: {e}", parent.display())
        })?;
    }
    fs::write(&target, rendered)
        .map_err(|e| format!("✗ Failed to write {}: {e}", target.display()))?;

    println!("✓ View exported: {}", target.display());
    info!("View exported to: {}", target.display());
    Ok(())
}
