//! Plain-text rendering of the pages.

use std::fmt::Write as _;

use pf_app::usecases::{CatalogOverview, ProjectCard, ProjectsView};
use pf_core::catalog::PageSlot;
use pf_core::{Navigator, Route, SiteMetadata, Theme};

/// Navigation bar: routes, active marker, theme toggle label.
pub fn render_nav(navigator: &Navigator, theme: Theme) -> String {
    let links: Vec<String> = Route::ALL
        .iter()
        .map(|route| {
            if navigator.is_active(*route) {
                format!("[{}]", route.label())
            } else {
                route.label().to_string()
            }
        })
        .collect();

    let mut out = format!("{}   ({})", links.join(" | "), theme.toggle_label());
    if navigator.menu_open() {
        out.push_str("\nmenu: ");
        out.push_str(
            &Route::ALL
                .iter()
                .map(|route| route.path())
                .collect::<Vec<_>>()
                .join("  "),
        );
    }
    out
}

/// Banner for the pages without interactive state.
pub fn render_route(route: Route, metadata: &SiteMetadata) -> String {
    match route {
        Route::Home => format!("{}\n{}", metadata.title, metadata.og_description),
        Route::Contact => format!(
            "{}\nSend a message: contact name|email|subject|message",
            route.label()
        ),
        other => format!("{}\n{}", other.label(), metadata.description),
    }
}

/// `‹ 1 … 4 [5] 6 … 9 ›`; `None` when everything fits on one page.
pub fn render_pagination(view: &ProjectsView) -> Option<String> {
    if !view.show_pagination {
        return None;
    }

    let mut parts = vec![if view.has_previous { "‹" } else { " " }.to_string()];
    for slot in view.window.slots() {
        parts.push(match slot {
            PageSlot::Page(page) if page == view.current_page => format!("[{page}]"),
            PageSlot::Page(page) => page.to_string(),
            PageSlot::Ellipsis => "…".to_string(),
        });
    }
    parts.push(if view.has_next { "›" } else { " " }.to_string());

    Some(parts.join(" ").trim_end().to_string())
}

fn render_card(out: &mut String, card: &ProjectCard) {
    let icon = card.icon.as_deref().unwrap_or("•");
    let _ = write!(out, "{icon} {}", card.title);
    if card.featured {
        out.push_str("  ★ Featured");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "   {}", card.kind);
    let _ = writeln!(out, "   {}", card.description);

    if !card.tech.is_empty() {
        let badges: Vec<String> = card.tech.iter().map(|t| format!("[{t}]")).collect();
        let _ = writeln!(out, "   {}", badges.join(" "));
    }
    if !card.links.is_empty() {
        let links: Vec<String> = card
            .links
            .iter()
            .map(|link| format!("{}: {}", link.kind.label(), link.url))
            .collect();
        let _ = writeln!(out, "   {}", links.join("  "));
    }
}

/// Full projects page: stats, category buttons, results label, cards, pagination.
pub fn render_projects(view: &ProjectsView, overview: &CatalogOverview) -> String {
    let mut out = String::new();
    let stats = &overview.stats;

    let _ = writeln!(
        out,
        "Total Projects: {}  Featured: {}  Full Stack: {}  Technologies: {}",
        stats.total, stats.featured, stats.fullstack, stats.distinct_technologies
    );

    let buttons: Vec<String> = overview
        .categories
        .iter()
        .map(|c| {
            let label = format!("{} ({})", c.label, c.count);
            if c.filter == view.category {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect();
    let _ = writeln!(out, "{}", buttons.join("  "));
    let _ = writeln!(out);

    let _ = writeln!(out, "{}  ({} per page)", view.range, view.page_size);
    if let Some(term) = &view.search_term {
        let _ = writeln!(out, "Search results for: \"{term}\"");
    }
    let _ = writeln!(out);

    if view.is_empty() {
        let _ = writeln!(out, "No projects found");
        let _ = writeln!(out, "Try adjusting your search or filter criteria");
    } else {
        for card in &view.cards {
            render_card(&mut out, card);
            let _ = writeln!(out);
        }
    }

    if let Some(line) = render_pagination(view) {
        let _ = writeln!(out, "{line}");
    }

    out.trim_end().to_string()
}
