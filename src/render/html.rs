//! Static HTML
//!
//! Renders a [`PageView`] as a complete HTML document. Used by the preview
//! server and the `render` command; the markup mirrors the Leptos
//! components so the static page and the client app look the same.

use std::fmt::Write;

use super::view::*;

/// Id of the element the scene canvas mounts into
pub const SCENE_MOUNT_ID: &str = "scene";

/// Escape text for HTML element content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole document
pub fn render_page(view: &PageView) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Coletivo Dois de Muitos</title>\n");
    html.push_str("</head>\n");

    match view {
        PageView::Loading => render_loading(&mut html),
        PageView::Loaded(page) => render_loaded(&mut html, page),
    }

    html.push_str("</html>\n");
    html
}

fn render_loading(html: &mut String) {
    html.push_str("<body class=\"bg-black\">\n");
    html.push_str("<div class=\"w-full h-screen flex items-center justify-center bg-black\">");
    html.push_str("<div class=\"text-white text-center\">");
    html.push_str("<div class=\"animate-spin rounded-full h-12 w-12 border-b-2 border-white mx-auto mb-4\"></div>");
    let _ = write!(html, "<p>{}</p>", escape(LOADING_MESSAGE));
    html.push_str("</div></div>\n</body>\n");
}

fn render_loaded(html: &mut String, page: &LoadedPage) {
    html.push_str("<body class=\"bg-black text-white min-h-screen\">\n");
    let _ = writeln!(
        html,
        "<div id=\"{}\" class=\"w-full h-screen relative overflow-hidden\"></div>",
        SCENE_MOUNT_ID
    );

    render_legend(html, &page.legend);

    html.push_str("<div class=\"relative z-10 bg-gradient-to-b from-transparent via-black to-black\">\n");
    render_nfts(html, &page.nfts);
    render_projects(html, &page.projects);
    if let Some(panel) = &page.donations {
        render_donations(html, panel);
    }
    render_footer(html);
    html.push_str("</div>\n</body>\n");
}

fn render_legend(html: &mut String, legend: &[LegendEntry]) {
    html.push_str("<aside class=\"legend absolute top-4 right-6 text-sm z-20 bg-black/70 p-4 rounded-xl border border-white/20\">");
    let _ = write!(html, "<h2 class=\"text-lg font-semibold mb-2\">{}</h2><ul>", escape(LEGEND_TITLE));
    for entry in legend {
        let _ = write!(
            html,
            "<li data-category=\"{}\"><span class=\"inline-block w-3 h-3 rounded-full mr-2\" style=\"background-color: {}\"></span><b>{}</b>: {}</li>",
            escape(entry.key),
            escape(entry.color),
            escape(entry.label),
            escape(entry.description),
        );
    }
    html.push_str("</ul></aside>\n");
}

fn section_open(html: &mut String, id: &str, heading: &str) {
    let _ = write!(
        html,
        "<section id=\"{}\" class=\"max-w-6xl mx-auto px-6 py-16\"><h2 class=\"text-4xl font-bold mb-8 text-center\">{}</h2>",
        id,
        escape(heading)
    );
}

fn render_fields(html: &mut String, fields: &[Field]) {
    html.push_str("<div class=\"text-xs text-gray-400 space-y-1\">");
    for f in fields {
        let _ = write!(
            html,
            "<p><span class=\"font-semibold\">{}:</span> {}</p>",
            escape(f.label),
            escape(&f.value)
        );
    }
    html.push_str("</div>");
}

fn render_link(html: &mut String, link: &LinkButton) {
    let class = match link.kind {
        LinkKind::Listen => "bg-blue-600 hover:bg-blue-700",
        LinkKind::Download => "bg-green-600 hover:bg-green-700",
        LinkKind::Project => "bg-orange-600 hover:bg-orange-700",
    };
    let _ = write!(
        html,
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"text-xs {} px-3 py-1 rounded\">{}</a>",
        escape(&link.href),
        class,
        link.kind.label()
    );
}

fn card_open(html: &mut String, emoji: &str, title: &str, description: &str) {
    html.push_str("<div class=\"card bg-white/5 border border-white/20 rounded-lg p-6\">");
    let _ = write!(
        html,
        "<div class=\"text-3xl mb-3\">{}</div><h3 class=\"text-xl font-semibold mb-2\">{}</h3><p class=\"text-sm text-gray-300 mb-4\">{}</p>",
        escape(emoji),
        escape(title),
        escape(description)
    );
}

fn render_nfts(html: &mut String, nfts: &[NftCard]) {
    section_open(html, "nfts", NFT_HEADING);
    html.push_str("<div class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6\">");
    for card in nfts {
        card_open(html, &card.emoji, &card.title, &card.description);
        render_fields(html, &card.fields);
        if !card.links.is_empty() {
            html.push_str("<div class=\"flex gap-2 mt-4\">");
            for link in &card.links {
                render_link(html, link);
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
    }
    html.push_str("</div></section>\n");
}

fn render_projects(html: &mut String, projects: &[ProjectCard]) {
    section_open(html, "projetos", PROJECT_HEADING);
    html.push_str("<div class=\"grid grid-cols-1 md:grid-cols-2 gap-6\">");
    for card in projects {
        card_open(html, &card.emoji, &card.title, &card.description);
        render_fields(html, &card.fields);
        if let Some(link) = &card.link {
            html.push_str("<div class=\"flex gap-2 mt-4\">");
            render_link(html, link);
            html.push_str("</div>");
        }
        html.push_str("</div>");
    }
    html.push_str("</div></section>\n");
}

fn render_donations(html: &mut String, panel: &DonationPanel) {
    section_open(html, "doacoes", DONATION_HEADING);
    html.push_str("<div class=\"bg-white/5 border border-white/20 rounded-lg p-8 mb-8\">");

    html.push_str("<div class=\"grid grid-cols-2 md:grid-cols-4 gap-6 mb-8\">");
    for stat in &panel.stats {
        let _ = write!(
            html,
            "<div><p class=\"text-sm text-gray-400\">{}</p><p class=\"text-2xl font-bold\">{}</p></div>",
            escape(stat.label),
            escape(&stat.value)
        );
    }
    html.push_str("</div>");

    let _ = write!(
        html,
        "<h3 class=\"text-2xl font-semibold mb-4\">{}</h3><div class=\"space-y-4\">",
        escape(ACTIONS_HEADING)
    );
    for action in &panel.actions {
        let _ = write!(
            html,
            "<div class=\"action border-l-4 border-orange-500 pl-4\"><h4 class=\"font-semibold mb-1\">{}</h4><p class=\"text-sm text-gray-300 mb-2\">{}</p>",
            escape(&action.title),
            escape(&action.description)
        );
        render_fields(html, &action.fields);
        html.push_str("</div>");
    }
    html.push_str("</div></div></section>\n");
}

fn render_footer(html: &mut String) {
    html.push_str("<footer class=\"border-t border-white/20 py-8 px-6 text-center text-gray-400\">");
    let _ = write!(
        html,
        "<p>{}</p><p class=\"mt-2\">{}</p>",
        escape(FOOTER_LINES[0]),
        escape(FOOTER_LINES[1])
    );
    html.push_str("</footer>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DonationSummary, Nft, SiteContent};
    use crate::state::SiteState;

    fn page(content: SiteContent) -> String {
        let mut state = SiteState::new();
        state.finish(content);
        render_page(&PageView::from_state(&state))
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("Música"), "Música");
    }

    #[test]
    fn test_loading_page_has_only_indicator() {
        let html = render_page(&PageView::Loading);
        assert!(html.contains(LOADING_MESSAGE));
        assert!(!html.contains(NFT_HEADING));
        assert!(!html.contains(SCENE_MOUNT_ID));
    }

    #[test]
    fn test_empty_page_renders_sections() {
        let html = page(SiteContent::default());

        assert_eq!(html.matches("<li data-category=").count(), 6);
        assert!(html.contains(NFT_HEADING));
        assert!(html.contains(PROJECT_HEADING));
        assert!(!html.contains(DONATION_HEADING));
        assert!(html.contains(FOOTER_LINES[0]));
        assert_eq!(html.matches("class=\"card ").count(), 0);
    }

    #[test]
    fn test_nft_card_text_is_escaped() {
        let html = page(SiteContent {
            nfts: vec![Nft {
                id: 1,
                title: "<script>alert(1)</script>".into(),
                kind: "imagem".into(),
                emoji: "🖼".into(),
                date: "2025".into(),
                description: "a & b".into(),
                hash: "0x1".into(),
                blockchain: "Polygon".into(),
                author: "Coletivo".into(),
                listen_link: None,
                download_link: Some("https://x.test/?a=1&b=2".into()),
            }],
            ..Default::default()
        });

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("href=\"https://x.test/?a=1&amp;b=2\""));
        assert!(html.contains(">Download</a>"));
        assert!(!html.contains(">Ouvir</a>"));
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn test_donation_section_when_loaded() {
        let html = page(SiteContent {
            donations: Some(DonationSummary {
                total_raised: "R$ 900".into(),
                total_converted: "90 cestas".into(),
                beneficiaries: "40".into(),
                supported_projects: "3".into(),
                actions: vec![],
            }),
            ..Default::default()
        });

        assert!(html.contains(DONATION_HEADING));
        assert!(html.contains("R$ 900"));
        assert!(html.contains(ACTIONS_HEADING));
    }
}
