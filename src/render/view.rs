//! Page View Model
//!
//! Pure mapping from [`SiteState`] to what the page shows. Both the Leptos
//! components and the static HTML renderer consume this, so the rules
//! (legend order, hidden links, truncated hashes, optional donations) live
//! in one place.

use crate::content::{category, DonationSummary, Nft, Project, CATEGORIES};
use crate::state::SiteState;

pub const LOADING_MESSAGE: &str = "Carregando arquivo vivo...";
pub const LEGEND_TITLE: &str = "Categorias e Cores:";
pub const NFT_HEADING: &str = "Obras Certificadas";
pub const PROJECT_HEADING: &str = "Projetos";
pub const DONATION_HEADING: &str = "Movimentos de Doação";
pub const ACTIONS_HEADING: &str = "Ações Realizadas";
pub const FOOTER_LINES: [&str; 2] = [
    "© 2025 Coletivo Dois de Muitos. Todos os registros são públicos e transparentes.",
    "Hospedado no GitHub Pages • Dados alimentados via JSON",
];

/// Everything the page renders for a given state
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// Only a centered spinner and message
    Loading,
    Loaded(LoadedPage),
}

impl PageView {
    pub fn from_state(state: &SiteState) -> Self {
        if state.is_loading() {
            return PageView::Loading;
        }

        let content = state.content();
        PageView::Loaded(LoadedPage {
            legend: legend(),
            nfts: content.nfts.iter().map(NftCard::from).collect(),
            projects: content.projects.iter().map(ProjectCard::from).collect(),
            donations: content.donations.as_ref().map(DonationPanel::from),
        })
    }
}

/// Body of the loaded page
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    pub legend: Vec<LegendEntry>,
    pub nfts: Vec<NftCard>,
    pub projects: Vec<ProjectCard>,
    /// Present only when the donation summary loaded
    pub donations: Option<DonationPanel>,
}

/// One legend row
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub key: &'static str,
    pub color: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Legend rows in category table order
pub fn legend() -> Vec<LegendEntry> {
    CATEGORIES
        .iter()
        .map(|c| LegendEntry {
            key: c.key,
            color: c.color,
            label: c.label,
            description: category::description_for(c.key),
        })
        .collect()
}

/// Kind of outbound link, drives its styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Listen,
    Download,
    Project,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Listen => "Ouvir",
            LinkKind::Download => "Download",
            LinkKind::Project => "Ver projeto",
        }
    }
}

/// An outbound link button
#[derive(Debug, Clone, PartialEq)]
pub struct LinkButton {
    pub kind: LinkKind,
    pub href: String,
}

impl LinkButton {
    /// A button only exists for a present, non-empty link
    fn optional(kind: LinkKind, href: Option<&String>) -> Option<Self> {
        href.filter(|h| !h.is_empty()).map(|h| LinkButton {
            kind,
            href: h.clone(),
        })
    }
}

/// Labelled value line on a card
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

fn field(label: &'static str, value: &str) -> Field {
    Field {
        label,
        value: value.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NftCard {
    pub id: u32,
    pub emoji: String,
    pub title: String,
    pub description: String,
    pub fields: Vec<Field>,
    pub links: Vec<LinkButton>,
}

impl From<&Nft> for NftCard {
    fn from(nft: &Nft) -> Self {
        let links = [
            LinkButton::optional(LinkKind::Listen, nft.listen_link.as_ref()),
            LinkButton::optional(LinkKind::Download, nft.download_link.as_ref()),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            id: nft.id,
            emoji: nft.emoji.clone(),
            title: nft.title.clone(),
            description: nft.description.clone(),
            fields: vec![
                field("Tipo", &nft.kind),
                field("Autor", &nft.author),
                field("Data", &nft.date),
                field("Blockchain", &nft.blockchain),
                field("Hash", &nft.hash_preview()),
            ],
            links,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub id: u32,
    pub emoji: String,
    pub title: String,
    pub description: String,
    pub fields: Vec<Field>,
    pub link: Option<LinkButton>,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            emoji: project.emoji.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            fields: vec![
                field("Status", &project.status),
                field("Desde", &project.start_date),
                field("Impacto", &project.impact),
            ],
            link: LinkButton::optional(LinkKind::Project, project.link.as_ref()),
        }
    }
}

/// Donation totals and the action timeline
#[derive(Debug, Clone, PartialEq)]
pub struct DonationPanel {
    pub stats: Vec<Field>,
    pub actions: Vec<ActionItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub fields: Vec<Field>,
}

impl From<&DonationSummary> for DonationPanel {
    fn from(summary: &DonationSummary) -> Self {
        Self {
            stats: vec![
                field("Total Arrecadado", &summary.total_raised),
                field("Convertido em", &summary.total_converted),
                field("Beneficiários", &summary.beneficiaries),
                field("Projetos Apoiados", &summary.supported_projects),
            ],
            actions: summary
                .actions
                .iter()
                .map(|a| ActionItem {
                    id: a.id,
                    title: a.title.clone(),
                    description: a.description.clone(),
                    fields: vec![
                        field("Data", &a.date),
                        field("Valor", &a.amount),
                        field("Beneficiários", &a.beneficiaries),
                    ],
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DonationAction, Event, SiteContent};

    fn nft(listen: Option<&str>, download: Option<&str>) -> Nft {
        Nft {
            id: 3,
            title: "Faixa".into(),
            kind: "audio".into(),
            emoji: "🎧".into(),
            date: "2025-01-01".into(),
            description: "desc".into(),
            hash: "a".repeat(64),
            blockchain: "Polygon".into(),
            author: "Coletivo".into(),
            listen_link: listen.map(String::from),
            download_link: download.map(String::from),
        }
    }

    fn loaded(content: SiteContent) -> LoadedPage {
        let mut state = SiteState::new();
        state.finish(content);
        match PageView::from_state(&state) {
            PageView::Loaded(page) => page,
            PageView::Loading => panic!("expected loaded page"),
        }
    }

    #[test]
    fn test_loading_state_renders_only_indicator() {
        assert_eq!(PageView::from_state(&SiteState::new()), PageView::Loading);
    }

    #[test]
    fn test_single_event_scenario() {
        let page = loaded(SiteContent {
            events: vec![Event {
                id: 1,
                title: "Show".into(),
                description: String::new(),
                date: String::new(),
                category: "musica".into(),
                emoji: "🎵".into(),
            }],
            ..Default::default()
        });

        assert_eq!(page.legend.len(), 6);
        assert!(page.nfts.is_empty());
        assert!(page.projects.is_empty());
        assert!(page.donations.is_none());
    }

    #[test]
    fn test_legend_follows_table() {
        let legend = legend();
        assert_eq!(legend[2].label, "Música");
        assert_eq!(legend[2].color, "#3498db");
        assert_eq!(legend[5].description, "Anúncios e marcos importantes");
    }

    #[test]
    fn test_nft_links_hidden_when_absent() {
        assert!(NftCard::from(&nft(None, None)).links.is_empty());

        let card = NftCard::from(&nft(Some("https://ouvir"), None));
        assert_eq!(card.links.len(), 1);
        assert_eq!(card.links[0].kind, LinkKind::Listen);

        let card = NftCard::from(&nft(Some(""), Some("https://baixar")));
        assert_eq!(card.links.len(), 1);
        assert_eq!(card.links[0].kind, LinkKind::Download);
        assert_eq!(card.links[0].href, "https://baixar");
    }

    #[test]
    fn test_nft_hash_truncated() {
        let card = NftCard::from(&nft(None, None));
        let hash = card.fields.iter().find(|f| f.label == "Hash").unwrap();
        assert_eq!(hash.value, format!("{}...", "a".repeat(32)));
    }

    #[test]
    fn test_project_link_optional() {
        let mut project = Project {
            id: 1,
            title: "Horta".into(),
            emoji: "🌱".into(),
            status: "ativo".into(),
            start_date: "2024".into(),
            description: String::new(),
            impact: "30 famílias".into(),
            link: None,
        };
        assert!(ProjectCard::from(&project).link.is_none());

        project.link = Some("https://horta".into());
        let card = ProjectCard::from(&project);
        assert_eq!(card.link.unwrap().kind.label(), "Ver projeto");
        assert_eq!(card.fields[1].value, "2024");
    }

    #[test]
    fn test_donation_panel_keeps_order() {
        let summary = DonationSummary {
            total_raised: "R$ 10".into(),
            total_converted: "2 cestas".into(),
            beneficiaries: "5".into(),
            supported_projects: "1".into(),
            actions: (1..=3)
                .map(|id| DonationAction {
                    id,
                    title: format!("ação {}", id),
                    description: String::new(),
                    date: String::new(),
                    amount: String::new(),
                    beneficiaries: String::new(),
                })
                .collect(),
        };

        let page = loaded(SiteContent {
            donations: Some(summary),
            ..Default::default()
        });

        let panel = page.donations.unwrap();
        assert_eq!(panel.stats.len(), 4);
        assert_eq!(panel.stats[0].value, "R$ 10");
        let ids: Vec<u32> = panel.actions.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
