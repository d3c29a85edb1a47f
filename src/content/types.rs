//! Content Records
//!
//! The four externally sourced documents that feed the page. Field names
//! are English; the JSON keys are the Portuguese ones published with the
//! site and are mapped with serde renames.

use serde::{Deserialize, Serialize};

/// Number of hash characters shown on an NFT card before the ellipsis
pub const HASH_PREVIEW_CHARS: usize = 32;

/// A dated event of the collective. Events double as the artifacts
/// placed on the helix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data")]
    pub date: String,
    /// Key into the category table
    #[serde(rename = "categoria")]
    pub category: String,
    pub emoji: String,
}

/// A certified work registered on a blockchain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nft {
    pub id: u32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    pub emoji: String,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "descricao")]
    pub description: String,
    pub hash: String,
    pub blockchain: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "link_ouvir", default)]
    pub listen_link: Option<String>,
    #[serde(rename = "link_download", default)]
    pub download_link: Option<String>,
}

impl Nft {
    /// Hash shortened for display, cut on a character boundary
    pub fn hash_preview(&self) -> String {
        let prefix: String = self.hash.chars().take(HASH_PREVIEW_CHARS).collect();
        format!("{}...", prefix)
    }
}

/// An ongoing or finished project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    #[serde(rename = "titulo")]
    pub title: String,
    pub emoji: String,
    pub status: String,
    #[serde(rename = "data_inicio")]
    pub start_date: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "impacto")]
    pub impact: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Aggregate donation figures plus the ordered list of actions.
///
/// Totals are display strings ("R$ 1.200", "300 cestas") and are never
/// computed from the actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationSummary {
    #[serde(rename = "total_arrecadado")]
    pub total_raised: String,
    #[serde(rename = "total_convertido")]
    pub total_converted: String,
    #[serde(rename = "beneficiarios")]
    pub beneficiaries: String,
    #[serde(rename = "projetos_apoiados")]
    pub supported_projects: String,
    #[serde(rename = "acoes", default)]
    pub actions: Vec<DonationAction>,
}

/// A single donation action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationAction {
    pub id: u32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "valor")]
    pub amount: String,
    #[serde(rename = "beneficiarios")]
    pub beneficiaries: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_from_json() {
        let json = r#"{
            "id": 1,
            "titulo": "Lançamento",
            "descricao": "Primeiro single",
            "data": "2025-03-01",
            "categoria": "musica",
            "emoji": "🎵"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.title, "Lançamento");
        assert_eq!(event.category, "musica");
    }

    #[test]
    fn test_nft_links_null_or_missing() {
        let json = r#"{
            "id": 7, "titulo": "Faixa", "tipo": "audio", "emoji": "🎧",
            "data": "2025-01-10", "descricao": "x", "hash": "abc",
            "blockchain": "Polygon", "autor": "Coletivo",
            "link_ouvir": null
        }"#;

        let nft: Nft = serde_json::from_str(json).unwrap();
        assert_eq!(nft.listen_link, None);
        assert_eq!(nft.download_link, None);
        assert_eq!(nft.kind, "audio");
    }

    #[test]
    fn test_hash_preview_truncates() {
        let nft = Nft {
            id: 1,
            title: String::new(),
            kind: String::new(),
            emoji: String::new(),
            date: String::new(),
            description: String::new(),
            hash: "0x".to_string() + &"f".repeat(62),
            blockchain: String::new(),
            author: String::new(),
            listen_link: None,
            download_link: None,
        };

        let preview = nft.hash_preview();
        assert_eq!(preview.len(), HASH_PREVIEW_CHARS + 3);
        assert!(preview.starts_with("0xff"));
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_hash_preview_multibyte_safe() {
        let nft = Nft {
            id: 1,
            title: String::new(),
            kind: String::new(),
            emoji: String::new(),
            date: String::new(),
            description: String::new(),
            hash: "é".repeat(40),
            blockchain: String::new(),
            author: String::new(),
            listen_link: None,
            download_link: None,
        };

        assert_eq!(nft.hash_preview().chars().count(), HASH_PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_donation_summary_keeps_action_order() {
        let json = r#"{
            "total_arrecadado": "R$ 5.000",
            "total_convertido": "200 cestas",
            "beneficiarios": "150",
            "projetos_apoiados": "4",
            "acoes": [
                {"id": 2, "titulo": "B", "descricao": "", "data": "2025-02", "valor": "R$ 10", "beneficiarios": "1"},
                {"id": 1, "titulo": "A", "descricao": "", "data": "2025-01", "valor": "R$ 20", "beneficiarios": "2"}
            ]
        }"#;

        let summary: DonationSummary = serde_json::from_str(json).unwrap();
        let ids: Vec<u32> = summary.actions.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(summary.total_raised, "R$ 5.000");
    }
}
