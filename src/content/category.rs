//! Category Table
//!
//! Fixed mapping from a content category key to its display color, label
//! and short description. This is configuration data: the legend iterates
//! it in order and the helix markers look colors up in it.

/// Color used for keys that are not in the table
pub const DEFAULT_COLOR: &str = "#ffffff";

/// One row of the category table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub key: &'static str,
    pub color: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// All known categories, in legend order
pub const CATEGORIES: [CategoryInfo; 6] = [
    CategoryInfo {
        key: "nft",
        color: "#8b5a8e",
        label: "NFT",
        description: "Registros de propriedade intelectual",
    },
    CategoryInfo {
        key: "arte",
        color: "#e74c3c",
        label: "Arte",
        description: "Obras visuais e criativas",
    },
    CategoryInfo {
        key: "musica",
        color: "#3498db",
        label: "Música",
        description: "Composições e áudios",
    },
    CategoryInfo {
        key: "produto",
        color: "#27ae60",
        label: "Produto",
        description: "Itens da loja e ateliê",
    },
    CategoryInfo {
        key: "doacao",
        color: "#f39c12",
        label: "Doação",
        description: "Ações sociais e arrecadações",
    },
    CategoryInfo {
        key: "noticia",
        color: "#9b59b6",
        label: "Notícia",
        description: "Anúncios e marcos importantes",
    },
];

/// Look up a category by key
pub fn lookup(key: &str) -> Option<&'static CategoryInfo> {
    CATEGORIES.iter().find(|c| c.key == key)
}

/// Display color for a key, falling back to [`DEFAULT_COLOR`]
pub fn color_for(key: &str) -> &'static str {
    lookup(key).map(|c| c.color).unwrap_or(DEFAULT_COLOR)
}

/// Short description for a key, empty for unknown keys
pub fn description_for(key: &str) -> &'static str {
    lookup(key).map(|c| c.description).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_and_size() {
        let keys: Vec<&str> = CATEGORIES.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["nft", "arte", "musica", "produto", "doacao", "noticia"]);
    }

    #[test]
    fn test_known_category() {
        assert_eq!(color_for("musica"), "#3498db");
        assert_eq!(lookup("doacao").map(|c| c.label), Some("Doação"));
        assert_eq!(description_for("arte"), "Obras visuais e criativas");
    }

    #[test]
    fn test_unknown_category_falls_back() {
        assert_eq!(color_for("teatro"), DEFAULT_COLOR);
        assert_eq!(description_for("teatro"), "");
        assert!(lookup("").is_none());
    }
}
