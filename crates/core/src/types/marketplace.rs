//! Marketplace channel codes.

use serde::{Deserialize, Serialize};

/// Marketplace a sale came through.
///
/// The hub reports the channel as an upper-case code string. Codes we do not
/// recognize display verbatim rather than breaking the order listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Marketplace {
    MercadoLivre,
    Shopee,
    Amazon,
    Magalu,
    Americanas,
    Shein,
    /// Channel code not known to this release (carried verbatim).
    Other(String),
}

impl Marketplace {
    /// The wire code for this marketplace.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::MercadoLivre => "MERCADOLIVRE",
            Self::Shopee => "SHOPEE",
            Self::Amazon => "AMAZON",
            Self::Magalu => "MAGALU",
            Self::Americanas => "AMERICANAS",
            Self::Shein => "SHEIN",
            Self::Other(code) => code,
        }
    }

    /// Display label shown in the order list and statistics.
    ///
    /// Unknown codes are their own label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::MercadoLivre => "Mercado Livre",
            Self::Shopee => "Shopee",
            Self::Amazon => "Amazon",
            Self::Magalu => "Magazine Luiza",
            Self::Americanas => "Americanas",
            Self::Shein => "Shein",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for Marketplace {
    fn from(code: String) -> Self {
        match code.as_str() {
            "MERCADOLIVRE" => Self::MercadoLivre,
            "SHOPEE" => Self::Shopee,
            "AMAZON" => Self::Amazon,
            "MAGALU" => Self::Magalu,
            "AMERICANAS" => Self::Americanas,
            "SHEIN" => Self::Shein,
            _ => Self::Other(code),
        }
    }
}

impl From<Marketplace> for String {
    fn from(marketplace: Marketplace) -> Self {
        marketplace.code().to_string()
    }
}

impl std::fmt::Display for Marketplace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code_label() {
        let mp = Marketplace::from("MERCADOLIVRE".to_string());
        assert_eq!(mp, Marketplace::MercadoLivre);
        assert_eq!(mp.label(), "Mercado Livre");
    }

    #[test]
    fn test_unknown_code_displays_verbatim() {
        let mp = Marketplace::from("TIKTOK_SHOP".to_string());
        assert_eq!(mp.code(), "TIKTOK_SHOP");
        assert_eq!(mp.label(), "TIKTOK_SHOP");
        assert_eq!(String::from(mp), "TIKTOK_SHOP");
    }
}
