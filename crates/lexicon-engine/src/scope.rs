//! Rule scope: which product domain and which market a rule applies to
//!
//! Both are closed sets with a `General` member. A rule scoped `General`
//! applies under every filter.

use serde::{Deserialize, Serialize};

/// Product domain (industry) a rule is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    #[default]
    General,
    Cosmetics,
    Food,
    Supplements,
    Pharmaceutical,
    Infant,
    Electronics,
}

impl Domain {
    pub fn code(&self) -> &'static str {
        match self {
            Domain::General => "general",
            Domain::Cosmetics => "cosmetics",
            Domain::Food => "food",
            Domain::Supplements => "supplements",
            Domain::Pharmaceutical => "pharmaceutical",
            Domain::Infant => "infant",
            Domain::Electronics => "electronics",
        }
    }

    /// Parse from code or common name (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "general" => Some(Domain::General),
            "cosmetics" | "cosmetic" | "beauty" | "skincare" => Some(Domain::Cosmetics),
            "food" | "beverage" | "food & beverage" => Some(Domain::Food),
            "supplements" | "supplement" | "dietary supplements" => Some(Domain::Supplements),
            "pharmaceutical" | "pharma" | "otc" => Some(Domain::Pharmaceutical),
            "infant" | "baby" | "infant & baby" => Some(Domain::Infant),
            "electronics" | "electronic" => Some(Domain::Electronics),
            _ => None,
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Domain::General,
            Domain::Cosmetics,
            Domain::Food,
            Domain::Supplements,
            Domain::Pharmaceutical,
            Domain::Infant,
            Domain::Electronics,
        ]
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Market (region) whose regulations a rule reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    #[default]
    General,
    CN,
    US,
    EU,
    JP,
    KR,
}

impl Market {
    pub fn code(&self) -> &'static str {
        match self {
            Market::General => "general",
            Market::CN => "cn",
            Market::US => "us",
            Market::EU => "eu",
            Market::JP => "jp",
            Market::KR => "kr",
        }
    }

    /// Parse from market code or name (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "GENERAL" | "GLOBAL" => Some(Market::General),
            "CN" | "CHINA" => Some(Market::CN),
            "US" | "USA" | "UNITED STATES" => Some(Market::US),
            "EU" | "EUROPE" | "EUROPEAN UNION" => Some(Market::EU),
            "JP" | "JAPAN" => Some(Market::JP),
            "KR" | "KOREA" | "SOUTH KOREA" => Some(Market::KR),
            _ => None,
        }
    }
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Whether a rule scoped to `rule_domain`/`rule_market` survives the filters
pub fn in_scope(
    rule_domain: Domain,
    rule_market: Market,
    domain_filter: Option<Domain>,
    market_filter: Option<Market>,
) -> bool {
    let domain_ok = match domain_filter {
        Some(filter) => rule_domain == Domain::General || rule_domain == filter,
        None => true,
    };
    let market_ok = match market_filter {
        Some(filter) => rule_market == Market::General || rule_market == filter,
        None => true,
    };
    domain_ok && market_ok
}
