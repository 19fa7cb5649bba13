use serde::{Deserialize, Serialize};

/// Coarse market region used to pick familiar account types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "US")]
    UnitedStates,
    #[serde(rename = "UK")]
    UnitedKingdom,
    #[serde(rename = "EU")]
    EuropeanUnion,
    #[serde(rename = "IN")]
    India,
    #[serde(rename = "JP")]
    Japan,
    #[serde(rename = "CA")]
    Canada,
    #[serde(rename = "AU")]
    Australia,
    #[serde(rename = "GLOBAL")]
    Global,
}

impl Region {
    pub fn code(self) -> &'static str {
        match self {
            Region::UnitedStates => "US",
            Region::UnitedKingdom => "UK",
            Region::EuropeanUnion => "EU",
            Region::India => "IN",
            Region::Japan => "JP",
            Region::Canada => "CA",
            Region::Australia => "AU",
            Region::Global => "GLOBAL",
        }
    }
}

const COUNTRY_ALIASES: &[(&[&str], Region)] = &[
    (&["united states", "usa", "us", "america"], Region::UnitedStates),
    (
        &[
            "united kingdom",
            "uk",
            "britain",
            "great britain",
            "england",
            "scotland",
            "wales",
            "northern ireland",
        ],
        Region::UnitedKingdom,
    ),
    (&["india", "bharat"], Region::India),
    (&["japan"], Region::Japan),
    (
        &[
            "germany",
            "france",
            "spain",
            "italy",
            "netherlands",
            "belgium",
            "austria",
            "ireland",
            "finland",
            "sweden",
            "denmark",
            "portugal",
            "poland",
            "czech republic",
            "greece",
            "romania",
            "hungary",
            "slovakia",
            "slovenia",
            "croatia",
            "bulgaria",
            "latvia",
            "lithuania",
            "estonia",
            "luxembourg",
            "malta",
            "cyprus",
        ],
        Region::EuropeanUnion,
    ),
];

const CURRENCY_PREFIXES: [(&str, Region); 7] = [
    ("USD", Region::UnitedStates),
    ("CAD", Region::Canada),
    ("AUD", Region::Australia),
    ("EUR", Region::EuropeanUnion),
    ("GBP", Region::UnitedKingdom),
    ("JPY", Region::Japan),
    ("INR", Region::India),
];

/// Country name first, then the currency label's ISO prefix, else `Global`.
pub fn infer_region(country: Option<&str>, currency: &str) -> Region {
    if let Some(country) = country {
        let country = country.trim().to_lowercase();
        if let Some((_, region)) = COUNTRY_ALIASES
            .iter()
            .find(|(aliases, _)| aliases.contains(&country.as_str()))
        {
            return *region;
        }
    }

    let currency = currency.trim().to_uppercase();
    CURRENCY_PREFIXES
        .iter()
        .find(|(prefix, _)| currency.starts_with(*prefix))
        .map(|(_, region)| *region)
        .unwrap_or(Region::Global)
}

/// Account wrappers and fund archetypes to mention; never tickers or providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestingEducation {
    pub wrappers: Vec<String>,
    pub etf_examples_no_tickers: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn region_education(region: Region) -> InvestingEducation {
    let (wrappers, funds): (&[&str], &[&str]) = match region {
        Region::UnitedStates => (
            &["401(k)", "IRA / Roth IRA", "Taxable brokerage account"],
            &[
                "Total-market equity index fund",
                "Global equity index fund",
                "Broad bond index fund",
            ],
        ),
        Region::EuropeanUnion => (
            &[
                "Country-specific tax-advantaged accounts",
                "Pension schemes",
                "Brokerage account",
            ],
            &[
                "All-world equity index fund",
                "Regional equity index fund",
                "Government + investment-grade bond fund",
            ],
        ),
        Region::India => (
            &[
                "Mutual fund SIP",
                "Provident / retirement accounts",
                "Brokerage account",
            ],
            &[
                "Broad Indian equity index fund",
                "Diversified equity index fund",
                "Short-duration or broad bond fund",
            ],
        ),
        _ => (
            &[
                "Tax-advantaged retirement account (if available)",
                "Brokerage account",
            ],
            &[
                "Global equity index fund",
                "Balanced stock/bond fund",
                "Broad bond index fund",
            ],
        ),
    };

    InvestingEducation {
        wrappers: owned(wrappers),
        etf_examples_no_tickers: owned(funds),
    }
}
