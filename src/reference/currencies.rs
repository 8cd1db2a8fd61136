//! Currency profiles for the three host countries.

/// Currency profile of a host country.
pub struct Currency {
    pub country: &'static str,
    /// Full country name used in alert copy.
    pub country_name: &'static str,
    /// ISO currency code.
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    /// One unit of this currency expressed in USD.
    pub rate_to_usd: f64,
    /// Arrival tips, most important first. The first entry is quoted in the
    /// currency-change alert.
    pub tips: &'static [&'static str],
    pub atm_networks: &'static [&'static str],
    pub card_acceptance: &'static str,
}

pub const CURRENCIES: &[Currency] = &[
    Currency {
        country: "US",
        country_name: "United States",
        code: "USD",
        symbol: "$",
        name: "US Dollar",
        rate_to_usd: 1.0,
        tips: &[
            "Tipping is customary: 15-20% at restaurants, $1-2 per drink at bars",
            "Most places accept credit cards, but keep small bills for tips",
            "Sales tax is added at checkout (varies by state: 0-10%)",
        ],
        atm_networks: &["Visa/Plus", "Mastercard/Cirrus", "Allpoint", "MoneyPass"],
        card_acceptance: "Excellent - cards accepted almost everywhere",
    },
    Currency {
        country: "CA",
        country_name: "Canada",
        code: "CAD",
        symbol: "C$",
        name: "Canadian Dollar",
        rate_to_usd: 0.74,
        tips: &[
            "Tipping similar to US: 15-20% at restaurants",
            "$1 and $2 coins (Loonie and Toonie) are common",
            "HST/GST tax (5-15%) added at checkout",
        ],
        atm_networks: &["Interac", "Visa/Plus", "Mastercard/Cirrus"],
        card_acceptance: "Excellent - tap-to-pay widely used",
    },
    Currency {
        country: "MX",
        country_name: "Mexico",
        code: "MXN",
        symbol: "$",
        name: "Mexican Peso",
        rate_to_usd: 0.058,
        tips: &[
            "Tipping is expected: 10-15% at restaurants",
            "Many places show prices with \"MXN\" to distinguish from USD",
            "Street vendors and small shops prefer cash",
            "ATMs at banks (not convenience stores) offer better rates",
        ],
        atm_networks: &["Visa/Plus", "Mastercard/Cirrus"],
        card_acceptance: "Good in tourist areas, cash preferred in local spots",
    },
];

/// Looks up the currency profile of a country code.
pub fn for_country(country: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.country == country)
}
