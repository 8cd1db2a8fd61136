//! National-team short codes.
//!
//! Maps full team names from the match feed to the three-letter codes used
//! for the followed-teams set. Names missing from the table fall back to a
//! deterministic three-letter uppercase prefix of the name. Two unmapped
//! teams sharing a prefix collide; the fallback is kept deterministic
//! rather than guarded.

const TEAM_CODES: &[(&str, &str)] = &[
    ("United States", "USA"),
    ("Mexico", "MEX"),
    ("Canada", "CAN"),
    ("Brazil", "BRA"),
    ("Argentina", "ARG"),
    ("England", "ENG"),
    ("France", "FRA"),
    ("Germany", "GER"),
    ("Spain", "ESP"),
    ("Portugal", "POR"),
    ("Netherlands", "NED"),
    ("Belgium", "BEL"),
    ("Italy", "ITA"),
    ("Croatia", "CRO"),
    ("Morocco", "MAR"),
    ("Japan", "JPN"),
    ("South Korea", "KOR"),
    ("Australia", "AUS"),
    ("Saudi Arabia", "KSA"),
    ("Qatar", "QAT"),
    ("Iran", "IRN"),
    ("Uruguay", "URU"),
    ("Colombia", "COL"),
    ("Ecuador", "ECU"),
    ("Chile", "CHI"),
    ("Peru", "PER"),
    ("Paraguay", "PAR"),
    ("Venezuela", "VEN"),
    ("Bolivia", "BOL"),
    ("Senegal", "SEN"),
    ("Ghana", "GHA"),
    ("Cameroon", "CMR"),
    ("Nigeria", "NGA"),
    ("Egypt", "EGY"),
    ("Tunisia", "TUN"),
    ("Algeria", "ALG"),
    ("South Africa", "RSA"),
    ("Poland", "POL"),
    ("Denmark", "DEN"),
    ("Switzerland", "SUI"),
    ("Austria", "AUT"),
    ("Serbia", "SRB"),
    ("Ukraine", "UKR"),
    ("Czech Republic", "CZE"),
    ("Sweden", "SWE"),
    ("Norway", "NOR"),
    ("Scotland", "SCO"),
    ("Wales", "WAL"),
    ("Republic of Ireland", "IRL"),
    ("Costa Rica", "CRC"),
    ("Panama", "PAN"),
    ("Honduras", "HON"),
    ("Jamaica", "JAM"),
    ("New Zealand", "NZL"),
];

/// Returns the short code for a team name.
///
/// Unknown names get the first three characters of the name, uppercased.
pub fn team_code(name: &str) -> String {
    if let Some((_, code)) = TEAM_CODES.iter().find(|(n, _)| *n == name) {
        return (*code).to_string();
    }

    name.chars().take(3).collect::<String>().to_uppercase()
}
