//! Host-city registry: coordinates, country, transport tips and cooling
//! stations keyed by the canonical camel-case city key used across the
//! engine (`"kansasCity"`, `"mexicoCity"`, ...).

/// A host city of the tournament.
pub struct City {
    /// Canonical city key, the identifier used by every trigger and API path.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// ISO-ish country code, the currency-zone identity of the city.
    pub country: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// One-line stadium-transit tip shown in match-day alerts.
    pub transport_tip: &'static str,
    /// One-line heat advisory used as the lead of hydration alerts.
    pub heat_advice: &'static str,
}

/// A place to cool down during a heat alert.
pub struct CoolingStation {
    pub name: &'static str,
    pub kind: &'static str,
}

pub const CITIES: &[City] = &[
    City {
        key: "kansasCity",
        name: "Kansas City",
        country: "US",
        lat: 39.0997,
        lon: -94.5786,
        transport_tip: "The 402 Bus runs every 10 minutes to Arrowhead Stadium. Tap for your ticket QR code.",
        heat_advice: "Use the Stadium Direct motorcoach routes from regional hubs instead of walking between lots.",
    },
    City {
        key: "newYork",
        name: "New York",
        country: "US",
        lat: 40.7128,
        lon: -74.0060,
        transport_tip: "NJ Transit has extra trains to MetLife Stadium. Penn Station departures every 15 mins.",
        heat_advice: "Take NJ Transit to Meadowlands Station and avoid queuing outdoors in the parking lots.",
    },
    City {
        key: "losAngeles",
        name: "Los Angeles",
        country: "US",
        lat: 34.0522,
        lon: -118.2437,
        transport_tip: "Metro C Line connects to SoFi Stadium. Allow 45 mins from Downtown LA.",
        heat_advice: "Take the Metro E Line to Downtown Inglewood and the shaded shuttle to the stadium.",
    },
    City {
        key: "miami",
        name: "Miami",
        country: "US",
        lat: 25.7617,
        lon: -80.1918,
        transport_tip: "Shuttle buses run from Aventura Mall to Hard Rock Stadium. $5 round trip.",
        heat_advice: "Take the Brightline to Aventura and the tournament shuttle. Heat exhaustion is a real risk.",
    },
    City {
        key: "dallas",
        name: "Dallas",
        country: "US",
        lat: 32.7767,
        lon: -96.7970,
        transport_tip: "DART runs express service to AT&T Stadium. Board at Victory Station.",
        heat_advice: "Stay inside Texas Live! or the air-conditioned concourse until close to kickoff.",
    },
    City {
        key: "houston",
        name: "Houston",
        country: "US",
        lat: 29.7604,
        lon: -95.3698,
        transport_tip: "METRORail connects to NRG Stadium. Red Line from Downtown.",
        heat_advice: "Use the METRORail Red Line and the covered walkways at NRG Park.",
    },
    City {
        key: "atlanta",
        name: "Atlanta",
        country: "US",
        lat: 33.7490,
        lon: -84.3880,
        transport_tip: "MARTA connects directly to Mercedes-Benz Stadium. Vine City station is closest.",
        heat_advice: "Stay hydrated and seek air-conditioned areas.",
    },
    City {
        key: "philadelphia",
        name: "Philadelphia",
        country: "US",
        lat: 39.9526,
        lon: -75.1652,
        transport_tip: "SEPTA Regional Rail has express service to Lincoln Financial Field.",
        heat_advice: "Stay hydrated and seek air-conditioned areas.",
    },
    City {
        key: "seattle",
        name: "Seattle",
        country: "US",
        lat: 47.6062,
        lon: -122.3321,
        transport_tip: "Light Rail runs to Lumen Field. International District station recommended.",
        heat_advice: "Stay hydrated and seek air-conditioned areas.",
    },
    City {
        key: "boston",
        name: "Boston",
        country: "US",
        lat: 42.3601,
        lon: -71.0589,
        transport_tip: "MBTA Red Line to JFK/UMass, then shuttle to Gillette Stadium.",
        heat_advice: "Stay hydrated and seek air-conditioned areas.",
    },
    City {
        key: "sanFrancisco",
        name: "San Francisco",
        country: "US",
        lat: 37.7749,
        lon: -122.4194,
        transport_tip: "Caltrain runs express to Levi's Stadium. Board at 4th & King.",
        heat_advice: "Stay hydrated and seek air-conditioned areas.",
    },
    City {
        key: "toronto",
        name: "Toronto",
        country: "CA",
        lat: 43.6532,
        lon: -79.3832,
        transport_tip: "TTC Line 1 to Finch, then shuttle to BMO Field area.",
        heat_advice: "Stay hydrated and seek air-conditioned areas.",
    },
    City {
        key: "vancouver",
        name: "Vancouver",
        country: "CA",
        lat: 49.2827,
        lon: -123.1207,
        transport_tip: "SkyTrain Canada Line to Waterfront for BC Place access.",
        heat_advice: "Stay hydrated and seek air-conditioned areas.",
    },
    City {
        key: "mexicoCity",
        name: "Mexico City",
        country: "MX",
        lat: 19.4326,
        lon: -99.1332,
        transport_tip: "Metro Line 2 to Tasque\u{f1}a, then shuttle to Estadio Azteca.",
        heat_advice: "Carry bottled water. The altitude makes dehydration faster than the temperature suggests.",
    },
    City {
        key: "guadalajara",
        name: "Guadalajara",
        country: "MX",
        lat: 20.6597,
        lon: -103.3496,
        transport_tip: "Macrob\u{fa}s Line 2 to Estadio Akron. Service every 5 mins on match days.",
        heat_advice: "Stay hydrated and seek air-conditioned areas.",
    },
    City {
        key: "monterrey",
        name: "Monterrey",
        country: "MX",
        lat: 25.6866,
        lon: -100.3161,
        transport_tip: "Metrorrey Line 1 connects to Estadio BBVA area.",
        heat_advice: "Plan around the afternoon peak. Monterrey regularly exceeds 100\u{b0}F in summer.",
    },
];

/// Generic fallback shown in match-day alerts for unmapped cities.
pub const GENERIC_TRANSPORT_TIP: &str = "Check local transit for stadium access information.";

/// Generic fallback shown in hydration alerts for unmapped cities.
pub const GENERIC_HEAT_ADVICE: &str = "Stay hydrated and seek air-conditioned areas.";

const GENERIC_COOLING_STATIONS: &[CoolingStation] = &[
    CoolingStation { name: "Stadium Cooling Zones", kind: "Stadium" },
    CoolingStation { name: "Nearby Shopping Centers", kind: "Mall" },
];

/// Looks up a city by canonical key.
pub fn city(key: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.key == key)
}

/// Maps a display name coming from the match feed back to a canonical city
/// key. Unknown names fall back to the lowercased, space-stripped form so a
/// new city in the feed still produces a stable key.
pub fn key_for_display_name(name: &str) -> String {
    // The match feed labels the New York venue with the bi-state name.
    if name == "New York/New Jersey" {
        return "newYork".to_string();
    }

    match CITIES.iter().find(|c| c.name == name) {
        Some(city) => city.key.to_string(),
        None => name.to_lowercase().replace(char::is_whitespace, ""),
    }
}

/// Cooling stations for a city, nearest-first by curation. Cities without a
/// curated list get generic station labels.
pub fn cooling_stations(city_key: &str) -> &'static [CoolingStation] {
    match city_key {
        "dallas" => &[
            CoolingStation { name: "AT&T Stadium Cooling Zones", kind: "Stadium" },
            CoolingStation { name: "Galleria Dallas", kind: "Mall" },
            CoolingStation { name: "Dallas Public Library", kind: "Library" },
        ],
        "houston" => &[
            CoolingStation { name: "NRG Stadium Cooling Areas", kind: "Stadium" },
            CoolingStation { name: "The Galleria", kind: "Mall" },
            CoolingStation { name: "Houston Public Library", kind: "Library" },
        ],
        "miami" => &[
            CoolingStation { name: "Hard Rock Stadium Misting Zones", kind: "Stadium" },
            CoolingStation { name: "Aventura Mall", kind: "Mall" },
            CoolingStation { name: "Miami-Dade Public Library", kind: "Library" },
        ],
        "mexicoCity" => &[
            CoolingStation { name: "Estadio Azteca Fan Zones", kind: "Stadium" },
            CoolingStation { name: "Centro Santa Fe", kind: "Mall" },
            CoolingStation { name: "Biblioteca Central UNAM", kind: "Library" },
        ],
        "monterrey" => &[
            CoolingStation { name: "Estadio BBVA Cooling Areas", kind: "Stadium" },
            CoolingStation { name: "Galer\u{ed}as Monterrey", kind: "Mall" },
            CoolingStation { name: "Biblioteca Central", kind: "Library" },
        ],
        _ => GENERIC_COOLING_STATIONS,
    }
}
