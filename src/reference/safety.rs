//! Per-city safety reference: zone geofences, night-time tips and
//! emergency numbers.
//!
//! Zones classified [`ZoneKind::Safe`] exist for the in-app city guide and
//! never produce alerts. `Caution` and `Avoid` zones are the proximity
//! geofences; a zone may carry an active-hour window outside of which it is
//! inert.

/// Classification of a safety zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    Safe,
    Caution,
    Avoid,
}

/// A circular safety geofence inside a city.
pub struct SafetyZone {
    pub name: &'static str,
    pub kind: ZoneKind,
    pub description: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub radius_miles: f64,
    /// Active window as local `(start_hour, end_hour)`, end exclusive. A
    /// window wrapping midnight has `start > end`. `None` means always
    /// active.
    pub active_hours: Option<(u32, u32)>,
}

/// Emergency phone numbers for a city.
pub struct EmergencyNumbers {
    pub police: &'static str,
    pub ambulance: &'static str,
    pub fire: &'static str,
    pub tourist: &'static str,
}

/// The complete safety sheet of a host city.
pub struct CitySafety {
    pub city_key: &'static str,
    pub city_name: &'static str,
    pub general_tips: &'static [&'static str],
    pub emergency: EmergencyNumbers,
    pub zones: &'static [SafetyZone],
    pub night_tips: &'static [&'static str],
    pub transit_note: &'static str,
}

pub const CITY_SAFETY: &[CitySafety] = &[
    CitySafety {
        city_key: "kansasCity",
        city_name: "Kansas City",
        general_tips: &[
            "Stay in well-lit areas around Power & Light District at night",
            "The Crossroads and Plaza areas are generally very safe",
            "Use designated parking lots near Arrowhead Stadium",
        ],
        emergency: EmergencyNumbers { police: "911", ambulance: "911", fire: "911", tourist: "816-474-4FUN" },
        zones: &[
            SafetyZone {
                name: "Power & Light District",
                kind: ZoneKind::Safe,
                description: "Well-patrolled entertainment area",
                lat: 39.0997,
                lon: -94.5786,
                radius_miles: 0.3,
                active_hours: None,
            },
            SafetyZone {
                name: "Independence Ave (east)",
                kind: ZoneKind::Caution,
                description: "Stay alert after dark",
                lat: 39.0920,
                lon: -94.5450,
                radius_miles: 0.5,
                active_hours: Some((22, 6)),
            },
        ],
        night_tips: &[
            "Stick to the Power & Light and Crossroads areas",
            "Use rideshare after midnight",
        ],
        transit_note: "KC Streetcar is safe and free. Buses are generally safe during daytime.",
    },
    CitySafety {
        city_key: "newYork",
        city_name: "New York",
        general_tips: &[
            "Times Square and Midtown are heavily patrolled 24/7",
            "Keep valuables secure on subway - pickpockets target tourists",
            "Stick to main streets in unfamiliar neighborhoods",
        ],
        emergency: EmergencyNumbers { police: "911", ambulance: "911", fire: "911", tourist: "212-484-1222" },
        zones: &[
            SafetyZone {
                name: "Times Square",
                kind: ZoneKind::Safe,
                description: "Heavy police presence 24/7",
                lat: 40.7580,
                lon: -73.9855,
                radius_miles: 0.3,
                active_hours: None,
            },
            SafetyZone {
                name: "Penn Station Area",
                kind: ZoneKind::Caution,
                description: "Stay alert late at night",
                lat: 40.7506,
                lon: -73.9935,
                radius_miles: 0.2,
                active_hours: Some((0, 6)),
            },
        ],
        night_tips: &[
            "Subway is generally safe but stay in populated cars",
            "Avoid walking alone in unfamiliar areas after midnight",
        ],
        transit_note: "Subway is safe but stay alert. NJ Transit to MetLife Stadium is safe.",
    },
    CitySafety {
        city_key: "losAngeles",
        city_name: "Los Angeles",
        general_tips: &[
            "LA is car-centric - rideshares are often safer than walking long distances",
            "Santa Monica, Beverly Hills, and West Hollywood are very safe",
            "Lock car doors and hide valuables - car break-ins are common",
        ],
        emergency: EmergencyNumbers { police: "911", ambulance: "911", fire: "911", tourist: "213-624-7300" },
        zones: &[
            SafetyZone {
                name: "Hollywood Blvd",
                kind: ZoneKind::Caution,
                description: "Tourist area - watch for scams",
                lat: 34.1016,
                lon: -118.3267,
                radius_miles: 0.3,
                active_hours: None,
            },
            SafetyZone {
                name: "Santa Monica",
                kind: ZoneKind::Safe,
                description: "Well-patrolled beach community",
                lat: 34.0195,
                lon: -118.4912,
                radius_miles: 1.0,
                active_hours: None,
            },
        ],
        night_tips: &[
            "Use rideshare after events - parking lots can be isolated",
            "Downtown LA has improved but use caution at night",
        ],
        transit_note: "Metro C Line to SoFi Stadium is safe on game days.",
    },
    CitySafety {
        city_key: "dallas",
        city_name: "Dallas",
        general_tips: &[
            "Uptown and Victory Park are very safe entertainment areas",
            "Texas Live! near the stadium is the official fan zone",
            "Summer heat can be dangerous - stay hydrated",
        ],
        emergency: EmergencyNumbers { police: "911", ambulance: "911", fire: "911", tourist: "214-571-1000" },
        zones: &[
            SafetyZone {
                name: "Uptown",
                kind: ZoneKind::Safe,
                description: "Popular nightlife area with good security",
                lat: 32.7990,
                lon: -96.8024,
                radius_miles: 0.5,
                active_hours: None,
            },
            SafetyZone {
                name: "Deep Ellum",
                kind: ZoneKind::Caution,
                description: "Great nightlife but stay alert late",
                lat: 32.7843,
                lon: -96.7833,
                radius_miles: 0.3,
                active_hours: Some((2, 6)),
            },
        ],
        night_tips: &[
            "Deep Ellum is popular but parking can be sketchy - use rideshare",
            "Uptown has great restaurants and is very safe",
        ],
        transit_note: "DART light rail is safe. Express service runs to AT&T Stadium on game days.",
    },
    CitySafety {
        city_key: "mexicoCity",
        city_name: "Mexico City",
        general_tips: &[
            "Polanco, Roma, and Condesa are very safe tourist areas",
            "Use official taxis or apps (Uber, Didi) - avoid street hails",
            "Drink bottled water and be cautious with street food",
        ],
        emergency: EmergencyNumbers { police: "911", ambulance: "065", fire: "068", tourist: "55-5658-1111" },
        zones: &[
            SafetyZone {
                name: "Polanco",
                kind: ZoneKind::Safe,
                description: "Upscale area with excellent security",
                lat: 19.4331,
                lon: -99.1981,
                radius_miles: 1.0,
                active_hours: None,
            },
            SafetyZone {
                name: "Roma/Condesa",
                kind: ZoneKind::Safe,
                description: "Trendy neighborhoods popular with expats",
                lat: 19.4146,
                lon: -99.1716,
                radius_miles: 0.7,
                active_hours: None,
            },
            SafetyZone {
                name: "Tepito",
                kind: ZoneKind::Avoid,
                description: "Avoid this area",
                lat: 19.4453,
                lon: -99.1261,
                radius_miles: 0.5,
                active_hours: None,
            },
        ],
        night_tips: &[
            "Stick to Roma, Condesa, and Polanco for nightlife",
            "Always use Uber or Didi at night",
            "Avoid showing expensive phones on the street",
        ],
        transit_note: "Metro is safe but crowded. Metrob\u{fa}s is a good alternative.",
    },
    CitySafety {
        city_key: "monterrey",
        city_name: "Monterrey",
        general_tips: &[
            "San Pedro Garza Garcia is one of the safest areas in Mexico",
            "The Macroplaza and Barrio Antiguo are well-patrolled",
        ],
        emergency: EmergencyNumbers { police: "911", ambulance: "065", fire: "068", tourist: "81-2020-6700" },
        zones: &[
            SafetyZone {
                name: "San Pedro",
                kind: ZoneKind::Safe,
                description: "Wealthy suburb - excellent security",
                lat: 25.6571,
                lon: -100.3989,
                radius_miles: 2.0,
                active_hours: None,
            },
            SafetyZone {
                name: "Macroplaza",
                kind: ZoneKind::Safe,
                description: "Downtown cultural area",
                lat: 25.6693,
                lon: -100.3097,
                radius_miles: 0.3,
                active_hours: None,
            },
        ],
        night_tips: &[
            "Barrio Antiguo has good nightlife with security",
            "San Pedro has upscale venues",
        ],
        transit_note: "Metrorrey is safe and efficient. Line 1 connects to the stadium area.",
    },
    CitySafety {
        city_key: "toronto",
        city_name: "Toronto",
        general_tips: &[
            "Toronto is one of the safest major cities in North America",
            "Downtown, Yorkville, and the Waterfront are all very safe",
        ],
        emergency: EmergencyNumbers { police: "911", ambulance: "911", fire: "911", tourist: "416-203-2500" },
        zones: &[
            SafetyZone {
                name: "Downtown Core",
                kind: ZoneKind::Safe,
                description: "Very safe business and entertainment district",
                lat: 43.6532,
                lon: -79.3832,
                radius_miles: 1.0,
                active_hours: None,
            },
        ],
        night_tips: &[
            "King West and Queen West have great nightlife",
            "TTC runs until about 1:30 AM, then use night buses or rideshare",
        ],
        transit_note: "TTC is very safe. Subway runs until about 1:30 AM on weekends.",
    },
    CitySafety {
        city_key: "vancouver",
        city_name: "Vancouver",
        general_tips: &[
            "Vancouver is extremely safe for tourists",
            "Gastown, Yaletown, and the West End are all safe areas",
        ],
        emergency: EmergencyNumbers { police: "911", ambulance: "911", fire: "911", tourist: "604-683-2000" },
        zones: &[
            SafetyZone {
                name: "Gastown",
                kind: ZoneKind::Safe,
                description: "Historic area with good restaurants",
                lat: 49.2837,
                lon: -123.1089,
                radius_miles: 0.3,
                active_hours: None,
            },
            SafetyZone {
                name: "Yaletown",
                kind: ZoneKind::Safe,
                description: "Trendy neighborhood near BC Place",
                lat: 49.2750,
                lon: -123.1209,
                radius_miles: 0.3,
                active_hours: None,
            },
        ],
        night_tips: &[
            "Granville Street has nightlife but can get rowdy on weekends",
            "Yaletown is a calmer alternative",
        ],
        transit_note: "SkyTrain is very safe. Canada Line connects airport to downtown.",
    },
];

/// Looks up the safety sheet of a city.
pub fn for_city(city_key: &str) -> Option<&'static CitySafety> {
    CITY_SAFETY.iter().find(|s| s.city_key == city_key)
}

/// Emergency numbers for a city, if it has a safety sheet.
pub fn emergency_numbers(city_key: &str) -> Option<&'static EmergencyNumbers> {
    for_city(city_key).map(|s| &s.emergency)
}
