//! Stadium geofences: coordinates, entry gates and rideshare zones.
//!
//! The proximity trigger fires when live coordinates come within
//! [`PROXIMITY_THRESHOLD_MILES`] of a stadium center; gate and rideshare
//! selection is nearest-by-distance among that stadium's candidates.

/// Radius around a stadium center inside which the arrival alert fires.
pub const PROXIMITY_THRESHOLD_MILES: f64 = 1.0;

/// An entry gate of a stadium.
pub struct Gate {
    pub name: &'static str,
    pub description: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// Seating sections served by this gate, shown verbatim in alert copy.
    /// Gate selection does not filter by section, only by distance.
    pub sections: &'static str,
}

/// Which direction of a rideshare trip a zone serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideshareKind {
    Pickup,
    Dropoff,
    Both,
}

/// A designated rideshare pickup/drop-off zone near a stadium.
pub struct RideshareZone {
    pub name: &'static str,
    pub description: &'static str,
    /// Rideshare provider the zone is reserved for ("uber", "lyft", "all").
    pub provider: &'static str,
    pub kind: RideshareKind,
    pub lat: f64,
    pub lon: f64,
    pub walking_minutes: u32,
}

impl RideshareZone {
    /// Whether this zone can be used for drop-off on the way in.
    pub fn serves_dropoff(&self) -> bool {
        matches!(self.kind, RideshareKind::Dropoff | RideshareKind::Both)
    }
}

/// A stadium geofence with its gates and rideshare zones.
pub struct Stadium {
    pub name: &'static str,
    pub city: &'static str,
    pub city_key: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub gates: &'static [Gate],
    pub rideshare_zones: &'static [RideshareZone],
}

pub const STADIUMS: &[Stadium] = &[
    Stadium {
        name: "Arrowhead Stadium",
        city: "Kansas City",
        city_key: "kansasCity",
        lat: 39.0489,
        lon: -94.4839,
        gates: &[
            Gate { name: "Gate A", description: "North entrance near Lot A", lat: 39.0502, lon: -94.4839, sections: "100-112" },
            Gate { name: "Gate B", description: "East entrance near Lot B", lat: 39.0489, lon: -94.4815, sections: "113-124" },
            Gate { name: "Gate C", description: "South entrance near Lot C", lat: 39.0476, lon: -94.4839, sections: "125-136" },
            Gate { name: "Gate D", description: "West entrance near Lot D", lat: 39.0489, lon: -94.4863, sections: "301-324" },
        ],
        rideshare_zones: &[
            RideshareZone { name: "Lot N RideShare Zone", description: "Primary rideshare location - north of stadium", provider: "all", kind: RideshareKind::Both, lat: 39.0525, lon: -94.4839, walking_minutes: 8 },
            RideshareZone { name: "Red Lot Exit", description: "Post-game pickup - follow signs", provider: "all", kind: RideshareKind::Pickup, lat: 39.0510, lon: -94.4875, walking_minutes: 10 },
        ],
    },
    Stadium {
        name: "MetLife Stadium",
        city: "New York/New Jersey",
        city_key: "newYork",
        lat: 40.8128,
        lon: -74.0742,
        gates: &[
            Gate { name: "Gate A", description: "East entrance - main gate", lat: 40.8138, lon: -74.0725, sections: "100-112, 201-212" },
            Gate { name: "Gate B", description: "South entrance", lat: 40.8115, lon: -74.0742, sections: "113-124, 213-224" },
            Gate { name: "Gate C", description: "West entrance", lat: 40.8128, lon: -74.0765, sections: "125-136, 225-236" },
            Gate { name: "Gate D", description: "North entrance", lat: 40.8145, lon: -74.0742, sections: "137-148, 237-248" },
        ],
        rideshare_zones: &[
            RideshareZone { name: "Lot E RideShare Drop-off", description: "Before game - east side", provider: "all", kind: RideshareKind::Dropoff, lat: 40.8150, lon: -74.0710, walking_minutes: 7 },
            RideshareZone { name: "Lot K RideShare Pickup", description: "After game - follow blue signs", provider: "all", kind: RideshareKind::Pickup, lat: 40.8100, lon: -74.0780, walking_minutes: 12 },
        ],
    },
    Stadium {
        name: "SoFi Stadium",
        city: "Los Angeles",
        city_key: "losAngeles",
        lat: 33.9534,
        lon: -118.3390,
        gates: &[
            Gate { name: "American Airlines Plaza", description: "Main entrance - north side", lat: 33.9548, lon: -118.3390, sections: "100-115, C100-C115" },
            Gate { name: "YouTube Theater Entrance", description: "East side entrance", lat: 33.9534, lon: -118.3365, sections: "116-130, C116-C130" },
            Gate { name: "South Gate", description: "South entrance near VIP", lat: 33.9520, lon: -118.3390, sections: "131-145, C131-C145" },
        ],
        rideshare_zones: &[
            RideshareZone { name: "Pink Zone", description: "Hollywood Park Casino area", provider: "all", kind: RideshareKind::Both, lat: 33.9575, lon: -118.3360, walking_minutes: 10 },
            RideshareZone { name: "Uber Lot", description: "Designated Uber pickup - east", provider: "uber", kind: RideshareKind::Pickup, lat: 33.9510, lon: -118.3340, walking_minutes: 8 },
            RideshareZone { name: "Lyft Zone", description: "Designated Lyft pickup - west", provider: "lyft", kind: RideshareKind::Pickup, lat: 33.9510, lon: -118.3420, walking_minutes: 9 },
        ],
    },
    Stadium {
        name: "Hard Rock Stadium",
        city: "Miami",
        city_key: "miami",
        lat: 25.9580,
        lon: -80.2389,
        gates: &[
            Gate { name: "Gate 1", description: "Northwest entrance", lat: 25.9595, lon: -80.2405, sections: "100-112" },
            Gate { name: "Gate 2", description: "Northeast entrance", lat: 25.9595, lon: -80.2373, sections: "113-125" },
            Gate { name: "Gate 3", description: "Southeast entrance", lat: 25.9565, lon: -80.2373, sections: "126-138" },
            Gate { name: "Gate 4", description: "Southwest entrance", lat: 25.9565, lon: -80.2405, sections: "139-150" },
        ],
        rideshare_zones: &[
            RideshareZone { name: "RideShare Lot", description: "Enter from 199th Street", provider: "all", kind: RideshareKind::Dropoff, lat: 25.9620, lon: -80.2389, walking_minutes: 8 },
            RideshareZone { name: "Post-Game Pickup", description: "Lot 18 - follow illuminated signs", provider: "all", kind: RideshareKind::Pickup, lat: 25.9550, lon: -80.2420, walking_minutes: 10 },
        ],
    },
    Stadium {
        name: "AT&T Stadium",
        city: "Dallas",
        city_key: "dallas",
        lat: 32.7473,
        lon: -97.0945,
        gates: &[
            Gate { name: "Gate A", description: "West plaza main entrance", lat: 32.7473, lon: -97.0970, sections: "100-115, C200-C215" },
            Gate { name: "Gate B", description: "East plaza entrance", lat: 32.7473, lon: -97.0920, sections: "116-130, C216-C230" },
            Gate { name: "Gate C", description: "North entrance", lat: 32.7490, lon: -97.0945, sections: "131-145, C231-C245" },
        ],
        rideshare_zones: &[
            RideshareZone { name: "Lot 4 RideShare", description: "Primary rideshare - Collins Street", provider: "all", kind: RideshareKind::Both, lat: 32.7500, lon: -97.0980, walking_minutes: 12 },
            RideshareZone { name: "Texas Live! Pickup", description: "Entertainment district pickup", provider: "all", kind: RideshareKind::Pickup, lat: 32.7510, lon: -97.0900, walking_minutes: 10 },
        ],
    },
    Stadium {
        name: "BMO Field",
        city: "Toronto",
        city_key: "toronto",
        lat: 43.6332,
        lon: -79.4186,
        gates: &[
            Gate { name: "Gate 1", description: "Main entrance - Princes Blvd", lat: 43.6340, lon: -79.4186, sections: "100-115" },
            Gate { name: "Gate 2", description: "South entrance", lat: 43.6324, lon: -79.4186, sections: "116-130" },
        ],
        rideshare_zones: &[
            RideshareZone { name: "Exhibition Place Drop Zone", description: "Near CNE grounds", provider: "all", kind: RideshareKind::Both, lat: 43.6355, lon: -79.4170, walking_minutes: 6 },
        ],
    },
    Stadium {
        name: "Estadio Azteca",
        city: "Mexico City",
        city_key: "mexicoCity",
        lat: 19.3029,
        lon: -99.1505,
        gates: &[
            Gate { name: "Puerta 1", description: "Entrance north - Calzada de Tlalpan", lat: 19.3045, lon: -99.1505, sections: "100-115" },
            Gate { name: "Puerta 2", description: "Entrance east", lat: 19.3029, lon: -99.1480, sections: "116-130" },
            Gate { name: "Puerta 3", description: "Entrance south - main", lat: 19.3013, lon: -99.1505, sections: "131-145" },
        ],
        rideshare_zones: &[
            RideshareZone { name: "Zona Uber/Didi", description: "Calzada de Tlalpan entrance", provider: "all", kind: RideshareKind::Both, lat: 19.3055, lon: -99.1490, walking_minutes: 8 },
        ],
    },
    Stadium {
        name: "Estadio BBVA",
        city: "Monterrey",
        city_key: "monterrey",
        lat: 25.6699,
        lon: -100.2445,
        gates: &[
            Gate { name: "Acceso Principal", description: "Main entrance - Av. Pablo Livas", lat: 25.6710, lon: -100.2445, sections: "100-120" },
            Gate { name: "Acceso Este", description: "East entrance", lat: 25.6699, lon: -100.2420, sections: "121-140" },
        ],
        rideshare_zones: &[
            RideshareZone { name: "Zona Uber/Didi", description: "Av. Pablo Livas", provider: "all", kind: RideshareKind::Both, lat: 25.6725, lon: -100.2430, walking_minutes: 7 },
        ],
    },
];

/// Looks up the stadium of a city, if one is configured.
pub fn for_city(city_key: &str) -> Option<&'static Stadium> {
    STADIUMS.iter().find(|s| s.city_key == city_key)
}
