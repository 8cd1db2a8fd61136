//! Static reference data for the host cities of the tournament.
//!
//! Everything in this module is read-only data compiled into the binary:
//! city registry, currency profiles, safety zones, stadium geofences and
//! the team-code table. The trigger sources evaluate live context against
//! these tables; nothing here is mutated at runtime.

pub mod cities;
pub mod currencies;
pub mod safety;
pub mod stadiums;
pub mod teams;
