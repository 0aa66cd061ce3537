//! Continent identifiers and their geographic bounding boxes

/// Rectangular lat/lon region used to geographically scope a catalog query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinentBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// The fixed set of selectable regions. Anything outside this set is
/// unresolvable by design; the select is populated from `ALL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Continent {
    World,
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Antarctica,
}

impl Continent {
    pub const ALL: [Continent; 8] = [
        Continent::World,
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
        Continent::Antarctica,
    ];

    /// Resolve a form identifier to a continent. Unknown ids return `None`.
    pub fn from_id(id: &str) -> Option<Continent> {
        match id {
            "world" => Some(Continent::World),
            "africa" => Some(Continent::Africa),
            "asia" => Some(Continent::Asia),
            "europe" => Some(Continent::Europe),
            "north_america" => Some(Continent::NorthAmerica),
            "south_america" => Some(Continent::SouthAmerica),
            "oceania" => Some(Continent::Oceania),
            "antarctica" => Some(Continent::Antarctica),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Continent::World => "world",
            Continent::Africa => "africa",
            Continent::Asia => "asia",
            Continent::Europe => "europe",
            Continent::NorthAmerica => "north_america",
            Continent::SouthAmerica => "south_america",
            Continent::Oceania => "oceania",
            Continent::Antarctica => "antarctica",
        }
    }

    /// Display name for the select widget.
    pub fn label(self) -> &'static str {
        match self {
            Continent::World => "World",
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Antarctica => "Antarctica",
        }
    }

    /// Bounding box for the region. Coarse boxes, wide enough to cover the
    /// landmass plus nearby offshore seismic zones.
    pub fn bounds(self) -> ContinentBounds {
        match self {
            Continent::World => ContinentBounds {
                min_lat: -90.0,
                max_lat: 90.0,
                min_lon: -180.0,
                max_lon: 180.0,
            },
            Continent::Africa => ContinentBounds {
                min_lat: -35.0,
                max_lat: 38.0,
                min_lon: -18.0,
                max_lon: 52.0,
            },
            Continent::Asia => ContinentBounds {
                min_lat: 5.0,
                max_lat: 80.0,
                min_lon: 25.0,
                max_lon: 180.0,
            },
            Continent::Europe => ContinentBounds {
                min_lat: 35.0,
                max_lat: 72.0,
                min_lon: -25.0,
                max_lon: 45.0,
            },
            Continent::NorthAmerica => ContinentBounds {
                min_lat: 5.0,
                max_lat: 83.0,
                min_lon: -168.0,
                max_lon: -52.0,
            },
            Continent::SouthAmerica => ContinentBounds {
                min_lat: -56.0,
                max_lat: 13.0,
                min_lon: -82.0,
                max_lon: -34.0,
            },
            Continent::Oceania => ContinentBounds {
                min_lat: -50.0,
                max_lat: 0.0,
                min_lon: 110.0,
                max_lon: 180.0,
            },
            Continent::Antarctica => ContinentBounds {
                min_lat: -90.0,
                max_lat: -60.0,
                min_lon: -180.0,
                max_lon: 180.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_continent_has_a_well_formed_box() {
        for continent in Continent::ALL {
            let b = continent.bounds();
            assert!(b.min_lat <= b.max_lat, "{:?}: min_lat > max_lat", continent);
            assert!(b.min_lon <= b.max_lon, "{:?}: min_lon > max_lon", continent);
            assert!(b.min_lat >= -90.0 && b.max_lat <= 90.0, "{:?}: latitude out of range", continent);
            assert!(b.min_lon >= -180.0 && b.max_lon <= 180.0, "{:?}: longitude out of range", continent);
        }
    }

    #[test]
    fn ids_round_trip() {
        for continent in Continent::ALL {
            assert_eq!(Continent::from_id(continent.id()), Some(continent));
        }
    }

    #[test]
    fn unknown_ids_are_unresolved() {
        assert_eq!(Continent::from_id(""), None);
        assert_eq!(Continent::from_id("atlantis"), None);
        assert_eq!(Continent::from_id("World"), None); // ids are lowercase
    }

    #[test]
    fn world_covers_every_other_box() {
        let world = Continent::World.bounds();
        for continent in Continent::ALL {
            let b = continent.bounds();
            assert!(b.min_lat >= world.min_lat && b.max_lat <= world.max_lat);
            assert!(b.min_lon >= world.min_lon && b.max_lon <= world.max_lon);
        }
    }
}
