//! German federal states, as the station data API names them.

/// One of the sixteen German federal states.
///
/// Only used to build the filter form. Filters themselves carry the raw
/// identifier so that unknown values reach the upstream unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FederalState {
    BadenWuerttemberg,
    Bayern,
    Berlin,
    Brandenburg,
    Bremen,
    Hamburg,
    Hessen,
    MecklenburgVorpommern,
    Niedersachsen,
    NordrheinWestfalen,
    RheinlandPfalz,
    Saarland,
    Sachsen,
    SachsenAnhalt,
    SchleswigHolstein,
    Thueringen,
}

impl FederalState {
    pub const ALL: [FederalState; 16] = [
        FederalState::BadenWuerttemberg,
        FederalState::Bayern,
        FederalState::Berlin,
        FederalState::Brandenburg,
        FederalState::Bremen,
        FederalState::Hamburg,
        FederalState::Hessen,
        FederalState::MecklenburgVorpommern,
        FederalState::Niedersachsen,
        FederalState::NordrheinWestfalen,
        FederalState::RheinlandPfalz,
        FederalState::Saarland,
        FederalState::Sachsen,
        FederalState::SachsenAnhalt,
        FederalState::SchleswigHolstein,
        FederalState::Thueringen,
    ];

    /// Canonical lowercase, hyphenated identifier.
    pub fn id(&self) -> &'static str {
        match self {
            FederalState::BadenWuerttemberg => "baden-württemberg",
            FederalState::Bayern => "bayern",
            FederalState::Berlin => "berlin",
            FederalState::Brandenburg => "brandenburg",
            FederalState::Bremen => "bremen",
            FederalState::Hamburg => "hamburg",
            FederalState::Hessen => "hessen",
            FederalState::MecklenburgVorpommern => "mecklenburg-vorpommern",
            FederalState::Niedersachsen => "niedersachsen",
            FederalState::NordrheinWestfalen => "nordrhein-westfalen",
            FederalState::RheinlandPfalz => "rheinland-pfalz",
            FederalState::Saarland => "saarland",
            FederalState::Sachsen => "sachsen",
            FederalState::SachsenAnhalt => "sachsen-anhalt",
            FederalState::SchleswigHolstein => "schleswig-holstein",
            FederalState::Thueringen => "thüringen",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FederalState::BadenWuerttemberg => "Baden-Württemberg",
            FederalState::Bayern => "Bayern",
            FederalState::Berlin => "Berlin",
            FederalState::Brandenburg => "Brandenburg",
            FederalState::Bremen => "Bremen",
            FederalState::Hamburg => "Hamburg",
            FederalState::Hessen => "Hessen",
            FederalState::MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            FederalState::Niedersachsen => "Niedersachsen",
            FederalState::NordrheinWestfalen => "Nordrhein-Westfalen",
            FederalState::RheinlandPfalz => "Rheinland-Pfalz",
            FederalState::Saarland => "Saarland",
            FederalState::Sachsen => "Sachsen",
            FederalState::SachsenAnhalt => "Sachsen-Anhalt",
            FederalState::SchleswigHolstein => "Schleswig-Holstein",
            FederalState::Thueringen => "Thüringen",
        }
    }

    /// Look up by canonical identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        FederalState::ALL.into_iter().find(|s| s.id() == id)
    }
}
