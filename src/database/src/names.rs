use rand::Rng;
use rand::seq::SliceRandom;

/// Embedded name pools for the generated world. The original data pipeline
/// pulled locale-aware names from an external faker; here a single pool of
/// plausible football names is embedded the same way the fantasy city and
/// suffix lists are.
pub const FIRST_NAMES: &[&str] = &[
    "James", "Oliver", "Harry", "Jack", "Thomas", "Lucas", "Mateo", "Diego", "Carlos", "Javier",
    "Antoine", "Hugo", "Louis", "Pierre", "Lukas", "Felix", "Jonas", "Max", "Marco", "Luca",
    "Giovanni", "Alessandro", "Joao", "Tiago", "Rafael", "Bruno", "Daan", "Sem", "Thijs", "Milan",
    "Ivan", "Nikola", "Marko", "Andrej", "Jakub", "Tomasz", "Piotr", "Viktor", "Erik", "Emil",
    "Lars", "Magnus", "Emre", "Burak", "Youssef", "Amir", "Kwame", "Sadio", "Moussa", "Idrissa",
    "Kenji", "Haruto", "Minjun", "Santiago", "Nicolas", "Facundo", "Emiliano", "Gabriel",
    "Martin", "Sebastian", "Adrian", "Leon", "Noah", "Elias",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Walker", "Turner", "Wright", "Hughes", "Garcia", "Rodriguez", "Fernandez", "Lopez",
    "Martinez", "Dubois", "Moreau", "Lefevre", "Girard", "Muller", "Schmidt", "Fischer", "Weber",
    "Wagner", "Rossi", "Ferrari", "Romano", "Ricci", "Silva", "Santos", "Oliveira", "Pereira",
    "Costa", "de Jong", "van Dijk", "Bakker", "Visser", "Kovac", "Novak", "Horvat", "Petrovic",
    "Kowalski", "Nowak", "Novotny", "Svoboda", "Andersson", "Johansson", "Nielsen", "Hansen",
    "Berg", "Yilmaz", "Demir", "Kaya", "Hassan", "Diallo", "Traore", "Mensah", "Keita", "Ndiaye",
    "Tanaka", "Sato", "Kim", "Park", "Gonzalez", "Alvarez", "Romero", "Herrera", "Castro",
    "Vargas", "Mendoza", "Ramos", "Torres", "Flores", "Morales", "Ortiz", "Ibrahim", "Aziz",
    "Okafor", "Adeyemi", "Eriksen", "Lindgren", "Virtanen", "Popescu", "Ionescu", "Shevchenko",
];

/// Weighted nationality labels, heaviest football nations first. Weights are
/// relative, not normalized.
pub const NATIONALITIES: &[(&str, f32)] = &[
    ("English", 0.185),
    ("Spanish", 0.12),
    ("French", 0.11),
    ("German", 0.10),
    ("Brazilian", 0.09),
    ("Italian", 0.08),
    ("Argentine", 0.07),
    ("Portuguese", 0.05),
    ("Dutch", 0.05),
    ("Belgian", 0.04),
    ("Colombian", 0.03),
    ("Japanese", 0.026),
    ("Croatian", 0.025),
    ("Nigerian", 0.025),
    ("Korean", 0.021),
    ("Uruguayan", 0.02),
    ("Serbian", 0.02),
    ("Polish", 0.02),
    ("Turkish", 0.02),
    ("Senegalese", 0.02),
    ("Ivorian", 0.018),
    ("Swedish", 0.015),
    ("Ghanaian", 0.015),
    ("Egyptian", 0.015),
    ("Mexican", 0.015),
    ("Danish", 0.012),
    ("American", 0.012),
    ("Norwegian", 0.01),
    ("Austrian", 0.01),
    ("Moroccan", 0.012),
];

pub const FANTASY_CITIES: &[&str] = &[
    "Stormwind", "Krondor", "Silverpeak", "Moonlight Bay", "Thunder Valley",
    "Crystal Coast", "Shadow Harbor", "Golden Plains", "Frost Ridge", "Emerald Hills",
    "Crimson Port", "Azure Bay", "Sunset Shore", "Dragon's Keep", "Phoenix Rise",
    "Silver Falls", "Granite City", "Maple Grove", "Riverside", "Oakmont",
    "Pinewood", "Cedarville", "Willowbrook", "Birchfield", "Hawthorne",
];

pub const CLUB_SUFFIXES: &[&str] = &[
    "United", "City", "Rangers", "Athletic", "Wanderers",
    "Town", "Rovers", "FC", "Hotspur", "Albion", "County",
    "Hearts", "Celtic", "Dynamos", "Strikers", "Titans", "Warriors",
];

pub const STADIUM_TYPES: &[&str] = &[
    "Arena", "Stadium", "Park", "Ground", "Field",
    "Dome", "Fortress", "Citadel", "Colosseum",
];

pub const STADIUM_DESCRIPTORS: &[&str] = &[
    "Thunder", "Lightning", "Storm", "Crystal", "Golden",
    "Silver", "Royal", "Imperial", "Grand", "Memorial",
    "Victory", "Glory", "Honor", "United", "Premier",
];

pub const COLOR_PAIRS: &[(&str, &str)] = &[
    ("Red", "White"), ("Blue", "White"), ("Green", "White"),
    ("Yellow", "Black"), ("Black", "White"), ("Purple", "Gold"),
    ("Orange", "Blue"), ("Maroon", "Sky Blue"), ("Navy", "Red"),
    ("Crimson", "Silver"),
];

pub const FORMATIONS: &[&str] = &["4-3-3", "4-4-2", "4-2-3-1", "3-5-2", "4-1-4-1", "3-4-3"];

pub const PLAYING_STYLES: &[&str] = &[
    "Possession", "Counter-Attack", "High Pressing", "Defensive", "Balanced", "Direct",
];

pub const TRANSFER_REASONS: &[&str] = &[
    "Career progression",
    "Higher wages",
    "First team opportunity",
    "Playing time",
    "Relegation clause",
    "Contract expiry",
    "Club financial needs",
    "Manager request",
];

pub fn random_first_name<R: Rng>(rng: &mut R) -> String {
    FIRST_NAMES.choose(rng).unwrap().to_string()
}

pub fn random_last_name<R: Rng>(rng: &mut R) -> String {
    LAST_NAMES.choose(rng).unwrap().to_string()
}

/// Weighted draw over [`NATIONALITIES`].
pub fn random_nationality<R: Rng>(rng: &mut R) -> &'static str {
    let total: f32 = NATIONALITIES.iter().map(|(_, w)| w).sum();
    let mut target = rng.gen_range(0.0..total);

    for (name, weight) in NATIONALITIES {
        if target < *weight {
            return name;
        }
        target -= weight;
    }

    NATIONALITIES.last().unwrap().0
}
