//! Built-in demo dataset of four venues.

use super::RatingsTable;

const DEMO_COLUMNS: [&str; 12] = [
    "Location",
    "Parcheggio",
    "Qualità/Prezzo",
    "Pubblic Relation",
    "Primi",
    "Carne",
    "Pesce",
    "Panini",
    "Pizza",
    "Birra",
    "Vino",
    "Veg",
];

const DEMO_ROWS: [(&str, [f64; 12]); 4] = [
    ("Osteria Alba", [4.0, 3.0, 4.0, 4.0, 5.0, 4.0, 3.0, 3.0, 4.0, 3.0, 4.0, 3.0]),
    ("Pub 9", [3.0, 2.0, 3.0, 3.0, 3.0, 4.0, 2.0, 5.0, 4.0, 5.0, 3.0, 2.0]),
    ("Enoteca Centro", [5.0, 4.0, 5.0, 4.0, 4.0, 3.0, 5.0, 2.0, 3.0, 2.0, 5.0, 4.0]),
    ("Trattoria Luna", [4.0, 3.0, 4.0, 5.0, 5.0, 5.0, 3.0, 3.0, 4.0, 3.0, 4.0, 3.0]),
];

/// Four fully rated venues on the 1–5 scale.
pub fn demo_dataset() -> RatingsTable {
    DEMO_ROWS
        .iter()
        .fold(RatingsTable::builder(), |builder, (name, ratings)| {
            builder.rated(*name, DEMO_COLUMNS.iter().copied().zip(ratings.iter().copied()))
        })
        .build()
}
