use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;

use crate::listings::repo::NewListing;

const TITLE_LEADS: &[&str] = &[
    "Sunny", "Cozy", "Modern", "Rustic", "Charming", "Spacious", "Quiet", "Elegant", "Breezy",
    "Historic", "Secluded", "Lakeside",
];

const TITLE_KINDS: &[&str] = &[
    "Loft",
    "Cottage",
    "Villa",
    "Studio",
    "Bungalow",
    "Apartment",
    "Cabin",
    "Townhouse",
    "Penthouse",
    "Farmhouse",
];

const TITLE_TAILS: &[&str] = &["Retreat", "Getaway", "Escape", "Hideaway", "Stay"];

const SENTENCES: &[&str] = &[
    "Wake up to natural light in every room.",
    "Minutes from local restaurants and cafes.",
    "The kitchen is fully equipped for long stays.",
    "Fast wifi and a dedicated workspace make remote work easy.",
    "A private patio looks out over the garden.",
    "Fresh linens and towels are provided for every guest.",
    "Off-street parking is included with the stay.",
    "The neighborhood is quiet and walkable.",
    "Hosts live nearby and respond quickly.",
    "Perfect as a base for exploring the area.",
];

const STREETS: &[&str] = &[
    "Maple Street",
    "Oak Avenue",
    "Cedar Lane",
    "Harbor Road",
    "Sunset Boulevard",
    "Elm Drive",
    "Willow Way",
    "Birchwood Court",
    "River Bend Road",
    "Hilltop Terrace",
];

const CITIES: &[(&str, &str)] = &[
    ("Portland", "OR"),
    ("Austin", "TX"),
    ("Asheville", "NC"),
    ("Savannah", "GA"),
    ("Boulder", "CO"),
    ("Burlington", "VT"),
    ("Santa Fe", "NM"),
    ("Ann Arbor", "MI"),
    ("Charleston", "SC"),
    ("Eugene", "OR"),
];

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn title(rng: &mut impl Rng) -> String {
    format!(
        "{} {} {}",
        pick(rng, TITLE_LEADS),
        pick(rng, TITLE_KINDS),
        pick(rng, TITLE_TAILS)
    )
}

fn description(rng: &mut impl Rng) -> String {
    let count = rng.gen_range(2..=4);
    SENTENCES
        .choose_multiple(rng, count)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn address(rng: &mut impl Rng) -> String {
    let (city, state) = CITIES.choose(rng).copied().unwrap_or(("Portland", "OR"));
    format!(
        "{} {}, {}, {} {:05}",
        rng.gen_range(1..=9999),
        pick(rng, STREETS),
        city,
        state,
        rng.gen_range(10000..=99999)
    )
}

/// One synthetic listing with realistic-looking values. The nightly price is
/// drawn uniformly from [50.00, 500.00] in whole cents, so it always carries
/// exactly two decimal places.
pub fn listing(rng: &mut impl Rng) -> NewListing {
    NewListing {
        title: title(rng),
        description: description(rng),
        price_per_night: Decimal::new(rng.gen_range(5_000..=50_000), 2),
        address: address(rng),
        num_bedrooms: rng.gen_range(1..=6),
        num_bathrooms: rng.gen_range(1..=4),
        max_guests: rng.gen_range(1..=12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_fields_stay_in_range() {
        let mut rng = rand::thread_rng();
        let min_price = Decimal::new(5_000, 2);
        let max_price = Decimal::new(50_000, 2);

        for _ in 0..500 {
            let listing = listing(&mut rng);
            assert!(!listing.title.is_empty());
            assert!(!listing.description.is_empty());
            assert!(listing.address.contains(','));
            assert!(listing.price_per_night >= min_price);
            assert!(listing.price_per_night <= max_price);
            assert_eq!(listing.price_per_night.scale(), 2);
            assert!((1..=6).contains(&listing.num_bedrooms));
            assert!((1..=4).contains(&listing.num_bathrooms));
            assert!((1..=12).contains(&listing.max_guests));
        }
    }
}
