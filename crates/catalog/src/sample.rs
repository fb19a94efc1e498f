//! The built-in six-café dataset.

use crate::types::*;
use std::collections::BTreeSet;

struct Record {
    id: &'static str,
    name: &'static str,
    tagline: &'static str,
    distance_km: f64,
    rating: f32,
    outlets: bool,
    food: bool,
    seating: Seating,
    noise_level: NoiseLevel,
    study_friendly: u8,
    dietary: &'static [DietaryTag],
}

const RECORDS: [Record; 6] = [
    Record {
        id: "1",
        name: "The Cozy Corner",
        tagline: "Your neighborhood coffee haven",
        distance_km: 0.3,
        rating: 4.8,
        outlets: true,
        food: true,
        seating: Seating::Booths,
        noise_level: NoiseLevel::Quiet,
        study_friendly: 5,
        dietary: &[DietaryTag::Halal, DietaryTag::Vegetarian],
    },
    Record {
        id: "2",
        name: "Urban Brew House",
        tagline: "Modern space for work & coffee",
        distance_km: 0.5,
        rating: 4.5,
        outlets: true,
        food: true,
        seating: Seating::OpenTables,
        noise_level: NoiseLevel::Moderate,
        study_friendly: 4,
        dietary: &[DietaryTag::Vegetarian, DietaryTag::GlutenFree],
    },
    Record {
        id: "3",
        name: "Workspace Café",
        tagline: "Perfect for remote workers",
        distance_km: 0.7,
        rating: 4.7,
        outlets: true,
        food: false,
        seating: Seating::OpenTables,
        noise_level: NoiseLevel::Quiet,
        study_friendly: 5,
        dietary: &[DietaryTag::Kosher],
    },
    Record {
        id: "4",
        name: "Sunny Side Café",
        tagline: "Bright vibes and great coffee",
        distance_km: 0.9,
        rating: 4.6,
        outlets: false,
        food: true,
        seating: Seating::Couches,
        noise_level: NoiseLevel::Moderate,
        study_friendly: 3,
        dietary: &[DietaryTag::Halal, DietaryTag::GlutenFree],
    },
    Record {
        id: "5",
        name: "Artisan Coffee Co.",
        tagline: "Handcrafted specialty drinks",
        distance_km: 1.2,
        rating: 4.9,
        outlets: true,
        food: true,
        seating: Seating::BarSeating,
        noise_level: NoiseLevel::Quiet,
        study_friendly: 5,
        dietary: &[DietaryTag::Vegetarian],
    },
    Record {
        id: "6",
        name: "The Daily Grind",
        tagline: "Community coffee culture",
        distance_km: 1.4,
        rating: 4.4,
        outlets: false,
        food: true,
        seating: Seating::Couches,
        noise_level: NoiseLevel::Lively,
        study_friendly: 2,
        dietary: &[DietaryTag::Kosher, DietaryTag::Vegetarian, DietaryTag::GlutenFree],
    },
];

impl Record {
    fn to_cafe(&self) -> Cafe {
        Cafe {
            id: CafeId::new(self.id),
            name: self.name.to_string(),
            tagline: self.tagline.to_string(),
            distance_km: self.distance_km,
            rating: self.rating,
            outlets: self.outlets,
            food: self.food,
            seating: self.seating,
            noise_level: self.noise_level,
            study_friendly: self.study_friendly,
            dietary_options: self.dietary.iter().copied().collect::<BTreeSet<_>>(),
        }
    }
}

/// The sample records as owned cafés, in listing order.
pub fn sample_cafes() -> Vec<Cafe> {
    RECORDS.iter().map(Record::to_cafe).collect()
}

impl CafeCatalog {
    /// Catalog holding the built-in sample records.
    pub fn sample() -> Self {
        let cafes = sample_cafes();
        let by_id = cafes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
        Self { cafes, by_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_passes_validation() {
        let validated = CafeCatalog::from_cafes(sample_cafes()).unwrap();
        assert_eq!(validated.len(), CafeCatalog::sample().len());
    }

    #[test]
    fn test_sample_contents() {
        let catalog = CafeCatalog::sample();
        assert_eq!(catalog.len(), 6);

        let artisan = catalog.get(&CafeId::new("5")).unwrap();
        assert_eq!(artisan.name, "Artisan Coffee Co.");
        assert_eq!(artisan.seating, Seating::BarSeating);
        assert_eq!(artisan.rating, 4.9);

        let grind = catalog.get(&"6".into()).unwrap();
        assert_eq!(grind.dietary_options.len(), 3);
        assert_eq!(grind.noise_level, NoiseLevel::Lively);
    }
}
