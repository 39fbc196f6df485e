use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::error::CatalogError;
use crate::models::{Fragrance, Projection, Season};

/// Immutable, ordered collection of fragrance records
///
/// Insertion order is significant: ranking ties are broken by it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    fragrances: Vec<Fragrance>,
}

impl Catalog {
    /// Build a catalog, enforcing unique ids, non-empty set attributes and
    /// non-negative prices
    pub fn new(fragrances: Vec<Fragrance>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(fragrances.len());

        for fragrance in &fragrances {
            if !seen.insert(fragrance.id) {
                return Err(CatalogError::DuplicateId(fragrance.id));
            }

            if fragrance.price.is_nan() || fragrance.price < 0.0 {
                return Err(CatalogError::NegativePrice {
                    id: fragrance.id,
                    price: fragrance.price,
                });
            }

            let empty_field = if fragrance.notes.is_empty() {
                Some("notes")
            } else if fragrance.season.is_empty() {
                Some("season")
            } else if fragrance.context.is_empty() {
                Some("context")
            } else if fragrance.style.is_empty() {
                Some("style")
            } else {
                None
            };

            if let Some(field) = empty_field {
                return Err(CatalogError::EmptyAttribute { id: fragrance.id, field });
            }
        }

        Ok(Self { fragrances })
    }

    /// Parse a JSON array of fragrance records
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let fragrances: Vec<Fragrance> = serde_json::from_str(json)?;
        Self::new(fragrances)
    }

    /// The built-in five-record catalog
    pub fn sample() -> Self {
        Self {
            fragrances: sample_fragrances(),
        }
    }

    pub fn get(&self, id: u32) -> Option<&Fragrance> {
        self.fragrances.iter().find(|f| f.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragrance> {
        self.fragrances.iter()
    }

    pub fn as_slice(&self) -> &[Fragrance] {
        &self.fragrances
    }

    pub fn len(&self) -> usize {
        self.fragrances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragrances.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Fragrance;
    type IntoIter = std::slice::Iter<'a, Fragrance>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragrances.iter()
    }
}

/// Shared handle to the current catalog snapshot
///
/// Readers clone the `Arc` and score against it for the whole request, so a
/// concurrent `replace` is never observed half-applied.
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Take the current snapshot
    pub fn snapshot(&self) -> Arc<Catalog> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Publish a new snapshot, returning the one it replaced
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        tracing::info!("Catalog snapshot replaced ({} -> {} fragrances)", guard.len(), next.len());
        std::mem::replace(&mut *guard, next)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_fragrances() -> Vec<Fragrance> {
    vec![
        Fragrance {
            id: 1,
            name: "Bleu de Chanel".to_string(),
            brand: "Chanel".to_string(),
            price: 135.0,
            notes: strings(&["Bergamot", "Grapefruit", "Mint", "Pink Pepper", "Cedar", "Labdanum"]),
            projection: Projection::Moderate,
            longevity: "6-8h".to_string(),
            season: vec![Season::Spring, Season::Summer, Season::Fall],
            context: strings(&["office", "casual", "date-night"]),
            style: strings(&["fresh", "woody", "citrus"]),
            description: "A sophisticated and versatile fragrance perfect for any occasion.".to_string(),
            image_url: None,
        },
        Fragrance {
            id: 2,
            name: "Sauvage".to_string(),
            brand: "Dior".to_string(),
            price: 95.0,
            notes: strings(&["Bergamot", "Pepper", "Ambroxan", "Cedar"]),
            projection: Projection::Strong,
            longevity: "8h+".to_string(),
            season: vec![Season::AllYear],
            context: strings(&["casual", "date-night", "club"]),
            style: strings(&["fresh", "woody"]),
            description: "A bold and modern fragrance with exceptional performance.".to_string(),
            image_url: None,
        },
        Fragrance {
            id: 3,
            name: "Acqua di Gio".to_string(),
            brand: "Giorgio Armani".to_string(),
            price: 85.0,
            notes: strings(&["Bergamot", "Neroli", "Marine Notes", "Cedar", "Patchouli"]),
            projection: Projection::Low,
            longevity: "4-6h".to_string(),
            season: vec![Season::Spring, Season::Summer],
            context: strings(&["casual", "office"]),
            style: strings(&["fresh", "citrus", "green"]),
            description: "A fresh and aquatic fragrance perfect for warm weather.".to_string(),
            image_url: None,
        },
        Fragrance {
            id: 4,
            name: "La Nuit de L'Homme".to_string(),
            brand: "Yves Saint Laurent".to_string(),
            price: 75.0,
            notes: strings(&["Cardamom", "Bergamot", "Lavender", "Cedar", "Vetiver"]),
            projection: Projection::Moderate,
            longevity: "6-8h".to_string(),
            season: vec![Season::Fall, Season::Winter],
            context: strings(&["date-night", "casual"]),
            style: strings(&["spicy", "woody"]),
            description: "A seductive and warm fragrance for evening wear.".to_string(),
            image_url: None,
        },
        Fragrance {
            id: 5,
            name: "Club de Nuit Intense Man".to_string(),
            brand: "Armaf".to_string(),
            price: 35.0,
            notes: strings(&["Bergamot", "Lemon", "Black Pepper", "Birch", "Ambroxan"]),
            projection: Projection::Strong,
            longevity: "8h+".to_string(),
            season: vec![Season::AllYear],
            context: strings(&["casual", "date-night", "club"]),
            style: strings(&["fresh", "woody"]),
            description: "An affordable alternative to Creed Aventus with similar DNA.".to_string(),
            image_url: None,
        },
    ]
}
