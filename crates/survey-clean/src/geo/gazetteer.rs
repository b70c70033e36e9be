//! Closed set of valid LGA/LCDA names.

use std::collections::HashSet;

/// Lagos State Local Government Areas and Local Council Development Areas.
pub const LAGOS_LGAS: &[&str] = &[
    "Agbado/Oke-Odo", "Epe", "Ikeja", "Odi Olowo/Ojuwoye", "Agboyi/Ketu", "Eredo",
    "Ikorodu North", "Ojo", "Agege", "Eti Osa East", "Ikorodu West", "Ojodu", "Ajeromi",
    "Eti Osa West", "Ikosi", "Ejinrin", "Ojokoro", "Alimosho", "Iba", "Ikorodu",
    "Olorunda", "Apapa", "Isolo", "Iru/Victoria Island", "Onigbongbo", "Apapa-Iganmu",
    "Imota", "Itire Ikate", "Oriade", "Ayobo/Ipaja", "Ikoyi-Obalende", "Kosofe",
    "Orile Agege", "Badagry West", "Ibeju", "Lagos West", "Oshodi", "Badagry",
    "Ifako Ijaiye", "Lagos East", "Oto-Awori", "Bariga", "Ifelodun", "Lagos Mainland",
    "Shomolu", "Coker", "Aguda", "Igando/Ikotun", "Lekki", "Surulere", "Egbe Idimu",
    "Igbogbo/Bayeku", "Mosan/Okunola", "Yaba", "Ejigbo", "Ijede", "Mushin",
    "Ajeromi-Ifelodun", "Amuwo-Odofin", "Lagos Island", "Oshodi-Isolo",
];

/// The authoritative set of geographic-unit names. Membership is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gazetteer {
    names: HashSet<String>,
}

impl Gazetteer {
    /// Gazetteer of Lagos LGAs and LCDAs.
    pub fn lagos() -> Self {
        Self::from_names(LAGOS_LGAS.iter().copied())
    }

    /// Build a gazetteer from canonical names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::lagos()
    }
}
