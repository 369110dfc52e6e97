//! Name tables by culture.
//!
//! Each culture has given names, family names and place names. Worlds take a
//! place name; NPCs take a given and family name.

use serde::Serialize;
use swn_tables::{Field, RandomSource, Record, TableResult, UniformList};

use crate::culture::Culture;

/// Name lists for one culture.
#[derive(Debug, Clone)]
pub struct CultureNames {
    /// Given names.
    pub given: UniformList,
    /// Family names.
    pub family: UniformList,
    /// Place names.
    pub place: UniformList,
}

/// Name lists for every culture.
#[derive(Debug, Clone)]
pub struct NameTables {
    by_culture: Vec<CultureNames>,
}

impl NameTables {
    /// Build the default name lists.
    pub fn new() -> TableResult<Self> {
        let mut by_culture = Vec::with_capacity(Culture::ALL.len());
        for culture in Culture::ALL {
            let lists = raw(culture);
            by_culture.push(CultureNames {
                given: UniformList::new(format!("{culture} Given Name"), lists.given.iter().copied())?,
                family: UniformList::new(
                    format!("{culture} Family Name"),
                    lists.family.iter().copied(),
                )?,
                place: UniformList::new(format!("{culture} Place Name"), lists.place.iter().copied())?,
            });
        }
        Ok(Self { by_culture })
    }

    /// The lists for `culture`.
    pub fn by_culture(&self, culture: Culture) -> &CultureNames {
        &self.by_culture[culture.index()]
    }

    /// Roll a person's name and a place name for `culture`.
    pub fn roll(&self, culture: Culture, rng: &mut dyn RandomSource) -> NameRoll {
        let names = self.by_culture(culture);
        NameRoll {
            culture,
            given: names.given.roll(rng).to_string(),
            family: names.family.roll(rng).to_string(),
            place: names.place.roll(rng).to_string(),
        }
    }
}

/// A rolled person name and place name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRoll {
    /// Culture the names come from.
    pub culture: Culture,
    /// Given name.
    pub given: String,
    /// Family name.
    pub family: String,
    /// Place name.
    pub place: String,
}

impl NameRoll {
    /// Given and family name joined.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given, self.family)
    }
}

impl Record for NameRoll {
    fn title(&self) -> String {
        format!("{} Names", self.culture)
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("Culture", self.culture.to_string()),
            Field::new("Name", self.full_name()),
            Field::new("Place", &self.place),
        ]
    }
}

struct RawNames {
    given: &'static [&'static str],
    family: &'static [&'static str],
    place: &'static [&'static str],
}

fn raw(culture: Culture) -> RawNames {
    match culture {
        Culture::Arabic => RawNames {
            given: &["Aisha", "Farid", "Habib", "Jamila", "Khalid", "Layla", "Nadia", "Tariq"],
            family: &["Al-Amin", "Bakr", "Haddad", "Jaber", "Mansour", "Nasser", "Qasim", "Saleh"],
            place: &["Adan", "Bayt Nur", "Dar Hayat", "Jazirah", "Marsa", "Qalat", "Suq Zahra", "Wadi Ramil"],
        },
        Culture::Chinese => RawNames {
            given: &["An", "Bao", "Chen", "Hui", "Jing", "Lian", "Mei", "Wei"],
            family: &["Chang", "Deng", "Guo", "Huang", "Li", "Song", "Wang", "Zhou"],
            place: &["Baishan", "Changle", "Donghai", "Jinyuan", "Longmen", "Qinghe", "Tianshui", "Xuanwu"],
        },
        Culture::English => RawNames {
            given: &["Alice", "Edmund", "Harriet", "Hugh", "Margery", "Oliver", "Rowena", "Walter"],
            family: &["Ashby", "Carver", "Fletcher", "Hale", "Marsh", "Penrose", "Thorne", "Whitlock"],
            place: &["Ashford", "Blackmoor", "Carlisle", "Dunmere", "Harrowgate", "Kestrel", "Redhill", "Wexham"],
        },
        Culture::Greek => RawNames {
            given: &["Alexios", "Daphne", "Eleni", "Kosmas", "Nikolaos", "Phoebe", "Theodora", "Yannis"],
            family: &["Andreou", "Demetriou", "Georgiou", "Karras", "Laskaris", "Pappas", "Stavrou", "Vlachos"],
            place: &["Aigai", "Delos", "Kalamata", "Korinth", "Myra", "Nea Ithaki", "Pelagos", "Thera"],
        },
        Culture::Indian => RawNames {
            given: &["Aarav", "Devika", "Ishaan", "Kavya", "Meera", "Rohan", "Sanjay", "Tara"],
            family: &["Bhatt", "Chandra", "Iyer", "Kapoor", "Menon", "Nair", "Rao", "Verma"],
            place: &["Amravati", "Chandrapur", "Devagiri", "Indraprastha", "Kanchi", "Madurai", "Suryanagar", "Vijaya"],
        },
        Culture::Japanese => RawNames {
            given: &["Akira", "Emi", "Haruto", "Kaori", "Kenji", "Mika", "Ren", "Yui"],
            family: &["Fujita", "Hayashi", "Ishikawa", "Kobayashi", "Mori", "Nakamura", "Sato", "Takeda"],
            place: &["Akashi", "Fujisawa", "Hoshino", "Kanazawa", "Minato", "Shirakawa", "Tsukishima", "Yamabe"],
        },
        Culture::Latin => RawNames {
            given: &["Aurelia", "Cassius", "Decimus", "Flavia", "Julia", "Lucius", "Marcus", "Octavia"],
            family: &["Agrippa", "Claudius", "Fabius", "Flavius", "Junius", "Livius", "Valerius", "Varro"],
            place: &["Aquae Novae", "Castra Nova", "Forum Stellae", "Lucentum", "Nova Roma", "Portus Solis", "Tarraco", "Vindobona"],
        },
        Culture::Nigerian => RawNames {
            given: &["Adaeze", "Babatunde", "Chidi", "Folake", "Ifeoma", "Kelechi", "Ngozi", "Tunde"],
            family: &["Adeyemi", "Balogun", "Eze", "Nwosu", "Obi", "Okafor", "Oyelaran", "Uche"],
            place: &["Abeokuta", "Asaba", "Benin", "Ibadan", "Ife", "Kano", "Onitsha", "Zaria"],
        },
        Culture::Russian => RawNames {
            given: &["Anastasia", "Dmitri", "Ekaterina", "Ivan", "Katya", "Mikhail", "Sergei", "Yelena"],
            family: &["Belov", "Ivanov", "Kuznetsov", "Morozov", "Orlov", "Petrov", "Sokolov", "Volkov"],
            place: &["Belograd", "Kirovsk", "Novaya Zvezda", "Polyarny", "Svetlograd", "Tikhaya", "Vostok", "Zarya"],
        },
        Culture::Spanish => RawNames {
            given: &["Alejandro", "Carmen", "Diego", "Elena", "Inés", "Lucía", "Mateo", "Rodrigo"],
            family: &["Álvarez", "Castillo", "Delgado", "Herrera", "Morales", "Navarro", "Ortega", "Vargas"],
            place: &["Alcázar", "Buenaventura", "Costa Brava", "Esperanza", "Nueva Sevilla", "San Isidro", "Santa Luz", "Valdoro"],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swn_tables::Scripted;

    #[test]
    fn every_culture_has_names() {
        let tables = NameTables::new().unwrap();
        for culture in Culture::ALL {
            let names = tables.by_culture(culture);
            assert!(!names.given.is_empty());
            assert!(!names.family.is_empty());
            assert!(!names.place.is_empty());
            assert!(names.place.name().starts_with(&culture.to_string()));
        }
    }

    #[test]
    fn roll_uses_culture_lists() {
        let tables = NameTables::new().unwrap();
        let mut rng = Scripted::new([0, 7, 2]);
        let roll = tables.roll(Culture::Russian, &mut rng);
        assert_eq!(roll.full_name(), "Anastasia Volkov");
        assert_eq!(roll.place, "Novaya Zvezda");
        assert_eq!(roll.title(), "Russian Names");
        assert_eq!(roll.fields()[1], Field::new("Name", "Anastasia Volkov"));
    }
}
