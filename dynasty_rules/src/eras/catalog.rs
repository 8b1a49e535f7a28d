//! The dynasty catalog - the ordered list of eras the timeline shows.

use serde::{Deserialize, Serialize};

use super::{Dynasty, EraSpan};
use crate::error::{RulesError, RulesResult};

/// An ordered, id-unique collection of dynasties.
///
/// Serializes as a plain array of dynasty records. Deserialization goes through
/// [`DynastyCatalog::from_dynasties`], so ids and year ranges are always checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Dynasty>", into = "Vec<Dynasty>")]
pub struct DynastyCatalog {
    dynasties: Vec<Dynasty>,
}

impl TryFrom<Vec<Dynasty>> for DynastyCatalog {
    type Error = RulesError;

    fn try_from(dynasties: Vec<Dynasty>) -> Result<Self, Self::Error> {
        Self::from_dynasties(dynasties)
    }
}

impl From<DynastyCatalog> for Vec<Dynasty> {
    fn from(catalog: DynastyCatalog) -> Self {
        catalog.dynasties
    }
}

impl DynastyCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of dynasties, validating ids and year ranges.
    pub fn from_dynasties(dynasties: Vec<Dynasty>) -> RulesResult<Self> {
        let mut catalog = Self::new();
        for dynasty in dynasties {
            catalog.add(dynasty)?;
        }
        Ok(catalog)
    }

    /// Parse a catalog from a JSON array of dynasty records.
    ///
    /// Unlike deserializing a `DynastyCatalog` directly, a duplicate id or reversed
    /// span surfaces as its own error variant rather than inside `RulesError::Json`.
    pub fn from_json(json: &str) -> RulesResult<Self> {
        let dynasties: Vec<Dynasty> = serde_json::from_str(json)?;
        Self::from_dynasties(dynasties)
    }

    /// The seven dynasties shipped with the timeline.
    pub fn builtin() -> Self {
        let entries = [
            ("qin", "秦", "Qin Dynasty", -221, -206, "咸阳", "嬴政", "#8B4513", "🐉"),
            ("han", "汉", "Han Dynasty", -202, 220, "长安/洛阳", "刘邦", "#FFD700", "🏮"),
            ("tang", "唐", "Tang Dynasty", 618, 907, "长安", "李渊", "#8A2BE2", "🌸"),
            ("song", "宋", "Song Dynasty", 960, 1279, "开封/临安", "赵匡胤", "#20B2AA", "🎋"),
            ("yuan", "元", "Yuan Dynasty", 1271, 1368, "大都", "忽必烈", "#4682B4", "🏹"),
            ("ming", "明", "Ming Dynasty", 1368, 1644, "南京/北京", "朱元璋", "#DC143C", "🌅"),
            ("qing", "清", "Qing Dynasty", 1644, 1912, "北京", "努尔哈赤", "#4B0082", "🦅"),
        ];

        let dynasties = entries
            .into_iter()
            .map(
                |(id, name, english_name, start_year, end_year, capital, founder, color, symbol)| {
                    Dynasty {
                        id: id.to_string(),
                        name: name.to_string(),
                        english_name: english_name.to_string(),
                        start_year,
                        end_year,
                        capital: capital.to_string(),
                        founder: founder.to_string(),
                        color: color.to_string(),
                        symbol: symbol.to_string(),
                    }
                },
            )
            .collect();

        Self { dynasties }
    }

    /// Append a dynasty.
    pub fn add(&mut self, dynasty: Dynasty) -> RulesResult<()> {
        dynasty.span()?;
        if self.get(&dynasty.id).is_some() {
            return Err(RulesError::DuplicateEra(dynasty.id));
        }
        self.dynasties.push(dynasty);
        Ok(())
    }

    /// Get a dynasty by id.
    pub fn get(&self, id: &str) -> Option<&Dynasty> {
        self.dynasties.iter().find(|d| d.id == id)
    }

    /// All dynasties in catalog order.
    pub fn dynasties(&self) -> &[Dynasty] {
        &self.dynasties
    }

    /// Era spans for every dynasty, in catalog order.
    pub fn spans(&self) -> Vec<EraSpan> {
        self.dynasties
            .iter()
            .map(|d| EraSpan {
                id: d.id.clone(),
                start_year: d.start_year,
                end_year: d.end_year,
            })
            .collect()
    }

    /// Ids of all dynasties, in catalog order.
    pub fn ids(&self) -> Vec<&str> {
        self.dynasties.iter().map(|d| d.id.as_str()).collect()
    }

    /// Number of dynasties in the catalog.
    pub fn len(&self) -> usize {
        self.dynasties.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.dynasties.is_empty()
    }

    /// Dynasties whose span covers the given year.
    pub fn ruling_in(&self, year: i32) -> Vec<&Dynasty> {
        self.dynasties
            .iter()
            .filter(|d| (d.start_year..=d.end_year).contains(&year))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = DynastyCatalog::builtin();
        assert_eq!(catalog.len(), 7);
        assert_eq!(
            catalog.ids(),
            vec!["qin", "han", "tang", "song", "yuan", "ming", "qing"]
        );
        assert!(DynastyCatalog::from_dynasties(catalog.dynasties().to_vec()).is_ok());
        assert_eq!(catalog.get("qin").unwrap().duration(), 15);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = DynastyCatalog::new();
        catalog.add(Dynasty::new("tang", "唐", 618, 907)).unwrap();
        let result = catalog.add(Dynasty::new("tang", "唐", 618, 907));
        assert!(matches!(result, Err(RulesError::DuplicateEra(id)) if id == "tang"));
    }

    #[test]
    fn test_from_json() {
        let json = r##"[
            {"id": "a", "name": "A", "english_name": "A Era", "start_year": -221, "end_year": -206,
             "capital": "", "founder": "", "color": "#000000", "symbol": ""},
            {"id": "b", "name": "B", "english_name": "B Era", "start_year": 618, "end_year": 907,
             "capital": "", "founder": "", "color": "#ffffff", "symbol": ""}
        ]"##;

        let catalog = DynastyCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.spans()[1].start_year, 618);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            DynastyCatalog::from_json("{not json"),
            Err(RulesError::Json(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let json = r##"[
            {"id": "a", "name": "A", "english_name": "", "start_year": 1, "end_year": 2,
             "capital": "", "founder": "", "color": "", "symbol": ""},
            {"id": "a", "name": "A", "english_name": "", "start_year": 3, "end_year": 4,
             "capital": "", "founder": "", "color": "", "symbol": ""}
        ]"##;
        assert!(matches!(
            DynastyCatalog::from_json(json),
            Err(RulesError::DuplicateEra(id)) if id == "a"
        ));
    }

    #[test]
    fn test_deserialize_checks_ids_and_ranges() {
        let catalog = DynastyCatalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.starts_with('['));
        let parsed: DynastyCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ids(), catalog.ids());

        let mut doubled = catalog.dynasties().to_vec();
        doubled.push(Dynasty::new("qin", "秦", -221, -206));
        let json = serde_json::to_string(&doubled).unwrap();
        assert!(serde_json::from_str::<DynastyCatalog>(&json).is_err());

        let reversed = vec![Dynasty::new("odd", "?", 900, 800)];
        let json = serde_json::to_string(&reversed).unwrap();
        assert!(serde_json::from_str::<DynastyCatalog>(&json).is_err());
    }

    #[test]
    fn test_ruling_in_overlap() {
        let catalog = DynastyCatalog::builtin();
        let ids: Vec<_> = catalog.ruling_in(1368).iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["yuan", "ming"]);
        assert!(catalog.ruling_in(930).is_empty());
    }
}
