use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::storage::Record;

pub const CONSENT_VERSION: u32 = 1;

fn current_version() -> u32 {
    CONSENT_VERSION
}

/// Optional cookie categories. Necessary cookies are not a category the user can touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Analytics,
    Marketing,
    Functional,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Analytics, Category::Marketing, Category::Functional];
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePreferences {
    necessary: bool,
    pub analytics: bool,
    pub marketing: bool,
    pub functional: bool,
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self::reject_all()
    }
}

impl CookiePreferences {
    pub fn accept_all() -> Self {
        Self {
            necessary: true,
            analytics: true,
            marketing: true,
            functional: true,
        }
    }

    pub fn reject_all() -> Self {
        Self {
            necessary: true,
            analytics: false,
            marketing: false,
            functional: false,
        }
    }

    pub fn necessary(&self) -> bool {
        self.necessary
    }

    pub fn get(&self, category: Category) -> bool {
        match category {
            Category::Analytics => self.analytics,
            Category::Marketing => self.marketing,
            Category::Functional => self.functional,
        }
    }

    pub fn toggled(&self, category: Category) -> Self {
        let mut next = self.clone();
        match category {
            Category::Analytics => next.analytics = !next.analytics,
            Category::Marketing => next.marketing = !next.marketing,
            Category::Functional => next.functional = !next.functional,
        }
        next
    }
}

/// How the visitor closed the banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    AcceptAll,
    RejectAll,
    AcceptSelected(CookiePreferences),
}

impl Decision {
    pub fn preferences(&self) -> CookiePreferences {
        match self {
            Decision::AcceptAll => CookiePreferences::accept_all(),
            Decision::RejectAll => CookiePreferences::reject_all(),
            Decision::AcceptSelected(prefs) => CookiePreferences {
                necessary: true,
                ..prefs.clone()
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    #[serde(default = "current_version")]
    pub version: u32,
    pub timestamp: String,
    pub preferences: CookiePreferences,
}

impl ConsentRecord {
    pub fn new(decision: &Decision, timestamp: String) -> Self {
        Self {
            version: CONSENT_VERSION,
            timestamp,
            preferences: decision.preferences(),
        }
    }

    pub fn now(decision: &Decision) -> Self {
        Self::new(
            decision,
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }
}

impl Record for ConsentRecord {
    const KEY: &'static str = config::COOKIE_CONSENT_KEY;

    fn validate(&self) -> Result<(), String> {
        if self.version != CONSENT_VERSION {
            return Err(format!("unsupported consent version {}", self.version));
        }
        if !self.preferences.necessary {
            return Err("necessary cookies recorded as disabled".to_string());
        }
        if chrono::DateTime::parse_from_rfc3339(&self.timestamp).is_err() {
            return Err(format!("bad timestamp {:?}", self.timestamp));
        }
        Ok(())
    }
}

/// The banner is only offered when no usable decision has been stored.
pub fn banner_needed(stored: Option<&ConsentRecord>) -> bool {
    stored.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{decode, encode, StorageError};
    use pretty_assertions::assert_eq;

    const TS: &str = "2025-08-04T16:39:18.000Z";

    #[test]
    fn every_decision_keeps_necessary_on() {
        let selected = CookiePreferences::reject_all().toggled(Category::Marketing);
        for decision in [
            Decision::AcceptAll,
            Decision::RejectAll,
            Decision::AcceptSelected(selected),
        ] {
            let record = ConsentRecord::new(&decision, TS.to_string());
            assert!(record.preferences.necessary(), "{:?}", decision);
        }
    }

    #[test]
    fn accept_selected_records_exactly_the_toggles() {
        let selected = CookiePreferences::reject_all()
            .toggled(Category::Analytics)
            .toggled(Category::Functional);
        let prefs = Decision::AcceptSelected(selected).preferences();
        assert!(prefs.analytics);
        assert!(!prefs.marketing);
        assert!(prefs.functional);
    }

    #[test]
    fn accept_and_reject_all() {
        let all = Decision::AcceptAll.preferences();
        assert!(Category::ALL.into_iter().all(|c| all.get(c)));
        let none = Decision::RejectAll.preferences();
        assert!(Category::ALL.into_iter().all(|c| !none.get(c)));
    }

    #[test]
    fn banner_only_without_stored_decision() {
        assert!(banner_needed(None));
        let record = ConsentRecord::new(&Decision::RejectAll, TS.to_string());
        assert!(!banner_needed(Some(&record)));
    }

    #[test]
    fn stored_record_round_trips() {
        let record = ConsentRecord::new(&Decision::AcceptAll, TS.to_string());
        let raw = encode(&record).unwrap();
        assert_eq!(decode::<ConsentRecord>(&raw).unwrap(), record);
    }

    #[test]
    fn accepts_legacy_unversioned_record() {
        let raw = r#"{"timestamp":"2025-08-04T16:39:18.123Z","preferences":{"necessary":true,"analytics":false,"marketing":true,"functional":false}}"#;
        let record: ConsentRecord = decode(raw).unwrap();
        assert!(record.preferences.marketing);
        assert_eq!(record.version, CONSENT_VERSION);
    }

    #[test]
    fn rejects_disabled_necessary_and_bad_timestamps() {
        let raw = r#"{"version":1,"timestamp":"2025-08-04T16:39:18.123Z","preferences":{"necessary":false,"analytics":false,"marketing":false,"functional":false}}"#;
        assert!(matches!(decode::<ConsentRecord>(raw), Err(StorageError::Invalid(_))));

        let raw = r#"{"version":1,"timestamp":"yesterday","preferences":{"necessary":true,"analytics":false,"marketing":false,"functional":false}}"#;
        assert!(matches!(decode::<ConsentRecord>(raw), Err(StorageError::Invalid(_))));
    }

    #[test]
    fn now_produces_a_valid_record() {
        let record = ConsentRecord::now(&Decision::RejectAll);
        assert!(record.validate().is_ok());
        assert!(record.timestamp.ends_with('Z'));
    }
}
