use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::prefs::consent::CookiePreferences;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    He,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::He];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "he" => Some(Language::He),
            _ => None,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::En => Direction::Ltr,
            Language::He => Direction::Rtl,
        }
    }

    pub fn dir(self) -> &'static str {
        self.direction().as_str()
    }

    pub fn is_rtl(self) -> bool {
        self.direction() == Direction::Rtl
    }

    /// Label on the switcher button.
    pub fn short_name(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::He => "HE",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Page-wide state shared through context. Replaces the ad-hoc window events
/// the sections used to listen on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub language: Language,
    /// Latest consent decision, `None` until the visitor chooses. Optional
    /// scripts read this before loading.
    pub cookie_preferences: Option<CookiePreferences>,
}

pub enum AppAction {
    SetLanguage(Language),
    CookiePreferencesUpdated(CookiePreferences),
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AppAction::SetLanguage(language) => {
                if language == self.language {
                    return self;
                }
                Rc::new(AppState {
                    language,
                    ..(*self).clone()
                })
            }
            AppAction::CookiePreferencesUpdated(prefs) => Rc::new(AppState {
                cookie_preferences: Some(prefs),
                ..(*self).clone()
            }),
        }
    }
}

pub type AppContext = UseReducerHandle<AppState>;

/// Active language from the shared context, English when rendered outside the provider.
#[hook]
pub fn use_language() -> Language {
    let app = use_context::<AppContext>();
    app.map(|ctx| ctx.language).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hebrew_is_the_only_rtl_locale() {
        assert_eq!(Language::He.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
        assert!(Language::He.is_rtl());
        assert!(!Language::En.is_rtl());
    }

    #[test]
    fn codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code("EN"), None);
    }

    #[test]
    fn language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::He).unwrap(), "\"he\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }

    #[test]
    fn set_language_switches_and_keeps_consent() {
        let prefs = CookiePreferences::accept_all();
        let state = Rc::new(AppState {
            language: Language::En,
            cookie_preferences: Some(prefs.clone()),
        });
        let next = state.reduce(AppAction::SetLanguage(Language::He));
        assert_eq!(next.language, Language::He);
        assert_eq!(next.cookie_preferences, Some(prefs));
    }

    #[test]
    fn setting_same_language_keeps_the_same_state() {
        let state = Rc::new(AppState::default());
        let next = state.clone().reduce(AppAction::SetLanguage(Language::En));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn cookie_update_is_recorded() {
        let state = Rc::new(AppState::default());
        let next = state.reduce(AppAction::CookiePreferencesUpdated(
            CookiePreferences::reject_all(),
        ));
        assert_eq!(next.cookie_preferences, Some(CookiePreferences::reject_all()));
        assert_eq!(next.language, Language::En);
    }
}
