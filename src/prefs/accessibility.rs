use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

use crate::config;
use crate::storage::Record;

pub const SETTINGS_VERSION: u32 = 1;

fn current_version() -> u32 {
    SETTINGS_VERSION
}

/// The boolean switches exposed by the accessibility menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Toggle {
    Contrast,
    Invert,
    Monochrome,
    HighlightHeadings,
    HighlightLinks,
    ReadableFont,
}

impl Toggle {
    /// Menu order.
    pub const ALL: [Toggle; 6] = [
        Toggle::Contrast,
        Toggle::Invert,
        Toggle::Monochrome,
        Toggle::HighlightHeadings,
        Toggle::HighlightLinks,
        Toggle::ReadableFont,
    ];

    /// Class added to `<html>` while the toggle is on.
    pub fn class_name(self) -> &'static str {
        match self {
            Toggle::Contrast => "accessibility-contrast",
            Toggle::Invert => "accessibility-invert",
            Toggle::Monochrome => "accessibility-monochrome",
            Toggle::HighlightHeadings => "accessibility-highlight-headings",
            Toggle::HighlightLinks => "accessibility-highlight-links",
            Toggle::ReadableFont => "accessibility-readable-font",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    // Blobs written before versioning carry no version field; they have the same shape.
    #[serde(default = "current_version")]
    pub version: u32,
    pub contrast: bool,
    pub monochrome: bool,
    pub invert: bool,
    pub highlight_headings: bool,
    pub highlight_links: bool,
    pub readable_font: bool,
    pub zoom: u16,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            contrast: false,
            monochrome: false,
            invert: false,
            highlight_headings: false,
            highlight_links: false,
            readable_font: false,
            zoom: config::ZOOM_DEFAULT,
        }
    }
}

impl AccessibilitySettings {
    pub fn get(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Contrast => self.contrast,
            Toggle::Invert => self.invert,
            Toggle::Monochrome => self.monochrome,
            Toggle::HighlightHeadings => self.highlight_headings,
            Toggle::HighlightLinks => self.highlight_links,
            Toggle::ReadableFont => self.readable_font,
        }
    }

    fn slot(&mut self, toggle: Toggle) -> &mut bool {
        match toggle {
            Toggle::Contrast => &mut self.contrast,
            Toggle::Invert => &mut self.invert,
            Toggle::Monochrome => &mut self.monochrome,
            Toggle::HighlightHeadings => &mut self.highlight_headings,
            Toggle::HighlightLinks => &mut self.highlight_links,
            Toggle::ReadableFont => &mut self.readable_font,
        }
    }

    pub fn toggled(&self, toggle: Toggle) -> Self {
        let mut next = self.clone();
        let slot = next.slot(toggle);
        *slot = !*slot;
        next
    }

    /// Zoom moved by `delta` percentage points, clamped to the allowed range.
    pub fn zoomed(&self, delta: i16) -> Self {
        let zoom = (i32::from(self.zoom) + i32::from(delta))
            .clamp(i32::from(config::ZOOM_MIN), i32::from(config::ZOOM_MAX));
        Self {
            zoom: zoom as u16,
            ..self.clone()
        }
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom != config::ZOOM_DEFAULT
    }

    /// `(class, enabled)` for every root marker.
    pub fn markers(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        Toggle::ALL
            .into_iter()
            .map(move |t| (t.class_name(), self.get(t)))
    }

    pub fn font_size(&self) -> String {
        format!("{}%", self.zoom)
    }
}

impl Record for AccessibilitySettings {
    const KEY: &'static str = config::ACCESSIBILITY_KEY;

    fn validate(&self) -> Result<(), String> {
        if self.version != SETTINGS_VERSION {
            return Err(format!("unsupported settings version {}", self.version));
        }
        if !(config::ZOOM_MIN..=config::ZOOM_MAX).contains(&self.zoom) {
            return Err(format!(
                "zoom {} outside {}..={}",
                self.zoom,
                config::ZOOM_MIN,
                config::ZOOM_MAX
            ));
        }
        Ok(())
    }
}

/// Push the settings onto `<html>`: one class per enabled toggle and the root font size.
pub fn apply(settings: &AccessibilitySettings) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    for (class, enabled) in settings.markers() {
        let result = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        if result.is_err() {
            log::warn!("Could not update root class {}", class);
        }
    }

    if let Ok(root) = root.dyn_into::<HtmlElement>() {
        if root
            .style()
            .set_property("font-size", &settings.font_size())
            .is_err()
        {
            log::warn!("Could not set root font size");
        }
    }
}

/// Global rules keyed by the root markers above.
pub const ROOT_MARKER_CSS: &str = r#"
html.accessibility-contrast { filter: contrast(1.5); }
html.accessibility-monochrome { filter: grayscale(100%); }
html.accessibility-invert { filter: invert(1); background-color: #111; }
html.accessibility-invert img { filter: invert(1); }

html.accessibility-readable-font body,
html.accessibility-readable-font button,
html.accessibility-readable-font input,
html.accessibility-readable-font textarea,
html.accessibility-readable-font select {
    font-family: Arial, "Helvetica Neue", Helvetica, sans-serif !important;
    letter-spacing: 0.5px;
}

html.accessibility-highlight-links a {
    background-color: #fef08a !important;
    color: #000 !important;
    padding: 2px 4px;
    border-radius: 3px;
    text-decoration: underline !important;
}

html.accessibility-highlight-headings h1,
html.accessibility-highlight-headings h2,
html.accessibility-highlight-headings h3,
html.accessibility-highlight-headings h4,
html.accessibility-highlight-headings h5,
html.accessibility-highlight-headings h6 {
    background-color: #dbeafe !important;
    color: #1e3a8a !important;
    padding: 4px 8px;
    border-radius: 4px;
    display: inline-block;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{decode, encode, StorageError};
    use pretty_assertions::assert_eq;

    #[test]
    fn zoom_is_clamped_at_both_ends() {
        let mut s = AccessibilitySettings::default();
        for _ in 0..10 {
            s = s.zoomed(config::ZOOM_STEP);
        }
        assert_eq!(s.zoom, 150);
        assert_eq!(s.zoomed(config::ZOOM_STEP).zoom, 150);

        for _ in 0..20 {
            s = s.zoomed(-config::ZOOM_STEP);
        }
        assert_eq!(s.zoom, 80);
        assert_eq!(s.zoomed(-config::ZOOM_STEP).zoom, 80);
    }

    #[test]
    fn zoom_steps_by_ten() {
        let s = AccessibilitySettings::default().zoomed(10);
        assert_eq!(s.zoom, 110);
        assert!(s.is_zoomed());
        assert_eq!(s.font_size(), "110%");
        assert!(!s.zoomed(-10).is_zoomed());
    }

    #[test]
    fn toggles_flip_only_their_own_flag() {
        let base = AccessibilitySettings::default();
        for toggle in Toggle::ALL {
            let on = base.toggled(toggle);
            assert!(on.get(toggle));
            for other in Toggle::ALL.into_iter().filter(|t| *t != toggle) {
                assert!(!on.get(other), "{:?} leaked into {:?}", toggle, other);
            }
            assert_eq!(on.toggled(toggle), base);
        }
    }

    #[test]
    fn reset_yields_defaults_from_any_state() {
        let busy = AccessibilitySettings::default()
            .toggled(Toggle::Contrast)
            .toggled(Toggle::ReadableFont)
            .zoomed(30);
        assert_ne!(busy, AccessibilitySettings::default());
        let reset = AccessibilitySettings::default();
        assert_eq!(reset.zoom, 100);
        assert!(Toggle::ALL.into_iter().all(|t| !reset.get(t)));
        assert!(reset.markers().all(|(_, enabled)| !enabled));
    }

    #[test]
    fn markers_use_kebab_case_classes() {
        let s = AccessibilitySettings::default().toggled(Toggle::HighlightHeadings);
        let enabled: Vec<_> = s.markers().filter(|(_, on)| *on).map(|(c, _)| c).collect();
        assert_eq!(enabled, vec!["accessibility-highlight-headings"]);
    }

    #[test]
    fn accepts_legacy_unversioned_blob() {
        let raw = r#"{"contrast":true,"monochrome":false,"invert":false,"highlightHeadings":false,"highlightLinks":true,"readableFont":false,"zoom":120}"#;
        let s: AccessibilitySettings = decode(raw).unwrap();
        assert_eq!(s.version, SETTINGS_VERSION);
        assert!(s.contrast);
        assert!(s.highlight_links);
        assert_eq!(s.zoom, 120);
    }

    #[test]
    fn round_trips_through_storage_encoding() {
        let s = AccessibilitySettings::default().toggled(Toggle::Invert).zoomed(-10);
        let raw = encode(&s).unwrap();
        assert!(raw.contains("\"highlightHeadings\":false"));
        assert_eq!(decode::<AccessibilitySettings>(&raw).unwrap(), s);
    }

    #[test]
    fn rejects_out_of_range_zoom() {
        let raw = r#"{"version":1,"contrast":false,"monochrome":false,"invert":false,"highlightHeadings":false,"highlightLinks":false,"readableFont":false,"zoom":400}"#;
        assert!(matches!(
            decode::<AccessibilitySettings>(raw),
            Err(StorageError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_unknown_version_and_garbage() {
        let raw = r#"{"version":7,"contrast":false,"monochrome":false,"invert":false,"highlightHeadings":false,"highlightLinks":false,"readableFont":false,"zoom":100}"#;
        assert!(matches!(
            decode::<AccessibilitySettings>(raw),
            Err(StorageError::Invalid(_))
        ));
        assert!(matches!(
            decode::<AccessibilitySettings>("{not json"),
            Err(StorageError::Corrupt(_))
        ));
        assert!(matches!(
            decode::<AccessibilitySettings>(r#"{"zoom":100}"#),
            Err(StorageError::Corrupt(_))
        ));
    }
}
