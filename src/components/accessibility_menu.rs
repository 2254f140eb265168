use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

use crate::config;
use crate::content::{for_language, AccessibilityMenuContent};
use crate::prefs::accessibility::{self, AccessibilitySettings, Toggle};
use crate::state::use_language;
use crate::storage;
use crate::Route;

#[derive(Clone, Copy, PartialEq)]
enum MenuOption {
    Switch(Toggle),
    ZoomIn,
    ZoomOut,
}

const OPTIONS: [MenuOption; 8] = [
    MenuOption::Switch(Toggle::Contrast),
    MenuOption::Switch(Toggle::Invert),
    MenuOption::Switch(Toggle::Monochrome),
    MenuOption::Switch(Toggle::HighlightHeadings),
    MenuOption::Switch(Toggle::HighlightLinks),
    MenuOption::Switch(Toggle::ReadableFont),
    MenuOption::ZoomIn,
    MenuOption::ZoomOut,
];

impl MenuOption {
    fn label(self, content: &AccessibilityMenuContent) -> &'static str {
        match self {
            MenuOption::Switch(Toggle::Contrast) => content.contrast,
            MenuOption::Switch(Toggle::Invert) => content.invert,
            MenuOption::Switch(Toggle::Monochrome) => content.monochrome,
            MenuOption::Switch(Toggle::HighlightHeadings) => content.highlight_headings,
            MenuOption::Switch(Toggle::HighlightLinks) => content.highlight_links,
            MenuOption::Switch(Toggle::ReadableFont) => content.readable_font,
            MenuOption::ZoomIn => content.increase_text,
            MenuOption::ZoomOut => content.decrease_text,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            MenuOption::Switch(Toggle::Contrast) => "◐",
            MenuOption::Switch(Toggle::Invert) => "☾",
            MenuOption::Switch(Toggle::Monochrome) => "🎨",
            MenuOption::Switch(Toggle::HighlightHeadings) => "H",
            MenuOption::Switch(Toggle::HighlightLinks) => "🔗",
            MenuOption::Switch(Toggle::ReadableFont) => "Aa",
            MenuOption::ZoomIn => "A+",
            MenuOption::ZoomOut => "A−",
        }
    }

    fn is_active(self, settings: &AccessibilitySettings) -> bool {
        match self {
            MenuOption::Switch(toggle) => settings.get(toggle),
            MenuOption::ZoomIn | MenuOption::ZoomOut => settings.is_zoomed(),
        }
    }

    fn apply(self, settings: &AccessibilitySettings) -> AccessibilitySettings {
        match self {
            MenuOption::Switch(toggle) => settings.toggled(toggle),
            MenuOption::ZoomIn => settings.zoomed(config::ZOOM_STEP),
            MenuOption::ZoomOut => settings.zoomed(-config::ZOOM_STEP),
        }
    }
}

/// Floating trigger plus the bottom sheet of display options.
#[function_component(AccessibilityMenu)]
pub fn accessibility_menu() -> Html {
    let language = use_language();
    let content = &for_language(language).accessibility_menu;
    let settings = use_state(AccessibilitySettings::default);
    let is_open = use_state(|| false);
    let navigator = use_navigator();

    // Restore and apply persisted settings once.
    {
        let settings = settings.clone();
        use_effect_with_deps(
            move |_| {
                let stored = storage::load_or_warn::<AccessibilitySettings>().unwrap_or_default();
                accessibility::apply(&stored);
                settings.set(stored);
                || ()
            },
            (),
        );
    }

    {
        let is_open = is_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                is_open.set(false);
            }
        });
    }

    let commit = {
        let settings = settings.clone();
        move |next: AccessibilitySettings| {
            accessibility::apply(&next);
            storage::save_or_warn(&next);
            settings.set(next);
        }
    };

    let open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(true))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };
    let reset = {
        let commit = commit.clone();
        Callback::from(move |_: MouseEvent| commit(AccessibilitySettings::default()))
    };
    let to_statement = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_open.set(false);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Accessibility);
            }
        })
    };
    let close_backdrop = close.clone();
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <>
            <style>
                {r#"
                .a11y-trigger {
                    position: fixed;
                    bottom: 1rem;
                    inset-inline-start: 1rem;
                    z-index: 9998;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    border: none;
                    background: #0f172a;
                    color: #fff;
                    font-size: 1.6rem;
                    cursor: pointer;
                    box-shadow: 0 6px 18px rgba(0, 0, 0, 0.25);
                    transition: background 0.2s ease;
                }
                .a11y-trigger:hover { background: #334155; }
                .a11y-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 9999;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                }
                .a11y-sheet {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    max-height: 80vh;
                    overflow-y: auto;
                    background: #fff;
                    color: #111827;
                    border-radius: 1rem 1rem 0 0;
                    box-shadow: 0 -10px 40px rgba(0, 0, 0, 0.3);
                    animation: a11y-slide-up 0.3s ease-out;
                }
                @keyframes a11y-slide-up {
                    from { transform: translateY(100%); }
                    to { transform: translateY(0); }
                }
                .a11y-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem;
                    border-bottom: 1px solid #e5e7eb;
                }
                .a11y-header h2 { margin: 0; font-size: 1.125rem; }
                .a11y-close {
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                .a11y-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 0.75rem;
                    padding: 1rem;
                }
                @media (min-width: 640px) {
                    .a11y-grid { grid-template-columns: repeat(3, 1fr); }
                }
                .a11y-option {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    border: 2px solid #e5e7eb;
                    background: #f9fafb;
                    cursor: pointer;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .a11y-option .glyph { font-size: 1.6rem; }
                .a11y-option.active {
                    background: #d1fae5;
                    border-color: #10b981;
                    color: #064e3b;
                }
                .a11y-footer {
                    display: flex;
                    gap: 0.75rem;
                    padding: 1rem;
                    border-top: 1px solid #e5e7eb;
                }
                .a11y-footer button {
                    flex: 1;
                    padding: 0.6rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    background: #fff;
                    cursor: pointer;
                }
                "#}
            </style>
            <button class="a11y-trigger" onclick={open} aria-label={content.trigger_label}>
                {"♿"}
            </button>
            if *is_open {
                <div class="a11y-backdrop" onclick={close_backdrop} dir={language.dir()}>
                    <div class="a11y-sheet" role="dialog" aria-modal="true" aria-label={content.title} onclick={keep_open}>
                        <div class="a11y-header">
                            <h2>{content.title}</h2>
                            <button class="a11y-close" onclick={close} aria-label={content.close_label}>{"✕"}</button>
                        </div>
                        <div class="a11y-grid">
                            { for OPTIONS.iter().map(|option| {
                                let option = *option;
                                let onclick = {
                                    let settings = settings.clone();
                                    let commit = commit.clone();
                                    Callback::from(move |_: MouseEvent| commit(option.apply(&settings)))
                                };
                                let active = option.is_active(&settings);
                                html! {
                                    <button
                                        class={classes!("a11y-option", active.then_some("active"))}
                                        aria-pressed={active.to_string()}
                                        {onclick}
                                    >
                                        <span class="glyph" aria-hidden="true">{option.glyph()}</span>
                                        <span>{option.label(content)}</span>
                                    </button>
                                }
                            }) }
                        </div>
                        <div class="a11y-footer">
                            <button onclick={reset}>{"↺ "}{content.reset}</button>
                            <button onclick={to_statement}>{"📄 "}{content.statement}</button>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}
