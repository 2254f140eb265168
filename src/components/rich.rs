use yew::prelude::*;

use crate::config;
use crate::content::{brand_spans, Rich, Span};

fn span(span: &Span) -> Html {
    match span {
        Span::Text(text) => html! { {*text} },
        Span::Brand => html! { <strong class="brand-mark">{config::BRAND}</strong> },
    }
}

/// Render a sentence with the product name highlighted.
pub fn rich(spans: Rich) -> Html {
    spans.iter().map(span).collect::<Html>()
}

/// Plain text with each mention of the product name highlighted.
pub fn highlight(text: &'static str) -> Html {
    brand_spans(text).iter().map(span).collect::<Html>()
}
