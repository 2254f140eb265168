use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// `true` once the referenced element has entered the viewport. Never flips back.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let seen = use_state(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;
                if let Some(element) = node.cast::<Element>() {
                    observer = observe_once(&element, threshold, seen.setter());
                    if observer.is_none() {
                        // No observer support: show everything straight away.
                        seen.set(true);
                    }
                }
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *seen
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    threshold: f64,
    seen: UseStateSetter<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let hit = entries
            .iter()
            .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
        if hit {
            seen.set(true);
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.2)]
    pub threshold: f64,
    /// Stagger for items in a row.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and lifts its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let seen = use_in_view(node.clone(), props.threshold);
    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms", props.delay_ms));

    html! {
        <div ref={node} class={classes!("reveal", seen.then_some("visible"), props.class.clone())} {style}>
            { for props.children.iter() }
        </div>
    }
}
