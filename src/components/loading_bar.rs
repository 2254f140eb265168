use yew::prelude::*;

#[function_component(LoadingBar)]
pub fn loading_bar() -> Html {
    html! {
        <div class="loading-bar" aria-hidden="true">
            <style>
                {r#"
                .loading-bar {
                    width: 12rem;
                    height: 0.25rem;
                    margin: 2rem auto 0;
                    background: #d1fae5;
                    border-radius: 999px;
                    overflow: hidden;
                }
                .loading-bar div {
                    height: 100%;
                    border-radius: 999px;
                    background: linear-gradient(to right, #6ee7b7, #10b981);
                    animation: loading-sweep 2s ease-in-out infinite;
                }
                @keyframes loading-sweep {
                    from { width: 0%; transform: translateX(-100%); }
                    to { width: 100%; transform: translateX(0); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .loading-bar div { animation: none; width: 100%; }
                }
                "#}
            </style>
            <div></div>
        </div>
    }
}
