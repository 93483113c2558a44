use yew::prelude::*;

use crate::assets::asset_path;

/// Pool backdrop with the navy overlay, pinned behind the page content.
#[function_component(Background)]
pub fn background() -> Html {
    let image = format!("background-image: url('{}');", asset_path("/assets/HeaderBackground.svg"));

    html! {
        <div class="page-background">
            <div class="page-background__image" style={image}></div>
            <div class="page-background__overlay"></div>
            <style>
                {r#"
                .page-background {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    background: #0d3b66;
                }
                .page-background__image {
                    position: absolute;
                    inset: 0;
                    background-position: center;
                    background-size: cover;
                    background-repeat: no-repeat;
                }
                .page-background__overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, #09102447, #091024);
                    opacity: 0.6;
                }
                "#}
            </style>
        </div>
    }
}
