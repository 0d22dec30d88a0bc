use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or(AttrValue::Static("2025"))]
    pub year: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &Props) -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <a href="/" class="brand">{ "ThriftFindr" }</a>
                <p class="copyright">{ format!("© {} ThriftFindr. All rights reserved.", props.year) }</p>
            </div>
            <nav aria-label="Legal" class="footer-links">
                <a href="#privacy">{ "Privacy Policy" }</a>
                <a href="#terms">{ "Terms" }</a>
            </nav>
        </footer>
    }
}
