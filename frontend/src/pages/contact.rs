use yew::prelude::*;

const CONTACT_EMAIL: &str = "contact@replinker.com";

struct SocialLink {
    network: &'static str,
    href: &'static str,
    handle: &'static str,
}

const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { network: "Twitter", href: "https://twitter.com/RepLinker", handle: "@RepLinker" },
    SocialLink { network: "Facebook", href: "https://facebook.com/RepLinker", handle: "RepLinker" },
    SocialLink { network: "Instagram", href: "https://instagram.com/RepLinker", handle: "@RepLinker" },
];

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub on_back: Callback<()>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let on_back = props.on_back.reform(|_: MouseEvent| ());

    html! {
        <section class="panel-page">
            <div class="panel-card">
                <div class="panel-icon">{"✉"}</div>
                <h2>{"Contact Us"}</h2>
                <div class="contact-list">
                    <div class="contact-row">
                        <span class="contact-label">{"Email:"}</span>
                        <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                    </div>
                    { for SOCIAL_LINKS.iter().map(|link| html! {
                        <div class="contact-row" key={link.network}>
                            <span class="contact-label">{format!("{}:", link.network)}</span>
                            <a href={link.href} target="_blank" rel="noopener noreferrer">
                                {link.handle}
                            </a>
                        </div>
                    }) }
                </div>
                <button class="primary-button" onclick={on_back}>
                    {"Back to Home"}
                </button>
            </div>
        </section>
    }
}
