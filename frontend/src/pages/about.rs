use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub on_back: Callback<()>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let on_back = props.on_back.reform(|_: MouseEvent| ());

    html! {
        <section class="panel-page">
            <div class="panel-card">
                <div class="panel-icon">{"🏢"}</div>
                <h2>{"About RepLinker"}</h2>
                <div class="panel-copy">
                    <p>{"RepLinker is a commission-only SaaS platform that connects businesses with sales representatives."}</p>
                    <p>{"Businesses sign up and list their products/services with details, price ranges, and target customers."}</p>
                    <p>{"Sales reps sign up, select the types of products or price ranges they want to sell, and input their experience."}</p>
                    <p>{"RepLinker automatically matches businesses to the right sales reps."}</p>
                    <p>{"This gives businesses faster access to closers, while sales reps get unlimited commission-only opportunities."}</p>
                </div>
                <button class="primary-button" onclick={on_back}>
                    {"Back to Home"}
                </button>
            </div>
        </section>
    }
}
