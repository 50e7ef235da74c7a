use yew::prelude::*;

use crate::leads::LeadKind;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_choose: Callback<LeadKind>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_business = props.on_choose.reform(|_: MouseEvent| LeadKind::Business);
    let on_rep = props.on_choose.reform(|_: MouseEvent| LeadKind::Rep);

    html! {
        <div class="hero">
            <div class="hero-copy">
                <div class="hero-badge">
                    <span class="badge-icon">{"📈"}</span>
                    <span>{"AI-Powered Sales Matching"}</span>
                </div>
                <h1>
                    {"Grow Sales. "}
                    <span class="text-gradient">{"Pay Only on Commission."}</span>
                </h1>
                <p class="hero-subtitle">
                    {"RepLinker instantly connects ambitious businesses with motivated sales reps. No upfront cost, just results that drive your growth forward."}
                </p>
            </div>

            <div class="hero-actions">
                <button class="hero-cta" onclick={on_business}>
                    {"🏢 I'm a Business"}
                </button>
                <button class="hero-cta outline" onclick={on_rep}>
                    {"👥 I'm a Sales Rep"}
                </button>
            </div>

            <div class="hero-stats">
                <div class="stat">
                    <div class="stat-value">{"500+"}</div>
                    <div class="stat-label">{"Active Businesses"}</div>
                </div>
                <div class="stat">
                    <div class="stat-value">{"2K+"}</div>
                    <div class="stat-label">{"Sales Reps"}</div>
                </div>
                <div class="stat">
                    <div class="stat-value">{"$2M+"}</div>
                    <div class="stat-label">{"Sales Generated"}</div>
                </div>
            </div>
        </div>
    }
}
