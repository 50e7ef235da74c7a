use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::components::option_selector::OptionSelector;
use crate::config::{COMMISSION_MAX, COMMISSION_MIN};
use crate::leads::{BusinessEdit, BusinessLead, Category, PriceRange, RepEdit, RepLead};

#[derive(Properties, PartialEq)]
struct FieldProps {
    id: AttrValue,
    label: AttrValue,
    value: String,
    on_input: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    input_type: AttrValue,
    #[prop_or_default]
    min: Option<AttrValue>,
    #[prop_or_default]
    max: Option<AttrValue>,
}

#[function_component(Field)]
fn field(props: &FieldProps) -> Html {
    let oninput = props.on_input.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <div class="form-field">
            <label>{&props.label}</label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                min={props.min.clone()}
                max={props.max.clone()}
                value={props.value.clone()}
                {oninput}
                required=true
            />
        </div>
    }
}

fn on_form_submit(on_submit: &Callback<()>) -> Callback<SubmitEvent> {
    let on_submit = on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        on_submit.emit(());
    })
}

#[derive(Properties, PartialEq)]
pub struct BusinessFormProps {
    pub lead: BusinessLead,
    pub busy: bool,
    pub on_edit: Callback<BusinessEdit>,
    pub on_submit: Callback<()>,
}

#[function_component(BusinessForm)]
pub fn business_form(props: &BusinessFormProps) -> Html {
    let lead = &props.lead;
    let edit = |make: fn(String) -> BusinessEdit| props.on_edit.reform(make);

    html! {
        <div class="form-card">
            <div class="form-header">
                <div class="form-icon">{"🏢"}</div>
                <div>
                    <h3>{"Business Registration"}</h3>
                    <p>{"Connect with top sales talent"}</p>
                </div>
            </div>
            <form onsubmit={on_form_submit(&props.on_submit)}>
                <Field id="businessName" label="Business Name" value={lead.business_name.clone()}
                    on_input={edit(BusinessEdit::BusinessName)} />
                <Field id="product" label="Product/Service" value={lead.product.clone()}
                    on_input={edit(BusinessEdit::Product)} />

                <div class="form-field">
                    <label>{"Category"}</label>
                    <OptionSelector<Category>
                        value={lead.category}
                        on_change={props.on_edit.reform(BusinessEdit::Category)}
                        columns={2}
                        disabled={props.busy}
                    />
                </div>
                <div class="form-field">
                    <label>{"Price Range"}</label>
                    <OptionSelector<PriceRange>
                        value={lead.price_range}
                        on_change={props.on_edit.reform(BusinessEdit::PriceRange)}
                        columns={3}
                        disabled={props.busy}
                    />
                </div>

                <Field id="commission" label="Commission Offered (%)" input_type="number"
                    min={AttrValue::from(COMMISSION_MIN.to_string())}
                    max={AttrValue::from(COMMISSION_MAX.to_string())}
                    value={lead.commission.clone()}
                    on_input={edit(BusinessEdit::Commission)} />

                <div class="form-row">
                    <Field id="email" label="Email" input_type="email" value={lead.email.clone()}
                        on_input={edit(BusinessEdit::Email)} />
                    <Field id="phone" label="Phone" input_type="tel" value={lead.phone.clone()}
                        on_input={edit(BusinessEdit::Phone)} />
                </div>

                <button type="submit" class="submit-button" disabled={props.busy}>
                    { if props.busy { "Submitting..." } else { "Join RepLinker" } }
                </button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RepFormProps {
    pub lead: RepLead,
    pub busy: bool,
    pub on_edit: Callback<RepEdit>,
    pub on_submit: Callback<()>,
}

#[function_component(RepForm)]
pub fn rep_form(props: &RepFormProps) -> Html {
    let lead = &props.lead;
    let edit = |make: fn(String) -> RepEdit| props.on_edit.reform(make);

    html! {
        <div class="form-card">
            <div class="form-header">
                <div class="form-icon">{"👥"}</div>
                <div>
                    <h3>{"Sales Rep Registration"}</h3>
                    <p>{"Start earning commissions today"}</p>
                </div>
            </div>
            <form onsubmit={on_form_submit(&props.on_submit)}>
                <Field id="repName" label="Full Name" value={lead.rep_name.clone()}
                    on_input={edit(RepEdit::RepName)} />

                <div class="form-field">
                    <label>{"Category Preference"}</label>
                    <OptionSelector<Category>
                        value={lead.category_preference}
                        on_change={props.on_edit.reform(RepEdit::CategoryPreference)}
                        columns={2}
                        disabled={props.busy}
                    />
                </div>
                <div class="form-field">
                    <label>{"Preferred Price Range"}</label>
                    <OptionSelector<PriceRange>
                        value={lead.preferred_price_range}
                        on_change={props.on_edit.reform(RepEdit::PreferredPriceRange)}
                        columns={3}
                        disabled={props.busy}
                    />
                </div>

                <div class="form-row">
                    <Field id="repEmail" label="Email" input_type="email" value={lead.email.clone()}
                        on_input={edit(RepEdit::Email)} />
                    <Field id="repPhone" label="Phone" input_type="tel" value={lead.phone.clone()}
                        on_input={edit(RepEdit::Phone)} />
                </div>

                <button type="submit" class="submit-button" disabled={props.busy}>
                    { if props.busy { "Submitting..." } else { "Start Selling" } }
                </button>
            </form>
        </div>
    }
}

#[function_component(Placeholder)]
pub fn placeholder() -> Html {
    html! {
        <div class="placeholder-card">
            <div class="placeholder-icon">{"🎯"}</div>
            <h3>{"Ready to Get Started?"}</h3>
            <p>{"Choose your path and join the RepLinker community"}</p>
        </div>
    }
}

#[function_component(SuccessCard)]
pub fn success_card() -> Html {
    html! {
        <div class="form-card success-card">
            <div class="success-icon">{"✓"}</div>
            <h3>{"You're in!"}</h3>
            <p>{"RepLinker will notify you when matched."}</p>
        </div>
    }
}
