use yew::prelude::*;

use crate::leads::Choice;

/// Picking a value from outside the list keeps the current one, so the grid
/// can never end up with nothing selected.
pub fn pick<T: Choice>(options: &[T], current: T, candidate: T) -> T {
    if options.contains(&candidate) {
        candidate
    } else {
        current
    }
}

#[derive(Properties, PartialEq)]
pub struct OptionSelectorProps<T: Choice> {
    pub value: T,
    pub on_change: Callback<T>,
    #[prop_or(2)]
    pub columns: u8,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(OptionSelector)]
pub fn option_selector<T: Choice>(props: &OptionSelectorProps<T>) -> Html {
    let grid_class = format!("option-grid cols-{}", props.columns);

    html! {
        <div class={grid_class}>
            { for T::ALL.iter().map(|&option| {
                let on_click = {
                    let on_change = props.on_change.clone();
                    let current = props.value;
                    Callback::from(move |_: MouseEvent| {
                        on_change.emit(pick(T::ALL, current, option));
                    })
                };
                html! {
                    <button
                        type="button"
                        key={option.label()}
                        class={classes!("option-toggle", (option == props.value).then(|| "selected"))}
                        onclick={on_click}
                        disabled={props.disabled}
                    >
                        {option.label()}
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::{Category, PriceRange};

    #[test]
    fn picking_a_listed_option_replaces_the_value() {
        for &candidate in Category::ALL {
            assert_eq!(pick(Category::ALL, Category::Tech, candidate), candidate);
        }
        for &candidate in PriceRange::ALL {
            assert_eq!(pick(PriceRange::ALL, PriceRange::From200, candidate), candidate);
        }
    }

    #[test]
    fn reselecting_keeps_the_selection() {
        assert_eq!(pick(Category::ALL, Category::Food, Category::Food), Category::Food);
    }

    #[test]
    fn option_outside_a_narrowed_list_is_ignored() {
        let narrowed = &[PriceRange::From500, PriceRange::From1000];
        assert_eq!(pick(narrowed, PriceRange::From500, PriceRange::Under100), PriceRange::From500);
    }

    #[test]
    fn exactly_one_option_is_selected_after_any_pick() {
        let mut value = Category::default();
        for &candidate in Category::ALL.iter().rev() {
            value = pick(Category::ALL, value, candidate);
            let selected = Category::ALL.iter().filter(|&&c| c == value).count();
            assert_eq!(selected, 1);
        }
        assert_eq!(value, Category::RealEstate);
    }
}
