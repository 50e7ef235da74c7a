use gloo_timers::callback::Timeout;
use log::{error, info};
use web_sys::window;
use yew::prelude::*;

use crate::api::submit::{submit_lead, SubmitError};
use crate::components::nav::Nav;
use crate::config;
use crate::landing_state::{Action, Effect, LandingState, Screen};
use crate::leads::LeadKind;
use crate::pages::about::About;
use crate::pages::contact::Contact;
use crate::pages::hero::Hero;
use crate::pages::lead_forms::{BusinessForm, Placeholder, RepForm, SuccessCard};

const STYLES: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: #0f1719;
        color: #f2f7f7;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .top-nav {
        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
        backdrop-filter: blur(6px);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        background: none;
        border: none;
        color: inherit;
        cursor: pointer;
    }
    .logo-mark {
        width: 2rem;
        height: 2rem;
        border-radius: 0.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        background: linear-gradient(135deg, #14b8a6, #0d9488);
    }
    .logo-text { display: flex; flex-direction: column; text-align: left; }
    .logo-text .brand { font-size: 1.25rem; font-weight: 700; }
    .logo-text .tagline { font-size: 0.75rem; color: #8fa3a6; }
    .nav-right { display: flex; gap: 2rem; }
    .nav-link {
        background: none;
        border: none;
        color: #8fa3a6;
        cursor: pointer;
        font-size: 1rem;
    }
    .nav-link:hover { color: #f2f7f7; }
    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
    .burger-menu span { display: block; width: 22px; height: 2px; margin: 4px 0; background: #f2f7f7; }
    .landing-main { max-width: 1200px; margin: 0 auto; padding: 3rem 1.5rem; }
    .home-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
        min-height: 80vh;
    }
    .hero h1 { font-size: 3.5rem; line-height: 1.1; margin: 1.5rem 0; }
    .text-gradient {
        background: linear-gradient(45deg, #2dd4bf, #5eead4);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-badge {
        display: inline-flex;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        border-radius: 999px;
        background: rgba(255, 255, 255, 0.06);
        font-size: 0.875rem;
        color: #8fa3a6;
    }
    .hero-subtitle { font-size: 1.25rem; color: #8fa3a6; line-height: 1.6; }
    .hero-actions { display: flex; gap: 1rem; margin-top: 2rem; }
    .hero-cta, .primary-button, .submit-button {
        padding: 1rem 2rem;
        border-radius: 1rem;
        border: none;
        font-weight: 600;
        font-size: 1.05rem;
        color: #0f1719;
        background: linear-gradient(135deg, #14b8a6, #0d9488);
        cursor: pointer;
    }
    .hero-cta.outline {
        background: transparent;
        color: #f2f7f7;
        border: 1px solid rgba(45, 212, 191, 0.3);
    }
    .hero-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; padding-top: 2rem; }
    .stat { text-align: center; }
    .stat-value { font-size: 1.5rem; font-weight: 700; color: #2dd4bf; }
    .stat-label { font-size: 0.875rem; color: #8fa3a6; }
    .form-column { display: flex; flex-direction: column; align-items: center; }
    .form-card, .placeholder-card, .panel-card {
        width: 100%;
        max-width: 32rem;
        padding: 2rem;
        border-radius: 1.5rem;
        background: #162224;
        border: 1px solid rgba(255, 255, 255, 0.06);
        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
    }
    .placeholder-card, .success-card, .panel-card { text-align: center; }
    .form-header { display: flex; gap: 1rem; align-items: center; margin-bottom: 1.5rem; }
    .form-header h3 { margin: 0; }
    .form-header p { margin: 0; color: #8fa3a6; }
    .form-field { display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 1rem; flex: 1; }
    .form-field input {
        padding: 0.75rem;
        border-radius: 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: #0f1719;
        color: inherit;
    }
    .form-row { display: flex; gap: 1rem; }
    .option-grid { display: grid; gap: 0.5rem; }
    .option-grid.cols-2 { grid-template-columns: repeat(2, 1fr); }
    .option-grid.cols-3 { grid-template-columns: repeat(3, 1fr); }
    .option-toggle {
        padding: 0.75rem;
        border-radius: 0.75rem;
        border: none;
        font-size: 0.875rem;
        font-weight: 500;
        background: rgba(255, 255, 255, 0.06);
        color: #f2f7f7;
        cursor: pointer;
    }
    .option-toggle.selected {
        background: linear-gradient(135deg, #14b8a6, #0d9488);
        color: #0f1719;
    }
    .submit-button { width: 100%; margin-top: 0.5rem; }
    .submit-button:disabled { opacity: 0.6; cursor: progress; }
    .success-icon, .panel-icon, .placeholder-icon { font-size: 2.5rem; margin-bottom: 1rem; }
    .back-to-options { margin-top: 1rem; }
    .ghost-button { background: none; border: none; color: #8fa3a6; cursor: pointer; }
    .ghost-button:hover { color: #f2f7f7; }
    .panel-page { display: flex; justify-content: center; }
    .panel-card { max-width: 56rem; padding: 3rem; }
    .panel-copy p { font-size: 1.125rem; color: #8fa3a6; line-height: 1.7; }
    .contact-list { display: flex; flex-direction: column; gap: 1.5rem; margin: 2rem 0; }
    .contact-row { display: flex; justify-content: center; gap: 0.75rem; font-size: 1.125rem; }
    .contact-label { color: #8fa3a6; }
    .contact-row a { color: #2dd4bf; }
    @media (max-width: 900px) {
        .home-grid { grid-template-columns: 1fr; }
        .hero h1 { font-size: 2.5rem; }
        .burger-menu { display: block; }
        .nav-right { display: none; }
        .nav-right.mobile-menu-open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 4.5rem;
            right: 1.5rem;
            padding: 1rem;
            border-radius: 1rem;
            background: #162224;
        }
        .form-row { flex-direction: column; gap: 0; }
    }
"#;

/// The user only ever sees the generic retry message; the cause goes to the log.
fn settled(result: Result<(), SubmitError>) -> Action {
    Action::SubmitSettled(result.map_err(|_| config::SUBMIT_FAILURE_MESSAGE.to_string()))
}

pub struct LandingPage {
    state: LandingState,
    reset_timer: Option<Timeout>,
}

impl Component for LandingPage {
    type Message = Action;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: LandingState::default(),
            reset_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let before = self.state.screen;
        let effect = self.state.apply(msg);
        if self.state.screen != before {
            info!("Landing view {:?} -> {:?}", before, self.state.screen);
        }

        match effect {
            Effect::None => {}
            Effect::Send(lead) => {
                gloo_console::log!("Submitting lead:", format!("{:?}", lead));
                ctx.link().send_future(async move {
                    let result = submit_lead(&lead).await;
                    match &result {
                        Ok(()) => info!("Lead submitted ({:?})", lead.kind()),
                        Err(e) => error!("Lead submission failed: {}", e),
                    }
                    settled(result)
                });
            }
            Effect::ScheduleReset => {
                let link = ctx.link().clone();
                self.reset_timer = Some(Timeout::new(config::SUCCESS_RESET_DELAY_MS, move || {
                    link.send_message(Action::ResetAfterSuccess);
                }));
            }
            Effect::Alert(message) => {
                if let Some(window) = window() {
                    let _ = window.alert_with_message(&message);
                }
            }
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.reset_timer.take().is_some() {
            info!("Landing page torn down, dropped pending return to Home");
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_about = link.callback(|_| Action::ShowAbout);
        let on_contact = link.callback(|_| Action::ShowContact);
        let on_home = link.callback(|_| Action::BackHome);

        let body = match self.state.screen {
            Screen::About => html! { <About on_back={on_home.clone()} /> },
            Screen::Contact => html! { <Contact on_back={on_home.clone()} /> },
            _ => self.home_view(ctx),
        };

        html! {
            <div class="landing-page">
                <style>{STYLES}</style>
                <Nav {on_about} {on_contact} {on_home} />
                <main class="landing-main">
                    { body }
                </main>
            </div>
        }
    }
}

impl LandingPage {
    fn home_view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let busy = self.state.is_busy();

        let card = match (self.state.screen, self.state.active_form()) {
            (Screen::Success(_), _) => html! { <SuccessCard /> },
            (_, Some(LeadKind::Business)) => html! {
                <BusinessForm
                    lead={self.state.business.clone()}
                    {busy}
                    on_edit={link.callback(Action::EditBusiness)}
                    on_submit={link.callback(|_| Action::Submit)}
                />
            },
            (_, Some(LeadKind::Rep)) => html! {
                <RepForm
                    lead={self.state.rep.clone()}
                    {busy}
                    on_edit={link.callback(Action::EditRep)}
                    on_submit={link.callback(|_| Action::Submit)}
                />
            },
            (_, None) => html! { <Placeholder /> },
        };

        html! {
            <div class="home-grid">
                <Hero on_choose={link.callback(Action::OpenForm)} />
                <div class="form-column">
                    { card }
                    if matches!(self.state.screen, Screen::Form(_)) {
                        <div class="back-to-options">
                            <button class="ghost-button" onclick={link.callback(|_| Action::BackToOptions)}>
                                {"← Back to options"}
                            </button>
                        </div>
                    }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::{BusinessLead, Lead};

    #[test]
    fn failure_surfaces_generic_message() {
        let action = settled(Err(SubmitError::Network("TypeError: Failed to fetch".to_string())));
        assert_eq!(
            action,
            Action::SubmitSettled(Err(
                "There was an error submitting your form. Please try again.".to_string()
            ))
        );
    }

    #[test]
    fn settled_failure_alerts_and_success_schedules_reset() {
        let mut state = LandingState::default();
        state.apply(Action::OpenForm(LeadKind::Business));
        state.business = BusinessLead {
            business_name: "Acme".to_string(),
            product: "Widgets".to_string(),
            commission: "10".to_string(),
            email: "a@b.com".to_string(),
            phone: "555-0100".to_string(),
            ..BusinessLead::default()
        };
        assert!(matches!(state.apply(Action::Submit), Effect::Send(Lead::Business(_))));

        let effect = state.apply(settled(Err(SubmitError::Network("offline".to_string()))));
        assert_eq!(effect, Effect::Alert(config::SUBMIT_FAILURE_MESSAGE.to_string()));

        state.apply(Action::Submit);
        assert_eq!(state.apply(settled(Ok(()))), Effect::ScheduleReset);
        assert_eq!(state.screen, Screen::Success(LeadKind::Business));
    }
}
