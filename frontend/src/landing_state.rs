use crate::leads::{BusinessEdit, BusinessLead, Lead, LeadKind, RepEdit, RepLead};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    About,
    Contact,
    Form(LeadKind),
    Submitting(LeadKind),
    Success(LeadKind),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShowAbout,
    ShowContact,
    BackHome,
    OpenForm(LeadKind),
    EditBusiness(BusinessEdit),
    EditRep(RepEdit),
    Submit,
    SubmitSettled(Result<(), String>),
    ResetAfterSuccess,
    BackToOptions,
}

/// Work the owning component has to do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Send(Lead),
    ScheduleReset,
    Alert(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LandingState {
    pub screen: Screen,
    pub business: BusinessLead,
    pub rep: RepLead,
    /// The form whose request is in flight. Outlives the screen: the user may
    /// walk off to About or Contact before it settles.
    pub pending: Option<LeadKind>,
}

impl LandingState {
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// The form card shown on the home layout, if any.
    pub fn active_form(&self) -> Option<LeadKind> {
        match self.screen {
            Screen::Form(kind) | Screen::Submitting(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::ShowAbout => self.show_panel(Screen::About),
            Action::ShowContact => self.show_panel(Screen::Contact),
            Action::BackHome => {
                if matches!(self.screen, Screen::About | Screen::Contact) {
                    self.screen = Screen::Home;
                }
                Effect::None
            }
            Action::OpenForm(kind) => {
                if matches!(self.screen, Screen::Home | Screen::Form(_)) {
                    self.screen = if self.pending == Some(kind) {
                        Screen::Submitting(kind)
                    } else {
                        Screen::Form(kind)
                    };
                }
                Effect::None
            }
            Action::EditBusiness(edit) => {
                if self.active_form() == Some(LeadKind::Business) {
                    self.business.apply(edit);
                }
                Effect::None
            }
            Action::EditRep(edit) => {
                if self.active_form() == Some(LeadKind::Rep) {
                    self.rep.apply(edit);
                }
                Effect::None
            }
            Action::Submit => {
                let Screen::Form(kind) = self.screen else {
                    return Effect::None;
                };
                if self.pending.is_some() {
                    return Effect::None;
                }
                let lead = match kind {
                    LeadKind::Business if self.business.is_complete() => {
                        Lead::Business(self.business.clone())
                    }
                    LeadKind::Rep if self.rep.is_complete() => Lead::Rep(self.rep.clone()),
                    _ => return Effect::None,
                };
                self.pending = Some(kind);
                self.screen = Screen::Submitting(kind);
                Effect::Send(lead)
            }
            Action::SubmitSettled(result) => {
                let Some(kind) = self.pending.take() else {
                    return Effect::None;
                };
                let on_form = self.screen == Screen::Submitting(kind);
                match result {
                    Ok(()) => {
                        self.reset(kind);
                        if on_form {
                            self.screen = Screen::Success(kind);
                        }
                        Effect::ScheduleReset
                    }
                    Err(message) => {
                        if on_form {
                            self.screen = Screen::Form(kind);
                        }
                        Effect::Alert(message)
                    }
                }
            }
            Action::ResetAfterSuccess => {
                if let Screen::Success(_) = self.screen {
                    self.screen = Screen::Home;
                }
                Effect::None
            }
            Action::BackToOptions => {
                if let Screen::Form(kind) = self.screen {
                    self.reset(kind);
                    self.screen = Screen::Home;
                }
                Effect::None
            }
        }
    }

    fn show_panel(&mut self, panel: Screen) -> Effect {
        // Leaving Submitting keeps the record; the settle step resets or keeps it.
        if let Screen::Form(kind) = self.screen {
            self.reset(kind);
        }
        self.screen = panel;
        Effect::None
    }

    fn reset(&mut self, kind: LeadKind) {
        match kind {
            LeadKind::Business => self.business = BusinessLead::default(),
            LeadKind::Rep => self.rep = RepLead::default(),
        }
    }
}
