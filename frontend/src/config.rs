pub const SUBMIT_URL: &str =
    "https://script.google.com/macros/s/AKfycbwN0eK_m_jLijnA4LPfeA0K7KniFdoqy2C2yVDiuiMcHE3trRQC_y-0MbOgi4y65Wl1/exec";

/// How long the "You're in!" card stays up before the page returns home.
pub const SUCCESS_RESET_DELAY_MS: u32 = 3_000;

pub const SUBMIT_FAILURE_MESSAGE: &str = "There was an error submitting your form. Please try again.";

// Input hint only, the value is sent as typed.
pub const COMMISSION_MIN: u32 = 1;
pub const COMMISSION_MAX: u32 = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_card_stays_three_seconds() {
        assert_eq!(SUCCESS_RESET_DELAY_MS, 3000);
    }

    #[test]
    fn commission_hint_is_one_to_fifty() {
        assert_eq!((COMMISSION_MIN, COMMISSION_MAX), (1, 50));
    }
}
