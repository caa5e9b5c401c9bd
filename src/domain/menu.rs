use super::payload::ReferenceStyle;
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    ListPayments,
    GetPayment,
    CreatePayment,
    CancelPayment,
    RefundPayment,
    SearchPayments,
    Quit,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::ListPayments => "List payments",
            Action::GetPayment => "Get payment",
            Action::CreatePayment => "Create payment",
            Action::CancelPayment => "Cancel payment",
            Action::RefundPayment => "Refund payment",
            Action::SearchPayments => "Search payments",
            Action::Quit => "Quit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const LEGACY_MENU: &[(&str, Action)] = &[
    ("1", Action::ListPayments),
    ("2", Action::GetPayment),
    ("3", Action::CreatePayment),
    ("4", Action::CancelPayment),
    ("5", Action::RefundPayment),
    ("s", Action::SearchPayments),
    ("q", Action::Quit),
];

const CURRENT_MENU: &[(&str, Action)] = &[
    ("1", Action::GetPayment),
    ("2", Action::CreatePayment),
    ("3", Action::CancelPayment),
    ("4", Action::RefundPayment),
    ("s", Action::SearchPayments),
    ("q", Action::Quit),
];

/// Menu layout and payload shape for one deployment of the payments service.
///
/// `Legacy` lists payments on choice 1 and creates payments with an
/// application/payment reference pair. `Current` drops the listing and uses a
/// single `reference` field.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, ValueEnum)]
pub enum MenuVariant {
    Legacy,
    #[default]
    Current,
}

impl MenuVariant {
    pub fn entries(&self) -> &'static [(&'static str, Action)] {
        match self {
            MenuVariant::Legacy => LEGACY_MENU,
            MenuVariant::Current => CURRENT_MENU,
        }
    }

    /// Maps an operator choice to an action. Surrounding whitespace and letter
    /// case are ignored; anything else unknown yields `None`.
    pub fn action_for(&self, choice: &str) -> Option<Action> {
        let choice = choice.trim();
        self.entries()
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(choice))
            .map(|(_, action)| *action)
    }

    pub fn reference_style(&self) -> ReferenceStyle {
        match self {
            MenuVariant::Legacy => ReferenceStyle::Split,
            MenuVariant::Current => ReferenceStyle::Single,
        }
    }

    pub fn refund_prompt(&self) -> &'static str {
        match self {
            MenuVariant::Legacy => "Application reference",
            MenuVariant::Current => "Reference",
        }
    }
}

impl fmt::Display for MenuVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuVariant::Legacy => f.write_str("legacy"),
            MenuVariant::Current => f.write_str("current"),
        }
    }
}
