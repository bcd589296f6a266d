//! Shared storefront data shapes: skins, countries, payment methods, and
//! the payment wizard vocabulary.
//!
//! Every enum uses UPPERCASE string values on the wire (`"CARD"`, `"ASC"`,
//! `"SUCCESS"`, ...). Catalog documents must conform to these shapes; the
//! serving path itself does not validate them (see `catalog`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a payment method settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Card,
    Crypto,
}

/// A payment method offered in some country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub image: String,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
}

/// A country and its payment methods, in display-priority order.
/// `payments` may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub logo: String,
    pub title: String,
    pub payments: Vec<Payment>,
}

/// Cosmetic condition grade shown on a skin card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exterior {
    pub title: String,
    pub css_color: String,
}

/// A tradable item. `exterior` is absent for items without a condition
/// grade (stickers, cases) and is omitted from JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skin {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exterior: Option<Exterior>,
}

/// Sort direction for the skin listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOptionValue {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortOption {
    pub label: String,
    pub icon: String,
    pub value: SortOptionValue,
}

impl SortOption {
    /// The two canonical price orderings offered by the storefront.
    pub fn canonical() -> Vec<SortOption> {
        vec![
            SortOption {
                label: String::from("Price: low to high"),
                icon: String::from("arrow-up"),
                value: SortOptionValue::Asc,
            },
            SortOption {
                label: String::from("Price: high to low"),
                icon: String::from("arrow-down"),
                value: SortOptionValue::Desc,
            },
        ]
    }
}

/// One step of the linear payment wizard. Variant order is wizard order,
/// so the derived `Ord` compares stages by progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStageValue {
    Method,
    Details,
    Confirmation,
    Transfer,
}

impl PaymentStageValue {
    pub const ALL: [PaymentStageValue; 4] = [
        PaymentStageValue::Method,
        PaymentStageValue::Details,
        PaymentStageValue::Confirmation,
        PaymentStageValue::Transfer,
    ];

    /// The stage after this one. The wizard is forward-only; there is no
    /// predecessor operation.
    pub fn next(self) -> Option<PaymentStageValue> {
        match self {
            PaymentStageValue::Method => Some(PaymentStageValue::Details),
            PaymentStageValue::Details => Some(PaymentStageValue::Confirmation),
            PaymentStageValue::Confirmation => Some(PaymentStageValue::Transfer),
            PaymentStageValue::Transfer => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PaymentStageValue::Transfer)
    }
}

/// A wizard stage with its display title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStage {
    pub value: PaymentStageValue,
    pub title: String,
}

impl PaymentStage {
    /// All four wizard stages in order, with their display titles.
    pub fn wizard() -> Vec<PaymentStage> {
        PaymentStageValue::ALL
            .into_iter()
            .map(|value| PaymentStage {
                value,
                title: String::from(match value {
                    PaymentStageValue::Method => "Payment method",
                    PaymentStageValue::Details => "Payment details",
                    PaymentStageValue::Confirmation => "Confirmation",
                    PaymentStageValue::Transfer => "Transfer",
                }),
            })
            .collect::<Vec<_>>()
    }
}

/// Terminal outcome of a transfer attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferStatus {
    Success,
    Error,
}

/// Action fired when the user acts on a transfer outcome screen.
pub type ClickAction = Box<dyn Fn() + Send + Sync>;

/// Presentation record for the terminal screen of the payment wizard.
/// Never serialized; the caller supplies its own `click` action.
pub struct TransferState {
    pub title: String,
    pub description: String,
    pub image: String,
    pub button_text: String,
    pub click: ClickAction,
}

impl TransferState {
    /// Canonical outcome screen for a finished transfer.
    pub fn for_status(status: TransferStatus, click: ClickAction) -> Self {
        match status {
            TransferStatus::Success => TransferState {
                title: String::from("Transfer complete"),
                description: String::from("The skins are on their way to your inventory."),
                image: String::from("/assets/transfer-success.svg"),
                button_text: String::from("Back to store"),
                click,
            },
            TransferStatus::Error => TransferState {
                title: String::from("Transfer failed"),
                description: String::from("The trade offer could not be sent. No funds were taken."),
                image: String::from("/assets/transfer-error.svg"),
                button_text: String::from("Try again"),
                click,
            },
        }
    }
}

impl fmt::Debug for TransferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferState")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("image", &self.image)
            .field("button_text", &self.button_text)
            .finish_non_exhaustive()
    }
}

/// One row of the payment summary. `visible` gates display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInfoItem {
    pub title: String,
    pub value: String,
    pub visible: bool,
}
