//! Checkout form and order state machine.
//!
//! A checkout moves `Editing -> Submitting -> Placed` and never backwards;
//! `Placed` is terminal. Validation is required-field presence only, checked
//! at the `Editing -> Submitting` edge. There is no payment gateway, so
//! settling a submitted order always succeeds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by checkout validation and stage transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// A required shipping field was blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The requested transition is not legal from the current stage.
    #[error("invalid transition from {0} stage")]
    InvalidTransition(CheckoutStage),

    /// Checkout cannot begin with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// An order operation arrived with no checkout in progress.
    #[error("no checkout in progress")]
    NotActive,
}

// ============================================================================
// Payment method
// ============================================================================

/// How the shopper intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Credit or debit card.
    #[default]
    Card,
    /// Unified Payments Interface.
    Upi,
    /// Cash on delivery.
    Cod,
}

impl PaymentMethod {
    /// Wire identifier for the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Upi => "upi",
            Self::Cod => "cod",
        }
    }

    /// Human-readable label shown beside the payment radio.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Credit/Debit Card",
            Self::Upi => "UPI",
            Self::Cod => "Cash on Delivery",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "upi" => Ok(Self::Upi),
            "cod" => Ok(Self::Cod),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

// ============================================================================
// Shipping form
// ============================================================================

/// Shipping details collected before an order is placed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub payment: PaymentMethod,
}

impl CheckoutForm {
    /// Checks every required field for non-blank content.
    ///
    /// Reports the first blank field in display order. Content is not
    /// inspected beyond presence; a pincode of "abc" passes.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let fields: [(&'static str, &str); 7] = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("pincode", &self.pincode),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingField(label));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Stage machine
// ============================================================================

/// Lifecycle stage of a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CheckoutStage {
    /// The shopper is filling in shipping details.
    #[default]
    Editing,
    /// The form passed validation and the order is in flight.
    Submitting,
    /// The order went through. Terminal.
    Placed,
}

impl CheckoutStage {
    /// Wire identifier for the stage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::Placed => "placed",
        }
    }
}

impl fmt::Display for CheckoutStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A checkout in progress: the form plus its stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkout {
    form: CheckoutForm,
    stage: CheckoutStage,
}

impl Checkout {
    /// Starts a fresh checkout in the `Editing` stage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stage.
    #[must_use]
    pub const fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// The shipping form as filled so far.
    #[must_use]
    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    /// Mutable access to the shipping form while editing.
    pub fn form_mut(&mut self) -> &mut CheckoutForm {
        &mut self.form
    }

    /// Whether the order has been placed.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.stage == CheckoutStage::Placed
    }

    /// Validates the form and moves `Editing -> Submitting`.
    ///
    /// On a validation error the checkout stays in `Editing` so the shopper
    /// can fix the form and resubmit.
    pub fn submit(&mut self) -> Result<(), CheckoutError> {
        if self.stage != CheckoutStage::Editing {
            return Err(CheckoutError::InvalidTransition(self.stage));
        }
        self.form.validate()?;
        self.stage = CheckoutStage::Submitting;
        Ok(())
    }

    /// Moves `Submitting -> Placed`.
    ///
    /// Always succeeds from `Submitting`; there is no gateway to decline.
    pub fn settle(&mut self) -> Result<(), CheckoutError> {
        if self.stage != CheckoutStage::Submitting {
            return Err(CheckoutError::InvalidTransition(self.stage));
        }
        self.stage = CheckoutStage::Placed;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
            payment: PaymentMethod::Upi,
        }
    }

    #[test]
    fn test_submit_then_settle_places_order() {
        let mut checkout = Checkout::new();
        assert_eq!(checkout.stage(), CheckoutStage::Editing);

        *checkout.form_mut() = filled_form();
        checkout.submit().unwrap();
        assert_eq!(checkout.stage(), CheckoutStage::Submitting);

        checkout.settle().unwrap();
        assert!(checkout.is_placed());
    }

    #[test]
    fn test_submit_reports_first_blank_field() {
        let mut checkout = Checkout::new();
        let mut form = filled_form();
        form.phone = "   ".to_string();
        form.city = String::new();
        *checkout.form_mut() = form;

        let err = checkout.submit().unwrap_err();
        assert_eq!(err, CheckoutError::MissingField("phone"));
        assert_eq!(checkout.stage(), CheckoutStage::Editing);
    }

    #[test]
    fn test_validation_failure_allows_resubmit() {
        let mut checkout = Checkout::new();
        assert!(checkout.submit().is_err());

        *checkout.form_mut() = filled_form();
        checkout.submit().unwrap();
        assert_eq!(checkout.stage(), CheckoutStage::Submitting);
    }

    #[test]
    fn test_settle_requires_submitting() {
        let mut checkout = Checkout::new();
        let err = checkout.settle().unwrap_err();
        assert_eq!(err, CheckoutError::InvalidTransition(CheckoutStage::Editing));
    }

    #[test]
    fn test_placed_is_terminal() {
        let mut checkout = Checkout::new();
        *checkout.form_mut() = filled_form();
        checkout.submit().unwrap();
        checkout.settle().unwrap();

        assert_eq!(
            checkout.submit().unwrap_err(),
            CheckoutError::InvalidTransition(CheckoutStage::Placed)
        );
        assert_eq!(
            checkout.settle().unwrap_err(),
            CheckoutError::InvalidTransition(CheckoutStage::Placed)
        );
    }

    #[test]
    fn test_payment_defaults_to_card() {
        let form = CheckoutForm::default();
        assert_eq!(form.payment, PaymentMethod::Card);
        assert_eq!(PaymentMethod::Card.label(), "Credit/Debit Card");
    }

    #[test]
    fn test_payment_method_round_trip() {
        for method in [PaymentMethod::Card, PaymentMethod::Upi, PaymentMethod::Cod] {
            assert_eq!(method.as_str().parse::<PaymentMethod>().unwrap(), method);
        }
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }
}
