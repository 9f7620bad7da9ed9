//! Owner-registration wizard: form model, field validation, and step
//! gating.
//!
//! The wizard walks an owner through three steps:
//!
//! 1. **Account** — name, email, phone, password
//! 2. **Property & documents** — stay type, type-specific fields, bank
//!    details, document uploads
//! 3. **Layout** — the [`LayoutEditor`] for the declared stay type
//!
//! Validation is UI-independent: each field has a checker returning the
//! first problem found, and each step has a collector returning every
//! problem, in the spirit of a config screen's `validate_*` functions.
//! `next()` only advances when the current step validates; `submit()`
//! on the final step freezes the form and the layout snapshot into the
//! registration payload.
//!
//! Changing the declared stay type mid-flow resets the facility toggles
//! and discards any in-progress layout editor — a half-built hostel
//! layout is meaningless for an apartment.

use serde::{Deserialize, Serialize};

use crate::editor::LayoutEditor;
use crate::snapshot::LayoutSnapshot;

/// Facility toggles common to every stay type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facilities {
    pub wifi: bool,
    pub parking: bool,
    pub food: bool,
    pub lift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facility {
    Wifi,
    Parking,
    Food,
    Lift,
}

impl Facilities {
    pub fn toggle(&mut self, facility: Facility) {
        match facility {
            Facility::Wifi => self.wifi = !self.wifi,
            Facility::Parking => self.parking = !self.parking,
            Facility::Food => self.food = !self.food,
            Facility::Lift => self.lift = !self.lift,
        }
    }
}

/// Required document uploads, tracked by presence only (the files
/// themselves live with the document picker, outside this crate).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documents {
    pub property: bool,
    pub identity_proof: bool,
    pub home_pics: bool,
}

/// Which required document is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Property,
    IdentityProof,
    HomePictures,
}

/// Owner-editable registration form. Text fields hold the raw input as
/// typed; validation interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerForm {
    // Step 1
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    // Step 2
    pub stay_type: String,
    pub hostel_name: String,
    pub hostel_type: String,
    pub apartment_name: String,
    pub bhk: String,
    pub tenant_type: String,
    pub commercial_name: String,
    pub sqft: String,
    pub usage: String,
    pub location: String,
    pub facilities: Facilities,
    pub bank_name: String,
    pub ifsc: String,
    pub account_no: String,
    pub documents: Documents,
}

/// A field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameMissing,
    NameNotAlphabetic,
    NameTooShort,
    EmailMissing,
    EmailInvalid,
    PhoneMissing,
    PhoneInvalid,
    PasswordMissing,
    PasswordTooShort,
    PasswordNeedsLowercase,
    PasswordNeedsUppercase,
    PasswordNeedsDigit,
    PasswordNeedsSpecial,
    ConfirmPasswordMissing,
    PasswordMismatch,
    StayTypeMissing,
    PropertyNameMissing,
    PropertyNameTooShort,
    LocationMissing,
    LocationTooShort,
    HostelTypeMissing,
    BhkMissing,
    TenantTypeMissing,
    UsageMissing,
    SqftMissing,
    SqftNotNumeric,
    SqftNotPositive,
    BankNameMissing,
    BankNameNotAlphabetic,
    BankNameTooShort,
    IfscMissing,
    IfscInvalid,
    AccountNoMissing,
    AccountNoNotNumeric,
    AccountNoLengthInvalid,
    DocumentMissing(DocumentKind),
}

/// Password special characters accepted by the strength check.
const PASSWORD_SPECIALS: &str = "@$!%*?&#";

fn is_alphabetic_with_spaces(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// Owner name: letters and spaces only, more than 3 characters.
pub fn validate_name(name: &str) -> Option<FieldError> {
    if name.is_empty() {
        return Some(FieldError::NameMissing);
    }
    if !is_alphabetic_with_spaces(name) {
        return Some(FieldError::NameNotAlphabetic);
    }
    if name.trim().len() <= 3 {
        return Some(FieldError::NameTooShort);
    }
    None
}

/// Email must be a plain `local@gmail.com` address (the platform only
/// accepts Gmail accounts).
pub fn validate_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        return Some(FieldError::EmailMissing);
    }
    let valid = email.strip_suffix("@gmail.com").is_some_and(|local| {
        !local.is_empty() && !local.contains('@') && !local.contains(char::is_whitespace)
    });
    if !valid {
        return Some(FieldError::EmailInvalid);
    }
    None
}

/// Phone number: exactly 10 digits.
pub fn validate_phone(phone: &str) -> Option<FieldError> {
    if phone.is_empty() {
        return Some(FieldError::PhoneMissing);
    }
    if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Some(FieldError::PhoneInvalid);
    }
    None
}

/// Password: at least 8 characters with one lowercase, one uppercase,
/// one digit, and one of `@$!%*?&#`.
pub fn validate_password(password: &str) -> Option<FieldError> {
    if password.is_empty() {
        return Some(FieldError::PasswordMissing);
    }
    if password.len() < 8 {
        return Some(FieldError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some(FieldError::PasswordNeedsLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some(FieldError::PasswordNeedsUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some(FieldError::PasswordNeedsDigit);
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return Some(FieldError::PasswordNeedsSpecial);
    }
    None
}

pub fn validate_confirm_password(confirm: &str, password: &str) -> Option<FieldError> {
    if confirm.is_empty() {
        return Some(FieldError::ConfirmPasswordMissing);
    }
    if confirm != password {
        return Some(FieldError::PasswordMismatch);
    }
    None
}

/// Property name: at least 3 characters after trimming.
pub fn validate_property_name(name: &str) -> Option<FieldError> {
    if name.trim().is_empty() {
        return Some(FieldError::PropertyNameMissing);
    }
    if name.trim().len() < 3 {
        return Some(FieldError::PropertyNameTooShort);
    }
    None
}

pub fn validate_location(location: &str) -> Option<FieldError> {
    if location.trim().is_empty() {
        return Some(FieldError::LocationMissing);
    }
    if location.trim().len() < 3 {
        return Some(FieldError::LocationTooShort);
    }
    None
}

/// Square feet: digits only, strictly positive.
pub fn validate_sqft(sqft: &str) -> Option<FieldError> {
    let trimmed = sqft.trim();
    if trimmed.is_empty() {
        return Some(FieldError::SqftMissing);
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Some(FieldError::SqftNotNumeric);
    }
    if trimmed.parse::<u64>().unwrap_or(u64::MAX) == 0 {
        return Some(FieldError::SqftNotPositive);
    }
    None
}

pub fn validate_bank_name(bank_name: &str) -> Option<FieldError> {
    if bank_name.trim().is_empty() {
        return Some(FieldError::BankNameMissing);
    }
    if !is_alphabetic_with_spaces(bank_name) {
        return Some(FieldError::BankNameNotAlphabetic);
    }
    if bank_name.trim().len() < 3 {
        return Some(FieldError::BankNameTooShort);
    }
    None
}

/// IFSC code: four uppercase letters, a literal `0`, then six
/// uppercase alphanumerics (e.g. `SBIN0001234`).
pub fn validate_ifsc(ifsc: &str) -> Option<FieldError> {
    let trimmed = ifsc.trim();
    if trimmed.is_empty() {
        return Some(FieldError::IfscMissing);
    }
    let bytes = trimmed.as_bytes();
    let valid = bytes.len() == 11
        && bytes[..4].iter().all(u8::is_ascii_uppercase)
        && bytes[4] == b'0'
        && bytes[5..]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
    if !valid {
        return Some(FieldError::IfscInvalid);
    }
    None
}

/// Account number: 9 to 18 digits.
pub fn validate_account_no(account_no: &str) -> Option<FieldError> {
    if account_no.trim().is_empty() {
        return Some(FieldError::AccountNoMissing);
    }
    if !account_no.chars().all(|c| c.is_ascii_digit()) {
        return Some(FieldError::AccountNoNotNumeric);
    }
    if !(9..=18).contains(&account_no.len()) {
        return Some(FieldError::AccountNoLengthInvalid);
    }
    None
}

fn required(value: &str, error: FieldError) -> Option<FieldError> {
    value.is_empty().then_some(error)
}

/// Validate the account step, returning every problem found.
pub fn validate_step1(form: &OwnerForm) -> Vec<FieldError> {
    [
        validate_name(&form.name),
        validate_email(&form.email),
        validate_phone(&form.phone),
        validate_password(&form.password),
        validate_confirm_password(&form.confirm_password, &form.password),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Validate the property-and-documents step.
///
/// Without a stay type nothing else is checked — the type decides which
/// fields exist at all. Bank details and documents are common to every
/// type.
pub fn validate_step2(form: &OwnerForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let type_errors: &[Option<FieldError>] = match form.stay_type.as_str() {
        "hostel" => &[
            validate_property_name(&form.hostel_name),
            validate_location(&form.location),
            required(&form.hostel_type, FieldError::HostelTypeMissing),
        ],
        "apartment" => &[
            validate_property_name(&form.apartment_name),
            validate_location(&form.location),
            required(&form.bhk, FieldError::BhkMissing),
            required(&form.tenant_type, FieldError::TenantTypeMissing),
        ],
        "commercial" => &[
            validate_property_name(&form.commercial_name),
            validate_location(&form.location),
            validate_sqft(&form.sqft),
            required(&form.usage, FieldError::UsageMissing),
        ],
        _ => return vec![FieldError::StayTypeMissing],
    };
    errors.extend(type_errors.iter().flatten());

    errors.extend(validate_bank_name(&form.bank_name));
    errors.extend(validate_ifsc(&form.ifsc));
    errors.extend(validate_account_no(&form.account_no));

    if !form.documents.property {
        errors.push(FieldError::DocumentMissing(DocumentKind::Property));
    }
    if !form.documents.identity_proof {
        errors.push(FieldError::DocumentMissing(DocumentKind::IdentityProof));
    }
    if !form.documents.home_pics {
        errors.push(FieldError::DocumentMissing(DocumentKind::HomePictures));
    }
    errors
}

/// Everything the wizard hands off on submission. Persisting it is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub form: OwnerForm,
    /// The layout editor's end-state; absent only if no stay type was
    /// ever declared (the step gating prevents that in practice).
    pub floors_data: Option<LayoutSnapshot>,
}

/// The three-step registration flow around the layout editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationWizard {
    form: OwnerForm,
    step: u8,
    editor: Option<LayoutEditor>,
    finished: bool,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        RegistrationWizard::new()
    }
}

impl RegistrationWizard {
    pub const FIRST_STEP: u8 = 1;
    pub const LAST_STEP: u8 = 3;

    pub fn new() -> RegistrationWizard {
        RegistrationWizard {
            form: OwnerForm::default(),
            step: Self::FIRST_STEP,
            editor: None,
            finished: false,
        }
    }

    pub fn form(&self) -> &OwnerForm {
        &self.form
    }

    /// Mutable access to the form fields. Stay type changes must go
    /// through [`RegistrationWizard::set_stay_type`] so dependent state
    /// is reset with them.
    pub fn form_mut(&mut self) -> &mut OwnerForm {
        &mut self.form
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The layout editor for the declared stay type, if one resolved.
    pub fn editor(&self) -> Option<&LayoutEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut LayoutEditor> {
        self.editor.as_mut()
    }

    /// Declare or change the stay type. A change clears the facility
    /// toggles and replaces the layout editor with a fresh one for the
    /// new type — in-progress floor data for another variant is
    /// invalidated, never carried across.
    pub fn set_stay_type(&mut self, raw: &str) {
        if self.form.stay_type == raw {
            return;
        }
        self.form.stay_type = raw.to_string();
        self.form.facilities = Facilities::default();
        self.editor = LayoutEditor::for_stay_type(raw);
    }

    pub fn toggle_facility(&mut self, facility: Facility) {
        self.form.facilities.toggle(facility);
    }

    /// Problems blocking the current step, empty when it may advance.
    pub fn current_step_errors(&self) -> Vec<FieldError> {
        match self.step {
            1 => validate_step1(&self.form),
            2 => validate_step2(&self.form),
            _ => Vec::new(),
        }
    }

    /// Advance to the next step if the current one validates.
    pub fn next(&mut self) -> bool {
        if self.step >= Self::LAST_STEP || !self.current_step_errors().is_empty() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Go back one step. Never blocked.
    pub fn back(&mut self) -> bool {
        if self.step > Self::FIRST_STEP {
            self.step -= 1;
            true
        } else {
            false
        }
    }

    /// Finish the wizard on the final step, freezing the form and the
    /// layout snapshot into the registration payload.
    pub fn submit(&mut self) -> Option<RegistrationPayload> {
        if self.step != Self::LAST_STEP || self.finished {
            return None;
        }
        self.finished = true;
        Some(RegistrationPayload {
            form: self.form.clone(),
            floors_data: self.editor.as_ref().map(|e| e.snapshot()),
        })
    }

    /// Logout / start over: back to the initial empty state.
    pub fn reset(&mut self) {
        *self = RegistrationWizard::new();
    }
}
