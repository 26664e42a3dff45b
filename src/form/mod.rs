pub mod controller;

use std::collections::{BTreeSet, HashMap};

/// CSS ids of the registration and login page elements.
pub mod ids {
    pub const LOGIN_USER_EMAIL: &str = "loginUserEmail";
    pub const LOGIN_USER_PASSWORD: &str = "loginUserPassword";
    pub const LOGIN_BUTTON: &str = "loginButton";
    pub const CREATE_USER_FIRST_NAME: &str = "createUserFirstName";
    pub const CREATE_USER_LAST_NAME: &str = "createUserLastName";
    pub const CREATE_USER_USER_NAME: &str = "createUserUserName";
    pub const CREATE_USER_EMAIL: &str = "createUserEmail";
    pub const CREATE_USER_PASSWORD: &str = "createUserPassword";
    pub const CREATE_USER_CONFIRM_PASSWORD: &str = "createUserConfirmPassword";
    pub const CREATE_BUTTON: &str = "createButton";
}

/// Class carried by a clickable submit button.
pub const BUTTON_CLASS: &str = "btn";

/// Class carried by a disabled submit button.
pub const BUTTON_DISABLED_CLASS: &str = "btn-disable";

/// Background color applied to a password field after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldColor {
    Valid,
    Invalid,
    #[default]
    Reset,
}

impl FieldColor {
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Valid => "#66cc66",
            Self::Invalid => "#B22222",
            Self::Reset => "black",
        }
    }
}

/// Everything the controller needs from a form page, keeping it independent
/// of a live document.
pub trait FormPage {
    /// Current value of the input with the given id.
    fn value(&self, id: &str) -> String;

    /// Native constraint validity of the input with the given id.
    fn validity(&self, id: &str) -> bool;

    /// Set the background color of the input with the given id.
    fn set_background(&mut self, id: &str, color: FieldColor);

    /// Swap a CSS class and set the disabled flag on the button with the
    /// given id.
    fn button_state(&mut self, id: &str, disabled: bool, add_class: &str, remove_class: &str);
}

/// Disabled flag and class list of a submit button.
#[derive(Debug, Clone, Default)]
pub struct Button {
    pub disabled: bool,
    pub classes: BTreeSet<String>,
}

impl Button {
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// In-memory form page backing the CLI and tests. All fields are `required`
/// inputs: native validity is a non-empty value.
#[derive(Debug, Default)]
pub struct MemoryForm {
    fields: HashMap<String, String>,
    colors: HashMap<String, FieldColor>,
    buttons: HashMap<String, Button>,
}

impl MemoryForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(&mut self, id: &str, value: &str) {
        self.fields.insert(id.to_string(), value.to_string());
    }

    /// Background color last written to the input, reset when untouched.
    #[must_use]
    pub fn background(&self, id: &str) -> FieldColor {
        self.colors.get(id).copied().unwrap_or_default()
    }

    /// State of the button with the given id, enabled when untouched.
    #[must_use]
    pub fn button(&self, id: &str) -> Button {
        self.buttons.get(id).cloned().unwrap_or_default()
    }
}

impl FormPage for MemoryForm {
    fn value(&self, id: &str) -> String {
        self.fields.get(id).cloned().unwrap_or_default()
    }

    fn validity(&self, id: &str) -> bool {
        !self.value(id).is_empty()
    }

    fn set_background(&mut self, id: &str, color: FieldColor) {
        self.colors.insert(id.to_string(), color);
    }

    fn button_state(&mut self, id: &str, disabled: bool, add_class: &str, remove_class: &str) {
        let button = self.buttons.entry(id.to_string()).or_default();

        button.classes.remove(remove_class);
        button.classes.insert(add_class.to_string());
        button.disabled = disabled;
    }
}
