//! Form Drafts & Validation
//!
//! Editable string drafts behind each form, their client-side checks, and
//! conversion into request payloads.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{
    AdminCourseDraft, Consultancy, ConsultancyPatch, Course, CourseDraft, RegisterRequest, User, UserDraft,
};

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const COURSE_NAME_REQUIRED: &str = "Course name is required";
pub const COURSE_OWNER_REQUIRED: &str = "Please select a consultancy";

/// Split "a, b,,c " into ["a", "b", "c"].
pub fn parse_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ========================
// Login
// ========================

pub fn validate_login(username: &str, password: &str) -> Option<&'static str> {
    if username.trim().is_empty() || password.trim().is_empty() {
        Some(FILL_ALL_FIELDS)
    } else {
        None
    }
}

// ========================
// Register
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Username,
    Email,
    Password,
    Name,
    Address,
}

/// Per-field validation messages for the registration form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub name: Option<&'static str>,
    pub address: Option<&'static str>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn get(&self, field: RegisterField) -> Option<&'static str> {
        match field {
            RegisterField::Username => self.username,
            RegisterField::Email => self.email,
            RegisterField::Password => self.password,
            RegisterField::Name => self.name,
            RegisterField::Address => self.address,
        }
    }

    pub fn clear(&mut self, field: RegisterField) {
        match field {
            RegisterField::Username => self.username = None,
            RegisterField::Email => self.email = None,
            RegisterField::Password => self.password = None,
            RegisterField::Name => self.name = None,
            RegisterField::Address => self.address = None,
        }
    }
}

pub fn validate_register(form: &RegisterRequest) -> RegisterErrors {
    let username = form.username.trim();
    let email = form.email.trim();
    let password = form.password.trim();

    RegisterErrors {
        username: if username.is_empty() {
            Some("Username is required")
        } else if username.chars().count() < 3 {
            Some("Username must be at least 3 characters")
        } else {
            None
        },
        email: if email.is_empty() {
            Some("Email is required")
        } else if !is_valid_email(email) {
            Some("Please enter a valid email")
        } else {
            None
        },
        password: if password.is_empty() {
            Some("Password is required")
        } else if password.chars().count() < 6 {
            Some("Password must be at least 6 characters")
        } else {
            None
        },
        name: form.name.trim().is_empty().then_some("Consultancy name is required"),
        address: form.address.trim().is_empty().then_some("Address is required"),
    }
}

pub fn register_field(form: &RegisterRequest, field: RegisterField) -> &str {
    match field {
        RegisterField::Username => &form.username,
        RegisterField::Email => &form.email,
        RegisterField::Password => &form.password,
        RegisterField::Name => &form.name,
        RegisterField::Address => &form.address,
    }
}

pub fn set_register_field(form: &mut RegisterRequest, field: RegisterField, value: String) {
    match field {
        RegisterField::Username => form.username = value,
        RegisterField::Email => form.email = value,
        RegisterField::Password => form.password = value,
        RegisterField::Name => form.name = value,
        RegisterField::Address => form.address = value,
    }
}

// ========================
// Courses
// ========================

/// Name + comma-separated tags as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseForm {
    pub name: String,
    pub tags: String,
    pub consultancy: Option<u32>,
}

impl CourseForm {
    pub fn from_course(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            tags: join_list(&course.tags),
            consultancy: course.consultancy,
        }
    }

    pub fn validate(&self) -> Option<&'static str> {
        self.name.trim().is_empty().then_some(COURSE_NAME_REQUIRED)
    }

    /// Admin-created courses must name their owning consultancy.
    pub fn validate_admin(&self) -> Option<&'static str> {
        self.validate().or(self.consultancy.is_none().then_some(COURSE_OWNER_REQUIRED))
    }

    pub fn to_draft(&self) -> CourseDraft {
        CourseDraft {
            name: self.name.trim().to_string(),
            tags: parse_comma_list(&self.tags),
        }
    }

    pub fn to_admin_draft(&self) -> AdminCourseDraft {
        AdminCourseDraft {
            name: self.name.trim().to_string(),
            tags: parse_comma_list(&self.tags),
            consultancy: self.consultancy,
        }
    }
}

// ========================
// Consultancy details
// ========================

/// Editable consultancy details; countries as a comma-separated string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsultancyForm {
    pub name: String,
    pub address: String,
    pub email: String,
    pub description: String,
    pub phone_no: String,
    pub website: String,
    pub countries: String,
}

impl ConsultancyForm {
    pub fn from_consultancy(c: &Consultancy) -> Self {
        Self {
            name: c.name.clone(),
            address: c.address.clone(),
            email: c.email.clone(),
            description: c.description.clone().unwrap_or_default(),
            phone_no: c.phone_no.clone().unwrap_or_default(),
            website: c.website.clone().unwrap_or_default(),
            countries: join_list(&c.countries_operated),
        }
    }

    /// Patch for the consultancy's own profile. Email belongs to the user
    /// account and is not editable here.
    pub fn to_profile_patch(&self) -> ConsultancyPatch {
        ConsultancyPatch {
            name: Some(self.name.trim().to_string()),
            address: Some(self.address.trim().to_string()),
            email: None,
            description: Some(self.description.trim().to_string()),
            phone_no: Some(self.phone_no.trim().to_string()),
            website: Some(self.website.trim().to_string()),
            countries_operated: Some(parse_comma_list(&self.countries)),
        }
    }

    /// Patch for the admin consultancy modal
    pub fn to_admin_patch(&self) -> ConsultancyPatch {
        ConsultancyPatch {
            name: Some(self.name.trim().to_string()),
            address: Some(self.address.trim().to_string()),
            email: blank_to_none(&self.email),
            website: blank_to_none(&self.website),
            countries_operated: Some(parse_comma_list(&self.countries)),
            ..Default::default()
        }
    }
}

// ========================
// Users
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_consultancy: bool,
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            password: String::new(),
            is_consultancy: user.is_consultancy,
        }
    }

    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            is_consultancy: self.is_consultancy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register() -> RegisterRequest {
        RegisterRequest {
            username: "globalpath".into(),
            email: "info@globalpath.example".into(),
            password: "hunter22".into(),
            name: "Global Pathways".into(),
            address: "Putalisadak, Kathmandu".into(),
        }
    }

    #[test]
    fn test_parse_comma_list() {
        assert_eq!(parse_comma_list(" USA, UK,,Canada , "), vec!["USA", "UK", "Canada"]);
        assert!(parse_comma_list("").is_empty());
        assert!(parse_comma_list(" , ,").is_empty());
    }

    #[test]
    fn test_validate_login() {
        assert_eq!(validate_login("", "secret"), Some(FILL_ALL_FIELDS));
        assert_eq!(validate_login("user", "   "), Some(FILL_ALL_FIELDS));
        assert_eq!(validate_login("user", "secret"), None);
    }

    #[test]
    fn test_valid_register_has_no_errors() {
        assert!(validate_register(&valid_register()).is_empty());
    }

    #[test]
    fn test_register_field_rules() {
        let mut form = valid_register();
        form.username = "ab".into();
        form.email = "not-an-email".into();
        form.password = "12345".into();
        form.name = "  ".into();
        form.address = String::new();

        let errors = validate_register(&form);
        assert_eq!(errors.username, Some("Username must be at least 3 characters"));
        assert_eq!(errors.email, Some("Please enter a valid email"));
        assert_eq!(errors.password, Some("Password must be at least 6 characters"));
        assert_eq!(errors.name, Some("Consultancy name is required"));
        assert_eq!(errors.address, Some("Address is required"));
    }

    #[test]
    fn test_register_required_messages() {
        let errors = validate_register(&RegisterRequest::default());
        assert_eq!(errors.username, Some("Username is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.password, Some("Password is required"));
    }

    #[test]
    fn test_register_errors_clear_per_field() {
        let mut errors = validate_register(&RegisterRequest::default());
        errors.clear(RegisterField::Email);
        assert_eq!(errors.get(RegisterField::Email), None);
        assert!(errors.get(RegisterField::Username).is_some());
    }

    #[test]
    fn test_register_field_accessors() {
        let mut form = RegisterRequest::default();
        set_register_field(&mut form, RegisterField::Name, "Global".into());
        assert_eq!(register_field(&form, RegisterField::Name), "Global");
        assert_eq!(form.name, "Global");
        assert_eq!(register_field(&form, RegisterField::Address), "");
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
    }

    #[test]
    fn test_course_form() {
        let form = CourseForm { name: "  Nursing ".into(), tags: "health, bsc,".into(), consultancy: Some(3) };
        assert_eq!(form.validate(), None);
        let draft = form.to_draft();
        assert_eq!(draft.name, "Nursing");
        assert_eq!(draft.tags, vec!["health", "bsc"]);
        assert_eq!(form.to_admin_draft().consultancy, Some(3));

        assert_eq!(CourseForm::default().validate(), Some(COURSE_NAME_REQUIRED));
        assert_eq!(form.validate_admin(), None);

        let course = Course { id: 1, name: "MBA".into(), tags: vec!["business".into(), "pg".into()], ..Default::default() };
        assert_eq!(CourseForm::from_course(&course).tags, "business, pg");
    }

    #[test]
    fn test_admin_course_needs_owner() {
        let unowned = CourseForm { name: "Nursing".into(), tags: String::new(), consultancy: None };
        assert_eq!(unowned.validate(), None);
        assert_eq!(unowned.validate_admin(), Some(COURSE_OWNER_REQUIRED));
        assert_eq!(CourseForm::default().validate_admin(), Some(COURSE_NAME_REQUIRED));
    }

    #[test]
    fn test_consultancy_form_patches() {
        let c = Consultancy {
            id: 1,
            name: "Global".into(),
            address: "KTM".into(),
            email: "g@x.io".into(),
            countries_operated: vec!["USA".into(), "UK".into()],
            ..Default::default()
        };
        let mut form = ConsultancyForm::from_consultancy(&c);
        assert_eq!(form.countries, "USA, UK");

        form.countries = "USA, , Australia".into();
        let patch = form.to_profile_patch();
        assert_eq!(patch.countries_operated, Some(vec!["USA".to_string(), "Australia".to_string()]));
        assert_eq!(patch.email, None);
        assert_eq!(patch.website.as_deref(), Some(""));

        let admin = form.to_admin_patch();
        assert_eq!(admin.email.as_deref(), Some("g@x.io"));
        assert_eq!(admin.website, None);
    }

    #[test]
    fn test_user_form_omits_blank_password() {
        let user = User { id: 9, username: "ops".into(), email: "ops@x.io".into(), is_consultancy: true, is_staff: false };
        let form = UserForm::from_user(&user);
        assert_eq!(form.to_draft().password, None);

        let with_password = UserForm { password: "s3cret!".into(), ..form };
        assert_eq!(with_password.to_draft().password.as_deref(), Some("s3cret!"));
    }
}
