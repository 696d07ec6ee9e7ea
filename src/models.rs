//! Frontend Models
//!
//! Records mirrored from backend responses, plus the request payloads sent
//! back. Missing optional fields default so partial payloads still decode.

use serde::{Deserialize, Serialize};

/// Consultancy record (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Consultancy {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub phone_no: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub countries_operated: Vec<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_consultancy: bool,
}

impl Consultancy {
    pub fn role(&self) -> Role {
        if self.is_admin {
            Role::Admin
        } else if self.is_consultancy {
            Role::Consultancy
        } else {
            Role::Public
        }
    }

    pub fn owns_course(&self, course_id: u32) -> bool {
        self.courses.iter().any(|c| c.id == course_id)
    }
}

/// Course record (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub consultancy: Option<u32>,
    #[serde(default)]
    pub consultancy_name: Option<String>,
}

/// User account (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub is_consultancy: bool,
    #[serde(default)]
    pub is_staff: bool,
}

impl User {
    pub fn role_label(&self) -> &'static str {
        if self.is_staff {
            "Admin"
        } else if self.is_consultancy {
            "Consultancy"
        } else {
            "User"
        }
    }
}

/// Client-side role, persisted as its lowercase name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Public,
    Consultancy,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Public => "public",
            Role::Consultancy => "consultancy",
            Role::Admin => "admin",
        }
    }

    /// Unknown or missing values read back as `Public`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("admin") => Role::Admin,
            Some("consultancy") => Role::Consultancy,
            _ => Role::Public,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ========================
// Request / Response Payloads
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    #[serde(default)]
    pub consultancy_id: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub address: String,
}

/// Course fields a consultancy can set on its own courses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseDraft {
    pub name: String,
    pub tags: Vec<String>,
}

/// Course fields an admin can set, including the owner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminCourseDraft {
    pub name: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultancy: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CourseIdRequest {
    pub course_id: u32,
}

/// Partial consultancy update. Unset fields are left alone by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConsultancyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries_operated: Option<Vec<String>>,
}

/// User fields an admin can set. An empty password is never sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub is_consultancy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_search_result() {
        let body = json!([{
            "id": 4,
            "name": "Global Pathways",
            "address": "Putalisadak, Kathmandu",
            "description": null,
            "profile_image": "/media/logos/gp.png",
            "phone_no": "+977 980-0000000",
            "email": "hello@gp.example",
            "website": null,
            "countries_operated": ["USA", "UK"],
            "is_verified": true,
            "courses": [
                {"id": 9, "name": "Nursing", "tags": ["health", "bsc"], "consultancy": 4, "consultancy_name": "Global Pathways"}
            ],
            "is_admin": false,
            "is_consultancy": true
        }]);
        let parsed: Vec<Consultancy> = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].courses[0].tags, vec!["health", "bsc"]);
        assert_eq!(parsed[0].role(), Role::Consultancy);
        assert!(parsed[0].owns_course(9));
        assert!(!parsed[0].owns_course(10));
    }

    #[test]
    fn test_decode_sparse_records() {
        let c: Consultancy = serde_json::from_value(json!({
            "id": 1, "name": "Bare", "email": null, "countries_operated": null
        }))
        .unwrap();
        assert_eq!(c.email, "");
        assert!(c.countries_operated.is_empty());
        assert!(c.courses.is_empty());
        assert_eq!(c.role(), Role::Public);

        let u: User = serde_json::from_value(json!({"id": 2, "username": "root", "is_staff": true})).unwrap();
        assert_eq!(u.role_label(), "Admin");
    }

    #[test]
    fn test_role_from_profile_prefers_admin() {
        let c = Consultancy { is_admin: true, is_consultancy: true, ..Default::default() };
        assert_eq!(c.role(), Role::Admin);
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse(Some("admin")), Role::Admin);
        assert_eq!(Role::parse(Some("consultancy")), Role::Consultancy);
        assert_eq!(Role::parse(Some("superuser")), Role::Public);
        assert_eq!(Role::parse(None), Role::Public);
        assert_eq!(Role::parse(Some(Role::Consultancy.as_str())), Role::Consultancy);
    }

    #[test]
    fn test_user_draft_skips_empty_password() {
        let draft = UserDraft { username: "a".into(), email: "a@b.c".into(), password: None, is_consultancy: true };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["is_consultancy"], json!(true));
    }

    #[test]
    fn test_patch_only_sends_set_fields() {
        let patch = ConsultancyPatch { name: Some("New".into()), ..Default::default() };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"name": "New"}));
    }
}
