//! REST Endpoint Paths
//!
//! Paths relative to the API base. The backend expects trailing slashes.

pub const SEARCH: &str = "search/";
pub const LOGIN: &str = "login/";
pub const REGISTER: &str = "register/";
pub const PROFILE: &str = "profile/";

pub const COURSE_ADD: &str = "courses/add/";
pub const COURSE_LINK: &str = "courses/link/";
pub const COURSE_UNLINK: &str = "courses/unlink/";

pub const ADMIN_CONSULTANCIES: &str = "admin/consultancies/";
pub const ADMIN_USERS: &str = "admin/users/";
pub const ADMIN_COURSES: &str = "admin/courses/";

pub fn course_edit(id: u32) -> String {
    format!("courses/edit/{}/", id)
}

pub fn course_delete(id: u32) -> String {
    format!("courses/delete/{}/", id)
}

pub fn admin_consultancy(id: u32) -> String {
    format!("{}{}/", ADMIN_CONSULTANCIES, id)
}

pub fn admin_consultancy_verify(id: u32) -> String {
    format!("{}verify/{}/", ADMIN_CONSULTANCIES, id)
}

pub fn admin_user(id: u32) -> String {
    format!("{}{}/", ADMIN_USERS, id)
}

pub fn admin_course(id: u32) -> String {
    format!("{}{}/", ADMIN_COURSES, id)
}

/// `Authorization` header value for a stored token
pub fn auth_header(token: &str) -> String {
    format!("Token {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_paths() {
        assert_eq!(course_edit(7), "courses/edit/7/");
        assert_eq!(course_delete(7), "courses/delete/7/");
        assert_eq!(admin_consultancy(3), "admin/consultancies/3/");
        assert_eq!(admin_consultancy_verify(3), "admin/consultancies/verify/3/");
        assert_eq!(admin_user(12), "admin/users/12/");
        assert_eq!(admin_course(5), "admin/courses/5/");
    }

    #[test]
    fn test_auth_header_uses_token_scheme() {
        assert_eq!(auth_header("9944b09199c62bcf"), "Token 9944b09199c62bcf");
    }
}
