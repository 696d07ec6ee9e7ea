//! Admin Commands
//!
//! Staff-only CRUD over consultancies, users and courses.

use super::client::Call;
use super::endpoints;
use crate::error::ApiResult;
use crate::models::{AdminCourseDraft, Consultancy, ConsultancyPatch, Course, User, UserDraft};

// ========================
// Consultancies
// ========================

pub async fn list_consultancies() -> ApiResult<Vec<Consultancy>> {
    Call::get(endpoints::ADMIN_CONSULTANCIES).send_json().await
}

pub async fn create_consultancy(draft: &ConsultancyPatch) -> ApiResult<Consultancy> {
    Call::post(endpoints::ADMIN_CONSULTANCIES).json(draft)?.send_json().await
}

pub async fn update_consultancy(id: u32, draft: &ConsultancyPatch) -> ApiResult<Consultancy> {
    Call::put(endpoints::admin_consultancy(id)).json(draft)?.send_json().await
}

pub async fn delete_consultancy(id: u32) -> ApiResult<()> {
    Call::delete(endpoints::admin_consultancy(id)).send_unit().await
}

pub async fn verify_consultancy(id: u32) -> ApiResult<()> {
    Call::put(endpoints::admin_consultancy_verify(id)).send_unit().await
}

// ========================
// Users
// ========================

pub async fn list_users() -> ApiResult<Vec<User>> {
    Call::get(endpoints::ADMIN_USERS).send_json().await
}

pub async fn create_user(draft: &UserDraft) -> ApiResult<User> {
    Call::post(endpoints::ADMIN_USERS).json(draft)?.send_json().await
}

pub async fn update_user(id: u32, draft: &UserDraft) -> ApiResult<User> {
    Call::put(endpoints::admin_user(id)).json(draft)?.send_json().await
}

pub async fn delete_user(id: u32) -> ApiResult<()> {
    Call::delete(endpoints::admin_user(id)).send_unit().await
}

// ========================
// Courses
// ========================

/// Full course catalogue. Also used by consultancies to pick courses to link.
pub async fn list_courses() -> ApiResult<Vec<Course>> {
    Call::get(endpoints::ADMIN_COURSES).send_json().await
}

pub async fn create_course(draft: &AdminCourseDraft) -> ApiResult<Course> {
    Call::post(endpoints::ADMIN_COURSES).json(draft)?.send_json().await
}

pub async fn update_course(id: u32, draft: &AdminCourseDraft) -> ApiResult<Course> {
    Call::put(endpoints::admin_course(id)).json(draft)?.send_json().await
}

pub async fn delete_course_admin(id: u32) -> ApiResult<()> {
    Call::delete(endpoints::admin_course(id)).send_unit().await
}
