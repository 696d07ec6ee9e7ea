//! Consultancy Course Commands
//!
//! Courses owned by the logged-in consultancy.

use super::client::Call;
use super::endpoints;
use crate::error::ApiResult;
use crate::models::{Course, CourseDraft, CourseIdRequest};

pub async fn add_course(draft: &CourseDraft) -> ApiResult<Course> {
    Call::post(endpoints::COURSE_ADD).json(draft)?.send_json().await
}

pub async fn edit_course(id: u32, draft: &CourseDraft) -> ApiResult<Course> {
    Call::put(endpoints::course_edit(id)).json(draft)?.send_json().await
}

pub async fn delete_course(id: u32) -> ApiResult<()> {
    Call::delete(endpoints::course_delete(id)).send_unit().await
}

/// Copy a catalogue course into this consultancy's listings.
pub async fn link_course(course_id: u32) -> ApiResult<Course> {
    Call::post(endpoints::COURSE_LINK)
        .json(&CourseIdRequest { course_id })?
        .send_json()
        .await
}

pub async fn unlink_course(course_id: u32) -> ApiResult<()> {
    Call::post(endpoints::COURSE_UNLINK)
        .json(&CourseIdRequest { course_id })?
        .send_unit()
        .await
}
