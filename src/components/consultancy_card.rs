//! Consultancy Card Component
//!
//! One search result: logo, courses, countries and contact links.

use leptos::prelude::*;

use crate::config::config;
use crate::models::Consultancy;
use crate::search::{course_label, mailto_link, maps_link, whatsapp_link};

#[component]
pub fn ConsultancyCard(consultancy: Consultancy) -> impl IntoView {
    let Consultancy {
        name,
        address,
        email,
        phone_no,
        website,
        profile_image,
        countries_operated,
        courses,
        ..
    } = consultancy;

    let logo = profile_image
        .filter(|p| !p.is_empty())
        .map(|path| {
            let src = config().media_url(&path);
            let alt = name.clone();
            view! { <img class="card-logo" src=src alt=alt /> }
        });

    let course_list = (!courses.is_empty()).then(|| view! {
        <ul class="card-courses">
            {courses.into_iter().map(|course| view! {
                <li>{course_label(&course.name, &course.tags)}</li>
            }).collect_view()}
        </ul>
    });

    let countries = (!countries_operated.is_empty()).then(|| view! {
        <p class="card-countries">"Countries: " {countries_operated.join(", ")}</p>
    });

    let address_link = (!address.is_empty()).then(|| view! {
        <a class="card-contact" href=maps_link(&address) target="_blank" rel="noopener noreferrer">
            "📍 " {address.clone()}
        </a>
    });

    let email_link = (!email.is_empty()).then(|| view! {
        <a class="card-contact" href=mailto_link(&email)>"✉ " {email.clone()}</a>
    });

    let phone_link = phone_no.filter(|p| !p.is_empty()).map(|phone| view! {
        <a class="card-contact" href=whatsapp_link(&phone) target="_blank" rel="noopener noreferrer">
            "☎ " {phone.clone()}
        </a>
    });

    let website_link = website.filter(|w| !w.is_empty()).map(|url| view! {
        <a class="card-contact" href=url target="_blank" rel="noopener noreferrer">"🌐 Website"</a>
    });

    view! {
        <li class="consultancy-card">
            {logo}
            <div class="card-body">
                <p class="card-title">{name}</p>
                {course_list}
                {countries}
                <div class="card-contacts">
                    {address_link}
                    {email_link}
                    {phone_link}
                    {website_link}
                </div>
            </div>
        </li>
    }
}
