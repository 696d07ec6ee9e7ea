//! Footer Component

use leptos::prelude::*;

use crate::components::NavLink;
use crate::router::Route;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <p class="footer-title">"🎓 EduSearch"</p>
                    <p class="footer-text">
                        "Find the best consultancy for your course abroad and kickstart your international education journey."
                    </p>
                </div>

                <div>
                    <h3 class="footer-heading">"Quick Links"</h3>
                    <ul class="footer-links">
                        <li><NavLink route=Route::Home>"Home"</NavLink></li>
                        <li><NavLink route=Route::Register>"Register"</NavLink></li>
                        <li><NavLink route=Route::Login>"Login"</NavLink></li>
                        <li><NavLink route=Route::Profile>"Profile"</NavLink></li>
                    </ul>
                </div>

                <div>
                    <h3 class="footer-heading">"Contact"</h3>
                    <ul class="footer-links">
                        <li><a href="mailto:info@edusearch.com">"info@edusearch.com"</a></li>
                        <li><a href="tel:+1234567890">"+1 (234) 567-890"</a></li>
                    </ul>
                </div>
            </div>

            <p class="footer-copy">{format!("© {} EduSearch. All rights reserved.", year)}</p>
        </footer>
    }
}
