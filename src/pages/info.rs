//! Static informational pages. Plain markup; the document title comes from
//! the route table and the copy itself lives in content management.

use leptos::prelude::*;

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"FAQ"</h1>
        </div>
    }
}

#[component]
pub fn RulesPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"Community Rules"</h1>
        </div>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"Privacy Policy"</h1>
        </div>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"Terms of Service"</h1>
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"Contact Us"</h1>
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"About Us"</h1>
        </div>
    }
}

#[component]
pub fn LegalPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"Legal Notice"</h1>
        </div>
    }
}
