mod dashboard;
mod journeys;
mod login;
mod not_found;
mod profile;
mod reset_password;
mod set_password;
mod verify_identity;

pub(crate) use dashboard::DashboardPage;
pub(crate) use journeys::{JourneyCreatePage, JourneyEditPage, JourneyListPage};
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use reset_password::ResetPasswordPage;
pub(crate) use set_password::SetPasswordPage;
pub(crate) use verify_identity::VerifyIdentityPage;

use crate::features::auth::{ProtectedRoute, PublicRoute};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route constants shared by navigation chrome and redirects.
pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const PROFILE: &str = "/profile";
    pub const JOURNEYS: &str = "/journeys";
    pub const JOURNEY_NEW: &str = "/journeys/new";
    pub const VERIFY_IDENTITY: &str = "/verify-identity";
    pub const SET_PASSWORD: &str = "/set-password";
    pub const RESET_PASSWORD: &str = "/reset-password";

    pub fn journey_edit(id: &str) -> String {
        format!("/journeys/{id}/edit")
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route
                path=path!("/")
                view=|| view! { <ProtectedRoute><DashboardPage /></ProtectedRoute> }
            />
            <Route
                path=path!("/dashboard")
                view=|| view! { <ProtectedRoute><DashboardPage /></ProtectedRoute> }
            />
            <Route
                path=path!("/login")
                view=|| view! { <PublicRoute><LoginPage /></PublicRoute> }
            />
            <Route
                path=path!("/verify-identity")
                view=|| view! { <PublicRoute><VerifyIdentityPage /></PublicRoute> }
            />
            <Route
                path=path!("/set-password")
                view=|| view! { <PublicRoute><SetPasswordPage /></PublicRoute> }
            />
            <Route
                path=path!("/reset-password")
                view=|| view! { <PublicRoute><ResetPasswordPage /></PublicRoute> }
            />
            <Route
                path=path!("/profile")
                view=|| view! { <ProtectedRoute><ProfilePage /></ProtectedRoute> }
            />
            <Route
                path=path!("/journeys")
                view=|| view! { <ProtectedRoute><JourneyListPage /></ProtectedRoute> }
            />
            <Route
                path=path!("/journeys/new")
                view=|| view! { <ProtectedRoute><JourneyCreatePage /></ProtectedRoute> }
            />
            <Route
                path=path!("/journeys/:id/edit")
                view=|| view! { <ProtectedRoute><JourneyEditPage /></ProtectedRoute> }
            />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
