use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
mod layout;
mod pages;
pub mod store;

use components::ToastContainer;
use layout::Shell;
use pages::{
    AddStudent, AddUser, DashboardHome, NotFound, Profile, SignIn, StudentDetail, Students,
    UserDetail, Users,
};

/// Root application component.
///
/// Every route except the sign-in screen is wrapped in [`Shell`], which
/// re-checks the session on each page mount before rendering its content.
#[component]
pub fn App() -> impl IntoView {
    store::provide_store();

    view! {
        <ToastContainer>
            <Router>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=SignIn/>
                    <Route path=path!("dashboard") view=|| view! { <Shell><DashboardHome/></Shell> }/>
                    <Route path=path!("users") view=|| view! { <Shell><Users/></Shell> }/>
                    <Route path=path!("users/add") view=|| view! { <Shell><AddUser/></Shell> }/>
                    <Route path=path!("users/:id") view=|| view! { <Shell><UserDetail/></Shell> }/>
                    <Route path=path!("students") view=|| view! { <Shell><Students/></Shell> }/>
                    <Route path=path!("students/add") view=|| view! { <Shell><AddStudent/></Shell> }/>
                    <Route path=path!("students/:id") view=|| view! { <Shell><StudentDetail/></Shell> }/>
                    <Route path=path!("profile") view=|| view! { <Shell><Profile/></Shell> }/>
                </Routes>
            </Router>
        </ToastContainer>
    }
}
