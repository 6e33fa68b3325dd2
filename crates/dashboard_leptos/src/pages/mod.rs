use leptos::prelude::document;

mod dashboard;
mod not_found;
mod profile;
mod sign_in;
mod student_add;
mod student_detail;
mod students;
mod user_add;
mod user_detail;
mod users;

pub use dashboard::DashboardHome;
pub use not_found::NotFound;
pub use profile::Profile;
pub use sign_in::SignIn;
pub use student_add::AddStudent;
pub use student_detail::StudentDetail;
pub use students::Students;
pub use user_add::AddUser;
pub use user_detail::UserDetail;
pub use users::Users;

/// Set the browser tab title.
fn set_page_title(title: &str) {
    document().set_title(title);
}

/// Wire/display pairs for the account role select.
fn role_options() -> Vec<(String, String)> {
    vec![
        ("admin".to_string(), "Admin".to_string()),
        ("superadmin".to_string(), "Superadmin".to_string()),
    ]
}
