use askama_axum::Template;
use axum_messages::Messages;

#[tracing::instrument(name = "Get signup form", skip(messages))]
pub(super) async fn signup_form(messages: Messages) -> SignupForm<'static> {
    let flashes = messages.map(|m| m.message).collect();

    SignupForm {
        page_title: "Sign up",
        name_label: "Name",
        name_placeholder: "Enter your name",
        email_label: "Email",
        email_placeholder: "Enter email",
        password_label: "Password",
        password_placeholder: "Choose a password",
        submit_label: "Create account",
        login_hint: "Already have an account?",
        login_label: "Login",
        flashes,
        action: "/signup",
    }
}

#[derive(Template)]
#[template(path = "web/signup_form.html")]
pub(super) struct SignupForm<'a> {
    page_title: &'a str,
    name_label: &'a str,
    name_placeholder: &'a str,
    email_label: &'a str,
    email_placeholder: &'a str,
    password_label: &'a str,
    password_placeholder: &'a str,
    submit_label: &'a str,
    login_hint: &'a str,
    login_label: &'a str,
    action: &'a str,
    flashes: Vec<String>,
}
