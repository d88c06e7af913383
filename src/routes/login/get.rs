use askama_axum::Template;
use axum::extract::Query;
use axum_messages::Messages;
use serde::Deserialize;

#[derive(Deserialize)]
pub(super) struct Parameters {
    redirect: Option<String>,
}

#[tracing::instrument(name = "Get login form", skip(messages, parameters))]
pub(super) async fn login_form(
    messages: Messages,
    Query(parameters): Query<Parameters>,
) -> LoginForm<'static> {
    let flashes = messages.map(|m| m.message).collect();

    LoginForm {
        page_title: "Login",
        email_label: "Email",
        email_placeholder: "Enter email",
        password_label: "Password",
        password_placeholder: "Enter password",
        submit_label: "Login",
        signup_hint: "No account yet?",
        signup_label: "Sign up",
        flashes,
        action: "/login",
        redirect: parameters.redirect.unwrap_or_default(),
    }
}

#[derive(Template)]
#[template(path = "web/login_form.html")]
pub(super) struct LoginForm<'a> {
    page_title: &'a str,
    email_label: &'a str,
    email_placeholder: &'a str,
    password_label: &'a str,
    password_placeholder: &'a str,
    submit_label: &'a str,
    signup_hint: &'a str,
    signup_label: &'a str,
    action: &'a str,
    redirect: String,
    flashes: Vec<String>,
}
