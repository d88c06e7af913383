pub mod dashboard;
pub mod health_check;
pub mod history;
pub mod home;
pub mod login;
pub mod logout;
pub mod newsletters;
pub mod signup;
