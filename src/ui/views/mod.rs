pub mod build;
pub mod check;
pub mod contact;
pub mod diff;
pub mod projects;
pub mod watch;
