pub mod auth;
pub mod clinical;
pub mod dashboard;
pub mod residents;
pub mod settings;
pub mod users;
