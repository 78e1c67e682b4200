pub mod auth;
pub mod clinical;
pub mod dashboard;
pub mod rbac;
pub mod resident;
pub mod settings;
