pub mod institution_repo;
pub use institution_repo::InstitutionRepository;
pub mod profile_repo;
pub use profile_repo::ProfileRepository;
pub mod role_repo;
pub use role_repo::RoleRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
