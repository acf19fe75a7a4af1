pub mod text_repo;

pub use text_repo::TextFileSolutionRepo;
