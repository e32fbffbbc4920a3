pub mod repository;

pub use repository::IRepositoryService;
