/// Use cases module containing application business logic orchestration
mod diff_listings;

pub use diff_listings::DiffListingsUseCase;
