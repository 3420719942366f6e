pub mod catalog;

pub use catalog::WorkService;
