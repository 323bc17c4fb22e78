pub mod product;
pub mod upload;

pub use product::{Category, Product};
pub use upload::UploadReport;
