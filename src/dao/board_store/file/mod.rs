mod config;
mod models;
mod store;

pub use config::FileStoreConfig;
pub use store::FileBoardStore;
