//! Input processing module
//! Loads résumé records and job posting text from disk

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
