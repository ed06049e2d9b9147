pub mod app_error;
pub mod dictionaries;
pub mod landing_page;
pub mod language;
pub mod submission_form;
pub mod use_cases;
pub mod validators;
