pub mod character;
pub mod landing;
pub mod modal;
