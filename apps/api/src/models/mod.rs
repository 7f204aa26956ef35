pub mod bio;
pub mod cover_letter;
pub mod reference;
pub mod resume;
