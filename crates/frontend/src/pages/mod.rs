pub mod gallery;
pub mod login;

pub use gallery::GalleryPage;
pub use login::LoginPage;
