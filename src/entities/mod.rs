pub mod category;
pub mod district;
pub mod order;
pub mod product;
pub mod product_image;
pub mod region;
pub mod user;
pub mod wishlist;
