pub mod cart_list;
pub mod header;
pub mod product_list;
