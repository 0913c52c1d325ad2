pub mod member;
pub mod order_simple;
