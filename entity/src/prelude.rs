pub use super::delivery::Entity as Delivery;
pub use super::item::Entity as Item;
pub use super::member::Entity as Member;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
