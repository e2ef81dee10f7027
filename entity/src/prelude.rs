pub use super::booking::Entity as Booking;
pub use super::organization::Entity as Organization;
pub use super::room::Entity as Room;
pub use super::user::Entity as User;
