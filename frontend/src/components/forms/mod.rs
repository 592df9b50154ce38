pub mod restaurant_fields;

pub use restaurant_fields::RestaurantFields;
