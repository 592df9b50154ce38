pub mod use_restaurants;
