// Application layer: concrete products built from the core controllers.

pub mod products;
