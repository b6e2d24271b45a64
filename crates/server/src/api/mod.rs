pub mod cart;
pub mod marketing;
pub mod menu;
pub mod modifiers;
