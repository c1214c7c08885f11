pub mod end_screen;
pub mod hud;
