mod get_theme;
mod toggle_theme;

pub use get_theme::GetTheme;
pub use toggle_theme::ToggleTheme;
