/// Serialized identity of the logged-in user
pub const USER_KEY: &str = "engihub_user";
/// `"light"` or `"dark"`
pub const THEME_KEY: &str = "theme";
/// `"true"` or `"false"`
pub const LOW_DATA_MODE_KEY: &str = "lowDataMode";
