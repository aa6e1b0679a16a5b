pub const READ_COOKIES: &str = r#"
() => document.cookie
"#;

pub const WRITE_COOKIE: &str = r#"
(cookie) => {
    try {
        document.cookie = cookie;
        return { success: true };
    } catch (e) {
        return { success: false, error: e.name + ': ' + e.message };
    }
}
"#;
