//! Static pages: the root banner and the logout form.

use axum::response::Html;

/// GET / - service banner.
pub async fn index() -> &'static str {
    "Authentication using Appwrite"
}

/// GET /logout - minimal HTML form posting to the logout flow, for
/// cookie-based browser sessions.
pub async fn logout_page() -> Html<&'static str> {
    Html(
        r#"
        <form action="/logout" method="POST">
            <button type="submit" style="padding: 10px 20px; cursor: pointer;">
                Logout
            </button>
        </form>
    "#,
    )
}
