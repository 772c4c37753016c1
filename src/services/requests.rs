use dotenv_codegen::dotenv;

use crate::errors::Error;

const API_ROOT: &str = dotenv!("API_ROOT");

/// Single attempt, no body, no retry. Any completed response counts as
/// success whatever its status; the returned string is the response's final
/// URL, which serves as the post-logout redirect target. Only a rejected
/// request errors.
pub async fn request_logout() -> Result<String, Error> {
    let response = reqwest::Client::new()
        .post(format!("{}/api/auth/logout", API_ROOT))
        .send()
        .await?;

    Ok(response.url().to_string())
}
