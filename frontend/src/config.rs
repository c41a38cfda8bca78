
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Hosted identity provider the login form talks to.
pub fn get_auth_url() -> &'static str {
    option_env!("SPOTLESS_AUTH_URL").unwrap_or("https://auth.spotlesscleaning.co")
}

pub fn get_auth_anon_key() -> &'static str {
    option_env!("SPOTLESS_AUTH_ANON_KEY").unwrap_or("")
}
