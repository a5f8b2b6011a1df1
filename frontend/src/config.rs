#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000" // backend run separately during development
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "" // same origin
}
