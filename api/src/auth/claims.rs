use serde::{Deserialize, Serialize};

/// JWT payload: user id, expiry (unix seconds) and the admin flag.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub exp: usize,
    pub admin: bool,
}

/// Request-scoped identity, placed in request extensions by the auth guards.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
