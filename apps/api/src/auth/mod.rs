// Bearer token handling
// Tokens are issued by the identity provider; the API only verifies them

pub mod jwt;
