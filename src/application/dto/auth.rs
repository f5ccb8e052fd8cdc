#[derive(Debug, Clone)]
pub struct LoginDTO {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct TokenDTO {
    pub token: String,
}
