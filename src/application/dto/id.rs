#[derive(Debug, Clone)]
pub struct IdDTO {
    pub id: String,
}
