pub struct Store {
    pub items: Vec<String>,
}
