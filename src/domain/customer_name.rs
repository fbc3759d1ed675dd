#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerName(String);

impl CustomerName{
    /// Trims surrounding whitespace and rejects names that end up empty.
    pub fn parse(name: String) -> Result<CustomerName, String>{
        let trimmed = name.trim();

        if trimmed.is_empty(){
            Err("Customer name must not be empty".to_string())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn inner(&self) -> String {
        self.0.clone()
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
