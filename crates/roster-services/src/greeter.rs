//! Simple greeting service.

/// Produces a greeting for a fixed name.
#[derive(Debug, Clone)]
pub struct Greeter {
    name: String,
}

impl Greeter {
    /// Create a new greeter for the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Return the greeting message.
    pub fn greet(&self) -> String {
        format!("Hello, {}!", self.name)
    }
}

// ── tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name() {
        assert_eq!(Greeter::new("World").greet(), "Hello, World!");
        assert_eq!(Greeter::new("Rust").greet(), "Hello, Rust!");
    }
}
