use std::env;

pub const DEFAULT_COLLEGE_DOMAIN: &str = "@mitaoe.ac.in";

/// The email domain every account must belong to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollegeConfig {
    pub email_domain: String,
}

impl CollegeConfig {
    pub fn from_env() -> Self {
        let domain = env::var("SAMAYSETU_COLLEGE_DOMAIN")
            .ok()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_COLLEGE_DOMAIN.to_string());
        Self::new(domain)
    }

    /// Accepts the domain with or without the leading `@`.
    pub fn new(domain: impl Into<String>) -> Self {
        let domain: String = domain.into();
        let email_domain = if domain.starts_with('@') {
            domain
        } else {
            format!("@{}", domain)
        };
        Self { email_domain }
    }

    pub fn accepts(&self, email: &str) -> bool {
        email.ends_with(&self.email_domain)
    }
}

impl Default for CollegeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COLLEGE_DOMAIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_gets_at_prefix() {
        assert_eq!(CollegeConfig::new("example.edu").email_domain, "@example.edu");
        assert_eq!(CollegeConfig::new("@example.edu").email_domain, "@example.edu");
    }

    #[test]
    fn test_accepts_only_college_addresses() {
        let college = CollegeConfig::default();
        assert!(college.accepts("asha.patil@mitaoe.ac.in"));
        assert!(!college.accepts("asha.patil@gmail.com"));
        assert!(!college.accepts("mitaoe.ac.in"));
    }
}
