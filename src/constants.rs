/// Application-wide constants to avoid magic values throughout the codebase.
/// Report formatting constants
pub mod report {
    /// First line of the plaintext report
    pub const HEADER: &str = "HTTP/3 Support Report:";
    /// Separator line printed directly under the header
    pub const SEPARATOR: &str = "-----------------------";
}

/// Status labels rendered in the report
pub mod status {
    /// Label for URLs whose response carried an `alt-svc` header
    pub const SUPPORTED: &str = "Supported";
    /// Label for URLs without the header, and for URLs that could not be
    /// checked at all
    pub const NOT_SUPPORTED: &str = "Not Supported";
}

/// Default HTTP client behavior
pub mod defaults {
    /// Maximum redirects followed per request
    pub const MAX_REDIRECTS: usize = 10;
}
